use gloo_net::http::{Request, Response};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stockroom_domain as domain;
use stockroom_web_app::{Backend, Config};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub config: Config,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            sender: GlooNetSendRequest,
            config,
        }
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }

    fn sign_up_url(&self) -> String {
        self.url(match self.config.backend {
            Backend::InventoryApp => "/api/users/signup",
            Backend::UserManagement => "/api/auth/signup",
        })
    }

    fn log_in_url(&self) -> String {
        self.url(match self.config.backend {
            Backend::InventoryApp => "/api/users/login",
            Backend::UserManagement => "/api/auth/login",
        })
    }

    fn products_url(&self) -> String {
        self.url(match self.config.backend {
            Backend::InventoryApp => "/api/products",
            Backend::UserManagement => "/api/products/all",
        })
    }

    fn product_url(&self, id: domain::ProductID) -> String {
        self.url(&format!("/api/products/{id}"))
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, domain::StorageError> {
        let request = request.map_err(|err| domain::StorageError::Other(err.into()))?;
        let Ok(response) = self.sender.send_request(request).await else {
            return Err(domain::StorageError::NoConnection);
        };
        if response.ok() {
            Ok(response)
        } else {
            Err(rejection(&response).await.into())
        }
    }

    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::StorageError>
    where
        T: 'static + for<'de> Deserialize<'de>,
    {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|err| {
            domain::StorageError::Other(format!("deserialization failed: {err}").into())
        })
    }

    async fn fetch_text(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<String, domain::StorageError> {
        let response = self.send(request).await?;
        response
            .text()
            .await
            .map_err(|err| domain::StorageError::Other(err.into()))
    }

    async fn fetch_no_content<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
        result: T,
    ) -> Result<T, domain::StorageError> {
        self.send(request).await?;
        Ok(result)
    }
}

async fn rejection(response: &Response) -> domain::Rejection {
    let message = match response.text().await {
        Ok(body) => message_from_body(&body),
        Err(_) => None,
    };
    domain::Rejection {
        status: response.status(),
        message,
    }
}

/// Extracts the human readable part of a response body.
///
/// Bodies are either JSON objects carrying a `message` field, JSON strings or plain text.
fn message_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(Value::String(message)) => Some(message),
        Ok(_) | Err(_) => Some(body.to_string()),
    };
    message.filter(|message| !message.trim().is_empty())
}

fn read_error(err: domain::StorageError) -> domain::ReadError {
    match err {
        domain::StorageError::Rejected(domain::Rejection { status: 404, .. }) => {
            domain::ReadError::NotFound
        }
        err => err.into(),
    }
}

fn create_error(err: domain::StorageError) -> domain::CreateError {
    match err {
        domain::StorageError::Rejected(domain::Rejection { status: 409, .. }) => {
            domain::CreateError::Conflict
        }
        err => err.into(),
    }
}

fn update_error(err: domain::StorageError) -> domain::UpdateError {
    match err {
        domain::StorageError::Rejected(domain::Rejection { status: 404, .. }) => {
            domain::UpdateError::NotFound
        }
        domain::StorageError::Rejected(domain::Rejection { status: 409, .. }) => {
            domain::UpdateError::Conflict
        }
        err => err.into(),
    }
}

fn delete_error(err: domain::StorageError) -> domain::DeleteError {
    match err {
        domain::StorageError::Rejected(domain::Rejection { status: 404, .. }) => {
            domain::DeleteError::NotFound
        }
        err => err.into(),
    }
}

impl<S: SendRequest> domain::AccountRepository for REST<S> {
    async fn sign_up(
        &self,
        registration: domain::Registration,
    ) -> Result<String, domain::CreateError> {
        let body = self
            .fetch_text(
                Request::post(&self.sign_up_url())
                    .json(&SignUpRequest::new(&registration, self.config.backend)),
            )
            .await
            .map_err(create_error)?;
        Ok(message_from_body(&body).unwrap_or_default())
    }

    async fn log_in(
        &self,
        credentials: domain::Credentials,
    ) -> Result<domain::Session, domain::ReadError> {
        let response: LogInResponse = self
            .fetch(Request::post(&self.log_in_url()).json(&LogInRequest::from(&credentials)))
            .await?;
        Ok(domain::Session::try_from(response)?)
    }
}

impl<S: SendRequest> domain::ProductRepository for REST<S> {
    async fn read_products(&self) -> Result<Vec<domain::Product>, domain::ReadError> {
        let products: Vec<Product> = self
            .fetch(Request::get(&self.products_url()).build())
            .await
            .map_err(read_error)?;
        Ok(products
            .into_iter()
            .filter_map(|product| {
                let id = product.id;
                domain::Product::try_from(product)
                    .inspect_err(|err| warn!("ignoring invalid product {id:?}: {err}"))
                    .ok()
            })
            .collect())
    }

    async fn read_inventory_summary(
        &self,
    ) -> Result<domain::InventorySummary, domain::ReadError> {
        let summary: Summary = self
            .fetch(Request::get(&self.url("/api/products/summary")).build())
            .await
            .map_err(read_error)?;
        Ok(summary.into())
    }

    async fn create_product(
        &self,
        product: domain::ProductDraft,
    ) -> Result<domain::Product, domain::CreateError> {
        let response: ProductResponse = self
            .fetch(Request::post(&self.url("/api/products")).json(&Product::from(&product)))
            .await
            .map_err(create_error)?;
        Ok(domain::Product::try_from(Product::from(response))?)
    }

    async fn replace_product(
        &self,
        product: domain::Product,
    ) -> Result<domain::Product, domain::UpdateError> {
        let response: ProductResponse = self
            .fetch(
                Request::put(&self.product_url(product.id)).json(&Product::from(&product)),
            )
            .await
            .map_err(update_error)?;
        Ok(domain::Product::try_from(Product::from(response))?)
    }

    async fn delete_product(
        &self,
        id: domain::ProductID,
    ) -> Result<domain::ProductID, domain::DeleteError> {
        self.fetch_no_content(Request::delete(&self.product_url(id)).build(), id)
            .await
            .map_err(delete_error)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl SignUpRequest {
    fn new(registration: &domain::Registration, backend: Backend) -> Self {
        let (location, warehouse_location) = match backend {
            Backend::InventoryApp => (registration.location.clone(), None),
            Backend::UserManagement => (None, registration.location.clone()),
        };
        Self {
            full_name: registration.name.to_string(),
            email: registration.email.to_string(),
            password: registration.password.expose().to_string(),
            confirm_password: registration.password.expose().to_string(),
            role: registration.role.to_string(),
            location,
            warehouse_location,
            department: registration.department.clone(),
            phone_number: registration
                .phone_number
                .as_ref()
                .map(|phone_number| phone_number.as_ref().to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

impl From<&domain::Credentials> for LogInRequest {
    fn from(value: &domain::Credentials) -> Self {
        Self {
            email: value.email.clone(),
            password: value.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LogInResponse {
    Wrapped {
        success: bool,
        message: Option<String>,
        user: Option<User>,
    },
    #[serde(rename_all = "camelCase")]
    Flat {
        message: Option<String>,
        role: Option<String>,
        full_name: Option<String>,
        email: Option<String>,
    },
}

impl TryFrom<LogInResponse> for domain::Session {
    type Error = domain::StorageError;

    fn try_from(value: LogInResponse) -> Result<Self, Self::Error> {
        let user = match value {
            LogInResponse::Wrapped {
                success: true,
                user: Some(user),
                ..
            } => user,
            LogInResponse::Flat {
                role: Some(role),
                full_name: Some(full_name),
                email: Some(email),
                ..
            } => User {
                full_name,
                email,
                role,
            },
            LogInResponse::Wrapped { message, .. } | LogInResponse::Flat { message, .. } => {
                return Err(domain::Rejection {
                    status: 200,
                    message: message.filter(|message| !message.trim().is_empty()),
                }
                .into());
            }
        };
        domain::Session::try_from(user)
    }
}

impl TryFrom<User> for domain::Session {
    type Error = domain::StorageError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(domain::Session {
            name: domain::Name::new(&value.full_name)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
            email: domain::Email::new(&value.email)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
            role: domain::Role::new(&value.role)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
        })
    }
}

impl From<&domain::Session> for User {
    fn from(value: &domain::Session) -> Self {
        Self {
            full_name: value.name.to_string(),
            email: value.email.to_string(),
            role: value.role.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "quantity", skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&domain::ProductDraft> for Product {
    fn from(value: &domain::ProductDraft) -> Self {
        Self {
            id: None,
            name: value.name.to_string(),
            price: *value.price,
            image_url: value.image_url.clone(),
            category: value.category.clone(),
            current_stock: value.stock,
            description: value.description.clone(),
        }
    }
}

impl From<&domain::Product> for Product {
    fn from(value: &domain::Product) -> Self {
        Self {
            id: Some(*value.id),
            ..Self::from(&value.draft())
        }
    }
}

impl TryFrom<Product> for domain::Product {
    type Error = domain::StorageError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let Some(id) = value.id else {
            return Err(domain::StorageError::Other("product without id".into()));
        };
        Ok(domain::Product {
            id: id.into(),
            name: domain::Name::new(&value.name)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
            price: domain::Price::new(value.price)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
            image_url: value.image_url.as_deref().and_then(domain::optional_text),
            category: value.category.as_deref().and_then(domain::optional_text),
            stock: value.current_stock,
            description: value.description.as_deref().and_then(domain::optional_text),
        })
    }
}

/// The created or updated product, either bare or wrapped together with a status message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductResponse {
    Wrapped { product: Product },
    Bare(Product),
}

impl From<ProductResponse> for Product {
    fn from(value: ProductResponse) -> Self {
        match value {
            ProductResponse::Wrapped { product } | ProductResponse::Bare(product) => product,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub product_count: u32,
    pub total_items: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<Summary> for domain::InventorySummary {
    fn from(value: Summary) -> Self {
        Self {
            product_count: value.product_count,
            total_items: value.total_items,
            total_value: domain::Amount::new(value.total_price),
        }
    }
}
