use log::{debug, error, warn};

use crate::{
    AccountRepository, AccountService, CreateError, Credentials, DeleteError, InventorySummary,
    Product, ProductDraft, ProductID, ProductRepository, ProductService, ReadError, Registration,
    Session, SessionRepository, SessionService, UpdateError,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                $error::Storage(crate::StorageError::Rejected(_)) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    fn get_session(&self) -> Option<Session> {
        match self.repository.read_session() {
            Ok(session) => session,
            Err(err) => {
                error!("failed to get session: {err}");
                None
            }
        }
    }
}

impl<R: SessionRepository + AccountRepository> AccountService for Service<R> {
    async fn sign_up(&self, registration: Registration) -> Result<String, CreateError> {
        log_on_error!(
            self.repository.sign_up(registration),
            CreateError,
            "sign up",
            "account"
        )
    }

    async fn log_in(&self, credentials: Credentials) -> Result<Session, ReadError> {
        let session = log_on_error!(
            self.repository.log_in(credentials),
            ReadError,
            "log in",
            "account"
        )?;
        self.repository.write_session(&session).map_err(|err| {
            error!("failed to store session: {err}");
            ReadError::Storage(err)
        })?;
        debug!("logged in as {}", session.role);
        Ok(session)
    }

    fn log_out(&self) -> Result<(), DeleteError> {
        self.repository.delete_session().map_err(|err| {
            error!("failed to delete session: {err}");
            DeleteError::Storage(err)
        })
    }
}

impl<R: ProductRepository> ProductService for Service<R> {
    async fn get_products(&self) -> Result<Vec<Product>, ReadError> {
        log_on_error!(self.repository.read_products(), ReadError, "get", "products")
    }

    async fn get_inventory_summary(&self) -> Result<InventorySummary, ReadError> {
        log_on_error!(
            self.repository.read_inventory_summary(),
            ReadError,
            "get",
            "inventory summary"
        )
    }

    async fn create_product(&self, product: ProductDraft) -> Result<Product, CreateError> {
        log_on_error!(
            self.repository.create_product(product),
            CreateError,
            "create",
            "product"
        )
    }

    async fn replace_product(&self, product: Product) -> Result<Product, UpdateError> {
        log_on_error!(
            self.repository.replace_product(product),
            UpdateError,
            "replace",
            "product"
        )
    }

    async fn delete_product(&self, id: ProductID) -> Result<ProductID, DeleteError> {
        log_on_error!(
            self.repository.delete_product(id),
            DeleteError,
            "delete",
            "product"
        )
    }
}
