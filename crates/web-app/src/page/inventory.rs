use std::rc::Rc;

use stockroom_domain::{
    Name, Price, Product, ProductDraft, ProductID, ProductService, Screen, ValidationError,
    optional_text,
};

use crate::{
    Scope,
    page::{Feedback, Page, Status},
};

pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const PRODUCT_UPDATED: &str = "Product updated successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";
pub const OPERATION_FAILED: &str = "Operation failed";
pub const DELETE_FAILED: &str = "Error deleting product";

/// The raw content of the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductForm {
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        let name = Name::new(&self.name).map_err(|err| ValidationError::Other(err.into()))?;
        let price = Price::try_from(self.price.as_str())
            .map_err(|err| ValidationError::Other(err.into()))?;
        let stock = match self.stock.trim() {
            "" => None,
            stock => Some(
                stock
                    .parse::<u32>()
                    .map_err(|_| ValidationError::Other("Stock must be a whole number".into()))?,
            ),
        };

        Ok(ProductDraft {
            name,
            price,
            image_url: optional_text(&self.image_url),
            category: optional_text(&self.category),
            stock,
            description: optional_text(&self.description),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.to_string(),
            price: product.price.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            stock: product.stock.map(|stock| stock.to_string()).unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

/// Listing, creation, modification and deletion of products.
pub struct Inventory {
    scope: Rc<Scope>,
    status: Status,
    products: Vec<Product>,
    pub form: ProductForm,
    form_visible: bool,
    editing: Option<ProductID>,
    feedback: Option<Feedback>,
}

impl Page for Inventory {
    const SCREEN: Screen = Screen::Inventory;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            status: Status::Loading,
            products: vec![],
            form: ProductForm::default(),
            form_visible: false,
            editing: None,
            feedback: None,
        }
    }
}

impl Inventory {
    pub async fn load(&mut self, product_service: &impl ProductService) {
        let Some(result) = self.scope.run(product_service.get_products()).await else {
            return;
        };
        match result {
            Ok(products) => {
                self.products = products;
                self.status = Status::Ready;
            }
            Err(_) => self.status = Status::Unavailable,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    /// The product being edited, `None` while a new product is entered.
    #[must_use]
    pub fn editing(&self) -> Option<ProductID> {
        self.editing
    }

    pub fn toggle_form(&mut self) {
        if self.form_visible {
            self.reset_form();
        } else {
            self.form_visible = true;
        }
    }

    pub fn edit(&mut self, id: ProductID) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.form = ProductForm::from(product);
            self.editing = Some(id);
            self.form_visible = true;
        }
    }

    pub fn reset_form(&mut self) {
        self.form = ProductForm::default();
        self.editing = None;
        self.form_visible = false;
    }

    pub async fn submit(&mut self, product_service: &impl ProductService) {
        self.feedback = None;

        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                self.feedback = Some(Feedback::Error(err.to_string()));
                return;
            }
        };

        let result = match self.editing {
            Some(id) => self
                .scope
                .run(product_service.replace_product(draft.with_id(id)))
                .await
                .map(|result| {
                    result
                        .map(|_| PRODUCT_UPDATED)
                        .map_err(|err| operation_failed(err.server_message()))
                }),
            None => self
                .scope
                .run(product_service.create_product(draft))
                .await
                .map(|result| {
                    result
                        .map(|_| PRODUCT_ADDED)
                        .map_err(|err| operation_failed(err.server_message()))
                }),
        };

        match result {
            None => {}
            Some(Ok(message)) => {
                self.reset_form();
                self.feedback = Some(Feedback::Success(message.to_string()));
                self.load(product_service).await;
            }
            Some(Err(message)) => self.feedback = Some(Feedback::Error(message)),
        }
    }

    pub async fn delete(&mut self, id: ProductID, product_service: &impl ProductService) {
        self.feedback = None;

        match self.scope.run(product_service.delete_product(id)).await {
            None => {}
            Some(Ok(_)) => {
                if self.editing == Some(id) {
                    self.reset_form();
                }
                self.feedback = Some(Feedback::Success(PRODUCT_DELETED.to_string()));
                self.load(product_service).await;
            }
            Some(Err(_)) => self.feedback = Some(Feedback::Error(DELETE_FAILED.to_string())),
        }
    }
}

fn operation_failed(server_message: Option<&str>) -> String {
    format!("Error: {}", server_message.unwrap_or(OPERATION_FAILED))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use stockroom_domain::{Name, Rejection, Role, StorageError};

    use super::*;
    use crate::page::{
        Mounted, mount,
        tests::{Backend, product},
    };

    #[fixture]
    fn backend() -> Backend {
        Backend::with_session(Role::StoreManager).with_products(vec![
            product(1, "Cricket Bat", 1200),
            product(2, "Toy Car", 250),
        ])
    }

    fn inventory(backend: &Backend) -> Inventory {
        let Mounted::Page(mut page) = mount::<Inventory>(backend) else {
            panic!("inventory must open for a store manager");
        };
        block_on(page.load(backend));
        page
    }

    #[rstest]
    #[case(None, Screen::LogIn)]
    #[case(Some(Role::User), Screen::UserDashboard)]
    fn test_open_rejected(#[case] role: Option<Role>, #[case] expected: Screen) {
        let backend = role
            .map_or_else(Backend::default, Backend::with_session)
            .with_products(vec![product(1, "Cricket Bat", 1200)]);

        assert!(matches!(
            mount::<Inventory>(&backend),
            Mounted::Redirect(screen) if screen == expected
        ));
        assert_eq!(backend.requests.get(), 0);
    }

    #[rstest]
    #[case(Role::Admin)]
    #[case(Role::StoreManager)]
    fn test_open(#[case] role: Role) {
        assert!(matches!(
            mount::<Inventory>(&Backend::with_session(role)),
            Mounted::Page(_)
        ));
    }

    #[rstest]
    fn test_create(backend: Backend) {
        let mut page = inventory(&backend);
        backend
            .products
            .borrow_mut()
            .push_back(Ok(vec![product(1, "Cricket Bat", 1200)]));

        page.toggle_form();
        page.form.name = "Football".to_string();
        page.form.price = "450,50".to_string();
        page.form.stock = "7".to_string();
        block_on(page.submit(&backend));

        assert_eq!(
            page.feedback(),
            Some(&Feedback::Success(PRODUCT_ADDED.to_string()))
        );
        assert_eq!(backend.created.borrow().len(), 1);
        assert_eq!(backend.created.borrow()[0].name, Name::new("Football").unwrap());
        assert_eq!(backend.created.borrow()[0].price.to_string(), "450.50");
        assert_eq!(backend.created.borrow()[0].stock, Some(7));
        assert_eq!(page.form, ProductForm::default());
        assert!(!page.form_visible());
        assert_eq!(page.products().len(), 1);
        assert_eq!(backend.requests.get(), 3);
    }

    #[rstest]
    fn test_update(backend: Backend) {
        let mut page = inventory(&backend);
        backend
            .products
            .borrow_mut()
            .push_back(Ok(vec![product(1, "Cricket Bat", 1500)]));

        page.edit(1.into());
        assert_eq!(page.editing(), Some(1.into()));
        assert_eq!(page.form.name, "Cricket Bat");
        assert_eq!(page.form.price, "1200.00");

        page.form.price = "1500".to_string();
        block_on(page.submit(&backend));

        assert_eq!(
            page.feedback(),
            Some(&Feedback::Success(PRODUCT_UPDATED.to_string()))
        );
        assert_eq!(backend.replaced.borrow()[0], product(1, "Cricket Bat", 1500));
        assert_eq!(page.editing(), None);
        assert_eq!(page.products(), &[product(1, "Cricket Bat", 1500)]);
    }

    #[rstest]
    #[case("", "1", "Name must not be empty")]
    #[case("Football", "-1", "Price must not be negative")]
    #[case("Football", "cheap", "Price must be a decimal number")]
    fn test_submit_invalid(
        backend: Backend,
        #[case] name: &str,
        #[case] price: &str,
        #[case] message: &str,
    ) {
        let mut page = inventory(&backend);
        page.form.name = name.to_string();
        page.form.price = price.to_string();

        block_on(page.submit(&backend));

        assert_eq!(page.feedback(), Some(&Feedback::Error(message.to_string())));
        assert!(backend.created.borrow().is_empty());
        assert_eq!(backend.requests.get(), 1);
    }

    #[rstest]
    fn test_create_with_name_of_existing_product(backend: Backend) {
        let mut page = inventory(&backend);
        backend
            .products
            .borrow_mut()
            .push_back(Ok(vec![product(2, "Toy Car", 250), product(100, "Toy Car", 300)]));
        page.form.name = "Toy Car".to_string();
        page.form.price = "300".to_string();

        block_on(page.submit(&backend));

        assert_eq!(
            page.feedback(),
            Some(&Feedback::Success(PRODUCT_ADDED.to_string()))
        );
        assert_eq!(backend.created.borrow()[0].name, Name::new("Toy Car").unwrap());
        assert_eq!(page.products().len(), 2);
    }

    #[rstest]
    #[case(Some("Price must be positive"), "Error: Price must be positive")]
    #[case(None, "Error: Operation failed")]
    fn test_submit_rejected(backend: Backend, #[case] message: Option<&str>, #[case] expected: &str) {
        let mut page = inventory(&backend);
        *backend.mutation.borrow_mut() = Some(StorageError::Rejected(Rejection {
            status: 400,
            message: message.map(str::to_string),
        }));
        page.form.name = "Football".to_string();
        page.form.price = "450".to_string();

        block_on(page.submit(&backend));

        assert_eq!(page.feedback(), Some(&Feedback::Error(expected.to_string())));
        assert_eq!(page.form.name, "Football");
        assert_eq!(page.products().len(), 2);
        assert_eq!(backend.requests.get(), 2);
    }

    #[rstest]
    fn test_delete(backend: Backend) {
        let mut page = inventory(&backend);
        backend
            .products
            .borrow_mut()
            .push_back(Ok(vec![product(2, "Toy Car", 250)]));
        page.edit(1.into());

        block_on(page.delete(1.into(), &backend));

        assert_eq!(
            page.feedback(),
            Some(&Feedback::Success(PRODUCT_DELETED.to_string()))
        );
        assert_eq!(*backend.deleted.borrow(), vec![ProductID::from(1)]);
        assert_eq!(page.editing(), None);
        assert_eq!(page.products(), &[product(2, "Toy Car", 250)]);
    }

    #[rstest]
    fn test_delete_failed(backend: Backend) {
        let mut page = inventory(&backend);
        *backend.mutation.borrow_mut() = Some(StorageError::NoConnection);

        block_on(page.delete(1.into(), &backend));

        assert_eq!(
            page.feedback(),
            Some(&Feedback::Error(DELETE_FAILED.to_string()))
        );
        assert_eq!(page.products().len(), 2);
    }

    #[rstest]
    fn test_toggle_form(backend: Backend) {
        let mut page = inventory(&backend);
        page.edit(2.into());
        assert!(page.form_visible());

        page.toggle_form();

        assert!(!page.form_visible());
        assert_eq!(page.editing(), None);
        assert_eq!(page.form, ProductForm::default());
    }

    #[rstest]
    #[case("", None)]
    #[case(" 12 ", Some(12))]
    fn test_form_stock(#[case] stock: &str, #[case] expected: Option<u32>) {
        let form = ProductForm {
            name: "Football".to_string(),
            price: "450".to_string(),
            stock: stock.to_string(),
            ..ProductForm::default()
        };
        assert_eq!(form.validate().unwrap().stock, expected);
    }

    #[test]
    fn test_form_invalid_stock() {
        let form = ProductForm {
            name: "Football".to_string(),
            price: "450".to_string(),
            stock: "-3".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Stock must be a whole number"
        );
    }
}
