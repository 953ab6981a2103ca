use std::rc::Rc;

use stockroom_domain::{
    AccountService, Amount, Cart, DeleteError, Product, ProductService, Screen, Session,
};

use crate::{
    Scope,
    page::{self, Page, Status},
};

/// Product catalog with a shopping cart and the running bill.
pub struct Dashboard {
    scope: Rc<Scope>,
    status: Status,
    products: Vec<Product>,
    cart: Cart,
}

impl Page for Dashboard {
    const SCREEN: Screen = Screen::Dashboard;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            status: Status::Loading,
            products: vec![],
            cart: Cart::new(),
        }
    }
}

impl Dashboard {
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
    pub fn session(&self) -> Option<&Session> {
        self.scope.session()
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
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, product: &Product) {
        self.cart.increment(product);
    }

    pub fn remove(&mut self, product: &Product) {
        self.cart.decrement(product);
    }

    #[must_use]
    pub fn total(&self) -> Amount {
        self.cart.total()
    }

    /// Whether the link to the inventory management is offered.
    #[must_use]
    pub fn can_manage_inventory(&self) -> bool {
        self.session()
            .is_some_and(|session| session.role.can_manage_inventory())
    }

    pub fn log_out(&self, account_service: &impl AccountService) -> Result<Screen, DeleteError> {
        page::log_out(&self.scope, account_service)
    }
}
