use std::rc::Rc;

use stockroom_domain::{AccountService, DeleteError, Product, ProductService, Screen};

use crate::{
    Scope,
    page::{self, Page, Status},
};

/// Read-only product table for administrators.
pub struct AdminDashboard {
    scope: Rc<Scope>,
    status: Status,
    products: Vec<Product>,
}

impl Page for AdminDashboard {
    const SCREEN: Screen = Screen::AdminDashboard;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            status: Status::Loading,
            products: vec![],
        }
    }
}

impl AdminDashboard {
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

    pub fn log_out(&self, account_service: &impl AccountService) -> Result<Screen, DeleteError> {
        page::log_out(&self.scope, account_service)
    }
}
