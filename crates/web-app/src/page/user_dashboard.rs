use std::rc::Rc;

use stockroom_domain::{
    AccountService, DeleteError, InventorySummary, ProductService, Screen,
};

use crate::{
    Scope,
    page::{self, Page, Status},
};

/// Inventory summary for users without management rights.
pub struct UserDashboard {
    scope: Rc<Scope>,
    status: Status,
    summary: Option<InventorySummary>,
}

impl Page for UserDashboard {
    const SCREEN: Screen = Screen::UserDashboard;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            status: Status::Loading,
            summary: None,
        }
    }
}

impl UserDashboard {
    pub async fn load(&mut self, product_service: &impl ProductService) {
        let Some(result) = self.scope.run(product_service.get_inventory_summary()).await else {
            return;
        };
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.status = Status::Ready;
            }
            Err(_) => self.status = Status::Unavailable,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// `None` until the summary has been loaded successfully.
    #[must_use]
    pub fn summary(&self) -> Option<&InventorySummary> {
        self.summary.as_ref()
    }

    pub fn log_out(&self, account_service: &impl AccountService) -> Result<Screen, DeleteError> {
        page::log_out(&self.scope, account_service)
    }
}
