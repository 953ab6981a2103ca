use std::rc::Rc;

use stockroom_domain::{AccountService, DeleteError, Screen};

use crate::{
    Scope,
    page::{self, Page},
};

pub struct Welcome {
    scope: Rc<Scope>,
}

impl Page for Welcome {
    const SCREEN: Screen = Screen::Welcome;

    fn open(scope: Rc<Scope>) -> Self {
        Self { scope }
    }
}

impl Welcome {
    /// The home screen of a user who is already logged in.
    #[must_use]
    pub fn continue_to(&self) -> Option<Screen> {
        self.scope.session().map(|session| session.role.home())
    }

    pub fn log_out(&self, account_service: &impl AccountService) -> Result<Screen, DeleteError> {
        page::log_out(&self.scope, account_service)
    }
}
