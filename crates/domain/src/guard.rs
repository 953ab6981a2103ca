//! Session guard
//!
//! Every screen declares who may see it. Before a screen renders anything or issues a request,
//! the persisted session is checked against that declaration and the outcome decides whether
//! the screen proceeds or which screen to redirect to.

use strum::{EnumIter, IntoStaticStr};

use crate::{Role, Session};

#[derive(EnumIter, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    #[strum(serialize = "/")]
    Welcome,
    #[strum(serialize = "/signup")]
    SignUp,
    #[strum(serialize = "/login")]
    LogIn,
    #[strum(serialize = "/dashboard")]
    Dashboard,
    #[strum(serialize = "/inventory")]
    Inventory,
    #[strum(serialize = "/admin-dashboard")]
    AdminDashboard,
    #[strum(serialize = "/user-dashboard")]
    UserDashboard,
}

impl Screen {
    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Screen::Welcome | Screen::SignUp | Screen::LogIn => Access::Public,
            Screen::Dashboard => Access::Restricted(&[]),
            Screen::Inventory => Access::Restricted(&[Role::Admin, Role::StoreManager]),
            Screen::AdminDashboard => Access::Restricted(&[Role::Admin]),
            Screen::UserDashboard => Access::Restricted(&[Role::User]),
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only sessions holding one of the roles may proceed. An empty set admits every
    /// authenticated role.
    Restricted(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allow,
    RedirectToLogin,
    RedirectToFallback(Screen),
}

impl Outcome {
    /// The screen to navigate to instead, if any.
    #[must_use]
    pub fn redirect(self) -> Option<Screen> {
        match self {
            Outcome::Allow => None,
            Outcome::RedirectToLogin => Some(Screen::LogIn),
            Outcome::RedirectToFallback(screen) => Some(screen),
        }
    }
}

#[must_use]
pub fn authorize(session: Option<&Session>, required_roles: &[Role]) -> Outcome {
    match session {
        None => Outcome::RedirectToLogin,
        Some(session) => {
            if required_roles.is_empty() || required_roles.contains(&session.role) {
                Outcome::Allow
            } else {
                Outcome::RedirectToFallback(session.role.home())
            }
        }
    }
}

#[must_use]
pub fn authorize_screen(session: Option<&Session>, screen: Screen) -> Outcome {
    match screen.access() {
        Access::Public => Outcome::Allow,
        Access::Restricted(required_roles) => authorize(session, required_roles),
    }
}
