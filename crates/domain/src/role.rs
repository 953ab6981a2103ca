use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::Screen;

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    #[strum(to_string = "User")]
    User,
    #[strum(to_string = "Admin")]
    Admin,
    #[strum(to_string = "Store Manager", serialize = "StoreManager")]
    StoreManager,
}

impl Role {
    /// Parses a wire name, ignoring surrounding whitespace and case.
    pub fn new(value: &str) -> Result<Self, RoleError> {
        value
            .trim()
            .parse()
            .map_err(|_: strum::ParseError| RoleError(value.to_string()))
    }

    /// The screen a user of this role lands on after logging in, and the target of a
    /// redirect when the role is not permitted on a screen.
    #[must_use]
    pub fn home(self) -> Screen {
        match self {
            Role::User => Screen::UserDashboard,
            Role::Admin => Screen::AdminDashboard,
            Role::StoreManager => Screen::Dashboard,
        }
    }

    #[must_use]
    pub fn can_manage_inventory(self) -> bool {
        match self {
            Role::Admin | Role::StoreManager => true,
            Role::User => false,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role \"{0}\"")]
pub struct RoleError(pub String);
