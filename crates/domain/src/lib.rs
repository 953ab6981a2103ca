#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod account;
mod cart;
mod email;
mod error;
mod guard;
mod money;
mod name;
mod product;
mod role;
mod service;
mod session;

pub use account::*;
pub use cart::*;
pub use email::*;
pub use error::*;
pub use guard::*;
pub use money::*;
pub use name::*;
pub use product::*;
pub use role::*;
pub use service::*;
pub use session::*;
