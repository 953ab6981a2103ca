#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod gate;
pub mod log;
pub mod page;
mod service;

pub use config::*;
pub use gate::*;
pub use service::Service;
