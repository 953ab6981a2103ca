//! Screen models
//!
//! Each model holds the state of one screen and is driven by UI events. Models can only be
//! created through [`mount`], so a screen the session guard rejected never exists and cannot
//! issue a request.

use std::rc::Rc;

use stockroom_domain::{AccountService, DeleteError, Screen, SessionService};

use crate::{Gate, Scope, enter};

pub mod admin_dashboard;
pub mod dashboard;
pub mod inventory;
pub mod log_in;
pub mod sign_up;
pub mod user_dashboard;
pub mod welcome;

pub trait Page: Sized {
    const SCREEN: Screen;

    fn open(scope: Rc<Scope>) -> Self;
}

#[derive(Debug)]
pub enum Mounted<P> {
    Page(P),
    Redirect(Screen),
}

pub fn mount<P: Page>(session_service: &impl SessionService) -> Mounted<P> {
    match enter(P::SCREEN, session_service) {
        Gate::Open(scope) => Mounted::Page(P::open(scope)),
        Gate::Redirect(screen) => Mounted::Redirect(screen),
    }
}

/// A message shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Progress of the data a screen loads when it is opened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Loading,
    Ready,
    /// The request failed. The screen shows no data.
    Unavailable,
}

/// Ends the session and closes the screen.
///
/// The screen stays open if the session could not be removed.
pub fn log_out(
    scope: &Scope,
    account_service: &impl AccountService,
) -> Result<Screen, DeleteError> {
    account_service.log_out()?;
    scope.tear_down();
    Ok(Screen::Welcome)
}
