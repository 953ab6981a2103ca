//! View gate
//!
//! A screen is entered through [`enter`], which evaluates the session guard synchronously. Only a
//! granted screen obtains a [`Scope`], and every request of the screen has to run through it.
//! Tearing the scope down discards the results of all requests which are still in flight.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

use futures_util::future::{AbortHandle, Abortable};
use log::debug;
use stockroom_domain::{Outcome, Screen, Session, SessionService};

#[derive(Debug)]
pub enum Gate {
    Open(Rc<Scope>),
    Redirect(Screen),
}

pub fn enter(screen: Screen, session_service: &impl SessionService) -> Gate {
    let session = session_service.get_session();
    match stockroom_domain::authorize_screen(session.as_ref(), screen) {
        Outcome::Allow => Gate::Open(Rc::new(Scope::new(screen, session))),
        outcome => {
            let target = outcome.redirect().unwrap_or(Screen::LogIn);
            debug!("redirecting from {} to {}", screen.path(), target.path());
            Gate::Redirect(target)
        }
    }
}

/// The lifetime of a mounted screen.
#[derive(Debug)]
pub struct Scope {
    screen: Screen,
    session: Option<Session>,
    active: Cell<bool>,
    next_request: Cell<usize>,
    pending: RefCell<Vec<(usize, AbortHandle)>>,
}

impl Scope {
    fn new(screen: Screen, session: Option<Session>) -> Self {
        Self {
            screen,
            session,
            active: Cell::new(true),
            next_request: Cell::new(0),
            pending: RefCell::new(vec![]),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The session the screen was granted with, absent on public screens without login.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Runs a request on behalf of the screen.
    ///
    /// Returns `None` if the scope has been torn down before the request completed. In that
    /// case the result must not be applied.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        if !self.is_active() {
            return None;
        }

        let request = self.next_request.get();
        self.next_request.set(request.wrapping_add(1));

        let (handle, registration) = AbortHandle::new_pair();
        self.pending.borrow_mut().push((request, handle));
        let _pending = Pending {
            scope: self,
            request,
        };

        Abortable::new(future, registration)
            .await
            .ok()
            .filter(|_| self.is_active())
    }

    pub fn tear_down(&self) {
        if self.active.replace(false) {
            for (_, handle) in self.pending.borrow_mut().drain(..) {
                handle.abort();
            }
            debug!("tore down {}", self.screen.path());
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.tear_down();
    }
}

/// Unregisters a request once it has completed or was dropped.
struct Pending<'a> {
    scope: &'a Scope,
    request: usize,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.scope
            .pending
            .borrow_mut()
            .retain(|(id, _)| *id != self.request);
    }
}
