use std::rc::Rc;

use stockroom_domain::{AccountService, Credentials, Screen};

use crate::{
    Scope,
    page::{Feedback, Page},
};

pub const LOG_IN_FAILED: &str = "Invalid email or password";

pub struct LogIn {
    scope: Rc<Scope>,
    pub email: String,
    pub password: String,
    feedback: Option<Feedback>,
}

impl Page for LogIn {
    const SCREEN: Screen = Screen::LogIn;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            email: String::new(),
            password: String::new(),
            feedback: None,
        }
    }
}

impl LogIn {
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns the screen to navigate to after a successful login.
    pub async fn submit(&mut self, account_service: &impl AccountService) -> Option<Screen> {
        self.feedback = None;

        let credentials = match Credentials::new(&self.email, &self.password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.feedback = Some(Feedback::Error(err.to_string()));
                return None;
            }
        };

        match self.scope.run(account_service.log_in(credentials)).await? {
            Ok(session) => {
                self.password.clear();
                Some(session.role.home())
            }
            Err(err) => {
                self.feedback = Some(Feedback::Error(
                    err.server_message().unwrap_or(LOG_IN_FAILED).to_string(),
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use stockroom_domain::{Rejection, Role, SessionService, StorageError};

    use super::*;
    use crate::page::{
        Mounted, mount,
        tests::{Backend, session},
    };

    fn log_in(backend: &Backend) -> LogIn {
        let Mounted::Page(mut page) = mount::<LogIn>(backend) else {
            panic!("log-in screen must always open");
        };
        page.email = "asha@example.com".to_string();
        page.password = "secret1".to_string();
        page
    }

    #[rstest]
    #[case(Role::User, Screen::UserDashboard)]
    #[case(Role::Admin, Screen::AdminDashboard)]
    #[case(Role::StoreManager, Screen::Dashboard)]
    fn test_submit(#[case] role: Role, #[case] expected: Screen) {
        let backend = Backend::default();
        *backend.log_in.borrow_mut() = Some(Ok(session(role)));
        let mut page = log_in(&backend);

        assert_eq!(block_on(page.submit(&backend)), Some(expected));
        assert_eq!(page.feedback(), None);
        assert_eq!(page.password, "");
        assert_eq!(backend.get_session(), Some(session(role)));
    }

    #[rstest]
    #[case(Some("Invalid password"), "Invalid password")]
    #[case(None, LOG_IN_FAILED)]
    fn test_submit_rejected(#[case] message: Option<&str>, #[case] expected: &str) {
        let backend = Backend::default();
        *backend.log_in.borrow_mut() = Some(Err(StorageError::Rejected(Rejection {
            status: 401,
            message: message.map(str::to_string),
        })));
        let mut page = log_in(&backend);

        assert_eq!(block_on(page.submit(&backend)), None);
        assert_eq!(page.feedback(), Some(&Feedback::Error(expected.to_string())));
        assert_eq!(backend.get_session(), None);
    }

    #[test]
    fn test_submit_without_connection() {
        let backend = Backend::default();
        let mut page = log_in(&backend);

        assert_eq!(block_on(page.submit(&backend)), None);
        assert_eq!(
            page.feedback(),
            Some(&Feedback::Error(LOG_IN_FAILED.to_string()))
        );
    }

    #[test]
    fn test_submit_incomplete() {
        let backend = Backend::default();
        let mut page = log_in(&backend);
        page.password.clear();

        assert_eq!(block_on(page.submit(&backend)), None);
        assert_eq!(
            page.feedback(),
            Some(&Feedback::Error("Password is required".to_string()))
        );
        assert_eq!(backend.requests.get(), 0);
    }
}
