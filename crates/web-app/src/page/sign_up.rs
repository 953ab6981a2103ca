use std::rc::Rc;

use stockroom_domain::{AccountService, Field, Role, Screen, SignUpForm};

use crate::{
    Scope,
    page::{Feedback, Page},
};

pub const SIGN_UP_SUCCEEDED: &str = "You have successfully registered!";
pub const SIGN_UP_FAILED: &str = "Registration failed. Please try again.";

pub struct SignUp {
    scope: Rc<Scope>,
    /// Optional fields set to `None` are not shown.
    pub form: SignUpForm,
    field_error: Option<(Field, String)>,
    feedback: Option<Feedback>,
}

impl Page for SignUp {
    const SCREEN: Screen = Screen::SignUp;

    fn open(scope: Rc<Scope>) -> Self {
        Self {
            scope,
            form: SignUpForm {
                role: Role::User.to_string(),
                location: Some(String::new()),
                ..SignUpForm::default()
            },
            field_error: None,
            feedback: None,
        }
    }
}

impl SignUp {
    /// The validation message and the field it belongs to.
    #[must_use]
    pub fn field_error(&self) -> Option<(Field, &str)> {
        self.field_error
            .as_ref()
            .map(|(field, message)| (*field, message.as_str()))
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns the screen to navigate to after a successful registration.
    pub async fn submit(&mut self, account_service: &impl AccountService) -> Option<Screen> {
        self.field_error = None;
        self.feedback = None;

        let registration = match self.form.validate() {
            Ok(registration) => registration,
            Err(err) => {
                self.field_error = Some((err.field(), err.to_string()));
                return None;
            }
        };

        match self.scope.run(account_service.sign_up(registration)).await? {
            Ok(message) => {
                let message = if message.trim().is_empty() {
                    SIGN_UP_SUCCEEDED.to_string()
                } else {
                    message
                };
                self.feedback = Some(Feedback::Success(message));
                self.form.password.clear();
                self.form.confirm_password.clear();
                Some(Screen::LogIn)
            }
            Err(err) => {
                self.feedback = Some(Feedback::Error(
                    err.server_message().unwrap_or(SIGN_UP_FAILED).to_string(),
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
    use rstest::{fixture, rstest};
    use stockroom_domain::{Rejection, StorageError};

    use super::*;
    use crate::page::{Mounted, mount, tests::Backend};

    #[fixture]
    fn backend() -> Backend {
        Backend::default()
    }

    fn sign_up(backend: &Backend) -> SignUp {
        let Mounted::Page(mut page) = mount::<SignUp>(backend) else {
            panic!("sign-up screen must always open");
        };
        page.form.full_name = "Asha Rao".to_string();
        page.form.email = "asha@example.com".to_string();
        page.form.password = "secret1".to_string();
        page.form.confirm_password = "secret1".to_string();
        page.form.role = "Store Manager".to_string();
        page.form.phone_number = Some("9876543210".to_string());
        page
    }

    #[rstest]
    #[case("User registered successfully", "User registered successfully")]
    #[case("", SIGN_UP_SUCCEEDED)]
    fn test_submit(backend: Backend, #[case] response: &str, #[case] expected: &str) {
        *backend.sign_up.borrow_mut() = Some(Ok(response.to_string()));
        let mut page = sign_up(&backend);

        assert_eq!(block_on(page.submit(&backend)), Some(Screen::LogIn));
        assert_eq!(
            page.feedback(),
            Some(&Feedback::Success(expected.to_string()))
        );
        assert_eq!(page.field_error(), None);
        assert_eq!(backend.requests.get(), 1);
    }

    #[rstest]
    #[case::password_mismatch(
        |form: &mut SignUpForm| form.confirm_password = "secret2".to_string(),
        Field::ConfirmPassword,
        "Passwords do not match!"
    )]
    #[case::short_password(
        |form: &mut SignUpForm| {
            form.password = "12345".to_string();
            form.confirm_password = "12345".to_string();
        },
        Field::Password,
        "Password must be at least 6 characters long!"
    )]
    #[case::phone_number(
        |form: &mut SignUpForm| form.phone_number = Some("12345".to_string()),
        Field::PhoneNumber,
        "Phone number must be exactly 10 digits!"
    )]
    #[case::email(
        |form: &mut SignUpForm| form.email = "asha".to_string(),
        Field::Email,
        "Email must contain an @ symbol"
    )]
    fn test_submit_invalid(
        backend: Backend,
        #[case] change: fn(&mut SignUpForm),
        #[case] field: Field,
        #[case] message: &str,
    ) {
        let mut page = sign_up(&backend);
        change(&mut page.form);

        assert_eq!(block_on(page.submit(&backend)), None);
        assert_eq!(page.field_error(), Some((field, message)));
        assert_eq!(page.feedback(), None);
        assert_eq!(backend.requests.get(), 0);
    }

    #[rstest]
    #[case(Some("Email already exists"), "Email already exists")]
    #[case(None, SIGN_UP_FAILED)]
    fn test_submit_rejected(
        backend: Backend,
        #[case] message: Option<&str>,
        #[case] expected: &str,
    ) {
        *backend.sign_up.borrow_mut() = Some(Err(StorageError::Rejected(Rejection {
            status: 400,
            message: message.map(str::to_string),
        })));
        let mut page = sign_up(&backend);

        assert_eq!(block_on(page.submit(&backend)), None);
        assert_eq!(page.feedback(), Some(&Feedback::Error(expected.to_string())));
        assert_eq!(page.form.password, "secret1");
    }
}
