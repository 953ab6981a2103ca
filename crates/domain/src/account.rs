use std::fmt;

use strum::AsRefStr;

use crate::{
    CreateError, DeleteError, Email, EmailError, Name, NameError, ReadError, Role, RoleError,
    Session, optional_text,
};

/// Stands in for a password in debug output.
struct Hidden;

impl fmt::Debug for Hidden {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("***")
    }
}

#[allow(async_fn_in_trait)]
pub trait AccountService {
    /// Registers a new account and returns the confirmation message of the server.
    async fn sign_up(&self, registration: Registration) -> Result<String, CreateError>;
    /// Authenticates and persists the resulting session.
    async fn log_in(&self, credentials: Credentials) -> Result<Session, ReadError>;
    fn log_out(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait AccountRepository {
    async fn sign_up(&self, registration: Registration) -> Result<String, CreateError>;
    async fn log_in(&self, credentials: Credentials) -> Result<Session, ReadError>;
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &Hidden)
            .finish()
    }
}

impl Credentials {
    /// Both fields are required; their content is checked by the server.
    pub fn new(email: &str, password: &str) -> Result<Self, CredentialsError> {
        if email.trim().is_empty() {
            return Err(CredentialsError::MissingEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: Name,
    pub email: Email,
    pub password: Password,
    pub role: Role,
    pub location: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<PhoneNumber>,
}

/// The raw content of the sign-up form.
///
/// `None` marks a field the form does not offer, which is then not validated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub location: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &Hidden)
            .field("confirm_password", &Hidden)
            .field("role", &self.role)
            .field("location", &self.location)
            .field("department", &self.department)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

impl SignUpForm {
    pub const MAX_FULL_NAME_LENGTH: usize = 64;

    pub fn validate(&self) -> Result<Registration, SignUpError> {
        if self.password != self.confirm_password {
            return Err(SignUpError::PasswordMismatch);
        }

        let password = Password::new(&self.password)?;

        let phone_number = self
            .phone_number
            .as_deref()
            .map(PhoneNumber::new)
            .transpose()?;

        let name = Name::new(&self.full_name)?;
        let name_length = name.as_ref().chars().count();
        if name_length > Self::MAX_FULL_NAME_LENGTH {
            return Err(SignUpError::NameTooLong(name_length));
        }

        Ok(Registration {
            name,
            email: Email::new(&self.email)?,
            password,
            role: Role::new(&self.role)?,
            location: self.location.as_deref().and_then(optional_text),
            department: self.department.as_deref().and_then(optional_text),
            phone_number,
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Password").field(&Hidden).finish()
    }
}

impl Password {
    pub const MIN_LENGTH: usize = 6;

    pub fn new(password: &str) -> Result<Self, SignUpError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(SignUpError::PasswordTooShort);
        }
        Ok(Self(password.to_string()))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone_number: &str) -> Result<Self, SignUpError> {
        let phone_number = phone_number.trim();
        if phone_number.len() == 10 && phone_number.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(phone_number.to_string()))
        } else {
            Err(SignUpError::InvalidPhoneNumber)
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Role,
    PhoneNumber,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long!")]
    PasswordTooShort,
    #[error("Phone number must be exactly 10 digits!")]
    InvalidPhoneNumber,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    NameTooLong(usize),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Role(#[from] RoleError),
}

impl SignUpError {
    /// The form field the message belongs to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            SignUpError::PasswordMismatch => Field::ConfirmPassword,
            SignUpError::PasswordTooShort => Field::Password,
            SignUpError::InvalidPhoneNumber => Field::PhoneNumber,
            SignUpError::NameTooLong(_) | SignUpError::Name(_) => Field::FullName,
            SignUpError::Email(_) => Field::Email,
            SignUpError::Role(_) => Field::Role,
        }
    }
}
