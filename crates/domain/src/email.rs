use derive_more::{AsRef, Display};

/// A structurally valid email address.
///
/// Only the shape is checked: exactly one `@` with a non-empty local part and domain.
/// Whether the address exists is left to the backend.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash)]
#[as_ref(str)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    pub fn new(email: &str) -> Result<Self, EmailError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if email.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong(email.len()));
        }

        let Some((local_part, domain)) = email.split_once('@') else {
            return Err(EmailError::MissingAtSymbol);
        };

        if local_part.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }

        if domain.is_empty() || domain.contains('@') {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Email(email.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Email must be 254 characters or fewer ({0} > 254)")]
    TooLong(usize),
    #[error("Email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("Email must have a name before the @ symbol")]
    EmptyLocalPart,
    #[error("Email must have a single domain after the @ symbol")]
    InvalidDomain,
}
