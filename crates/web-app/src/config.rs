use strum::{Display, EnumString, IntoStaticStr};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND: Backend = Backend::InventoryApp;

/// The backend variant, which determines the account and catalog endpoints.
#[derive(Display, EnumString, IntoStaticStr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    #[default]
    #[strum(serialize = "inventory-app")]
    InventoryApp,
    #[strum(serialize = "user-management")]
    UserManagement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and authority of the backend without trailing slash.
    pub api_url: String,
    pub backend: Backend,
}

impl Config {
    pub fn new(api_url: &str, backend: &str) -> Result<Self, ConfigError> {
        let api_url = api_url.trim().trim_end_matches('/');

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.to_string()));
        }

        Ok(Self {
            api_url: api_url.to_string(),
            backend: backend
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownBackend(backend.to_string()))?,
        })
    }

    /// Reads `STOCKROOM_API_URL` and `STOCKROOM_BACKEND` as set at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("STOCKROOM_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("STOCKROOM_BACKEND").unwrap_or(DEFAULT_BACKEND.into()),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            backend: DEFAULT_BACKEND,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL \"{0}\"")]
    InvalidApiUrl(String),
    #[error("unknown backend \"{0}\" (expected \"inventory-app\" or \"user-management\")")]
    UnknownBackend(String),
}
