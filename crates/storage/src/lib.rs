#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::{Arc, Mutex};

use log::SetLoggerError;
use stockroom_domain::{self as domain, AccountRepository, ProductRepository, SessionRepository};
use stockroom_web_app::{self as web_app, Config, ConfigError};

use local_storage::LocalStorage;
use rest::{GlooNetSendRequest, REST, SendRequest};

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod rest;

/// The services of a running client.
pub struct App {
    pub config: Config,
    pub domain: domain::Service<Storage<GlooNetSendRequest>>,
    pub web_app: web_app::Service<LocalStorage>,
}

#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logger(#[from] SetLoggerError),
}

/// Reads the build-time configuration, installs the logger and wires the services.
///
/// Must be called once at startup.
pub fn init() -> Result<App, InitError> {
    let config = Config::from_env()?;
    web_app::log::init(Arc::new(Mutex::new(LocalStorage)))?;
    log::info!("using {} backend at {}", config.backend, config.api_url);

    Ok(App {
        domain: domain::Service::new(Storage::new(config.clone())),
        web_app: web_app::Service::new(LocalStorage),
        config,
    })
}

/// The remote backend for accounts and products combined with the browser storage for the
/// session.
#[derive(Clone)]
pub struct Storage<S: SendRequest> {
    pub rest: REST<S>,
    pub local: LocalStorage,
}

impl Storage<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rest: REST::new(config),
            local: LocalStorage,
        }
    }
}

impl<S: SendRequest> SessionRepository for Storage<S> {
    fn read_session(&self) -> Result<Option<domain::Session>, domain::StorageError> {
        self.local.read_session()
    }

    fn write_session(&self, session: &domain::Session) -> Result<(), domain::StorageError> {
        self.local.write_session(session)
    }

    fn delete_session(&self) -> Result<(), domain::StorageError> {
        self.local.delete_session()
    }
}

impl<S: SendRequest> AccountRepository for Storage<S> {
    async fn sign_up(
        &self,
        registration: domain::Registration,
    ) -> Result<String, domain::CreateError> {
        self.rest.sign_up(registration).await
    }

    async fn log_in(
        &self,
        credentials: domain::Credentials,
    ) -> Result<domain::Session, domain::ReadError> {
        self.rest.log_in(credentials).await
    }
}

impl<S: SendRequest> ProductRepository for Storage<S> {
    async fn read_products(&self) -> Result<Vec<domain::Product>, domain::ReadError> {
        self.rest.read_products().await
    }

    async fn read_inventory_summary(
        &self,
    ) -> Result<domain::InventorySummary, domain::ReadError> {
        self.rest.read_inventory_summary().await
    }

    async fn create_product(
        &self,
        product: domain::ProductDraft,
    ) -> Result<domain::Product, domain::CreateError> {
        self.rest.create_product(product).await
    }

    async fn replace_product(
        &self,
        product: domain::Product,
    ) -> Result<domain::Product, domain::UpdateError> {
        self.rest.replace_product(product).await
    }

    async fn delete_product(
        &self,
        id: domain::ProductID,
    ) -> Result<domain::ProductID, domain::DeleteError> {
        self.rest.delete_product(id).await
    }
}

#[cfg(test)]
mod tests {
    pub mod data;

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use gloo_storage::Storage as _;
        use pretty_assertions::assert_eq;
        use stockroom_domain::{SessionRepository, SessionService};
        use stockroom_web_app::{Config, log::Service as _};
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::{InitError, init, local_storage::LocalStorage, tests::data::ADMIN};

        #[wasm_bindgen_test]
        fn test_init() {
            gloo_storage::LocalStorage::clear();

            let app = init().unwrap();

            assert_eq!(app.config, Config::from_env().unwrap());
            assert_eq!(app.domain.get_session(), None);
            LocalStorage.write_session(&ADMIN).unwrap();
            assert_eq!(app.domain.get_session(), Some(ADMIN.clone()));

            let entries = app.web_app.get_log_entries().unwrap();
            assert!(
                entries
                    .iter()
                    .any(|entry| entry.message.starts_with("using ")),
                "{entries:?}"
            );
            assert!(matches!(init(), Err(InitError::Logger(_))));
        }
    }
}
