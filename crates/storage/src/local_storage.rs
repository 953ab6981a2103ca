use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use stockroom_domain as domain;
use stockroom_web_app::log;

use crate::rest::User;

const KEY_SESSION: &str = "session";
const KEY_LOG: &str = "log";

#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl domain::SessionRepository for LocalStorage {
    fn read_session(&self) -> Result<Option<domain::Session>, domain::StorageError> {
        match gloo_storage::LocalStorage::get::<User>(KEY_SESSION) {
            Ok(user) => Ok(Some(domain::Session::try_from(user)?)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(domain::StorageError::Other(err.into())),
        }
    }

    fn write_session(&self, session: &domain::Session) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(KEY_SESSION, User::from(session))
            .map_err(|err| domain::StorageError::Other(err.into()))
    }

    fn delete_session(&self) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::delete(KEY_SESSION);
        Ok(())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
