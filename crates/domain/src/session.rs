use crate::{Email, Name, Outcome, Role, Screen, StorageError, authorize_screen};

/// The identity persisted for the duration of a visit.
///
/// A session is replaced as a whole on login and removed on logout; it is never modified in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: Name,
    pub email: Email,
    pub role: Role,
}

pub trait SessionService {
    fn get_session(&self) -> Option<Session>;

    fn authorize(&self, screen: Screen) -> Outcome {
        authorize_screen(self.get_session().as_ref(), screen)
    }
}

/// Owner of the persisted session record.
pub trait SessionRepository {
    fn read_session(&self) -> Result<Option<Session>, StorageError>;
    fn write_session(&self, session: &Session) -> Result<(), StorageError>;
    fn delete_session(&self) -> Result<(), StorageError>;
}
