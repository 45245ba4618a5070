//! Session store port: where the session cookie lives.

use daytrader_domain::error::SessionError;
use daytrader_domain::session::{Session, SessionCookie};

/// Persistent storage for the logged-in username.
///
/// The browser adapter backs this with `document.cookie`.
pub trait SessionStore {
    /// The stored session, or `None` when the cookie is missing or empty.
    fn load(&self) -> Option<Session>;

    /// Persist `cookie`, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Unavailable`] when the storage cannot be written.
    fn save(&self, cookie: &SessionCookie) -> Result<(), SessionError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, cookie: &SessionCookie) -> Result<(), SessionError> {
        (**self).save(cookie)
    }
}
