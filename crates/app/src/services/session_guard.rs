//! Session guard: gatekeeper run before the actions page renders.

use daytrader_domain::session::Session;

use crate::ports::{Navigator, Page, SessionStore};

/// Sends visitors without a session cookie back to the login page.
///
/// This is a convenience redirect: the trading server performs no session
/// validation of its own at this layer.
pub struct SessionGuard<S, N> {
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigator> SessionGuard<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Return the current session, or redirect to the login page.
    ///
    /// When this returns `None` the caller must not render anything.
    pub fn check(&self) -> Option<Session> {
        if let Some(session) = self.store.load() {
            tracing::debug!(username = session.username(), "session cookie found");
            return Some(session);
        }
        tracing::info!("no session cookie, redirecting to login");
        self.navigator.replace(Page::Login);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{MemorySessionStore, RecordingNavigator};

    #[test]
    fn should_return_session_when_cookie_present() {
        let navigator = RecordingNavigator::default();
        let guard = SessionGuard::new(MemorySessionStore::with_user("alice"), &navigator);

        let session = guard.check();

        assert_eq!(session, Some(Session::new("alice")));
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn should_redirect_to_login_when_cookie_missing() {
        let navigator = RecordingNavigator::default();
        let guard = SessionGuard::new(MemorySessionStore::default(), &navigator);

        let session = guard.check();

        assert_eq!(session, None);
        assert_eq!(navigator.visited(), vec![Page::Login]);
    }

    #[test]
    fn should_redirect_to_login_when_cookie_holds_empty_username() {
        let navigator = RecordingNavigator::default();
        let store = MemorySessionStore::with_raw_cookie("dayTradingUsername=");
        let guard = SessionGuard::new(store, &navigator);

        assert_eq!(guard.check(), None);
        assert_eq!(navigator.visited(), vec![Page::Login]);
    }
}
