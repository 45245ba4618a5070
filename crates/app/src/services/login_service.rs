//! Login service: the login page's submit handler.

use daytrader_domain::error::DayTradingError;
use daytrader_domain::session::{Session, SessionCookie};

use crate::ports::{Clock, Navigator, Page, SessionStore, TradingGateway};

/// Logs a user in against the trading server and opens the actions page.
pub struct LoginService<G, S, N, C> {
    gateway: G,
    store: S,
    navigator: N,
    clock: C,
}

impl<G, S, N, C> LoginService<G, S, N, C>
where
    G: TradingGateway,
    S: SessionStore,
    N: Navigator,
    C: Clock,
{
    pub fn new(gateway: G, store: S, navigator: N, clock: C) -> Self {
        Self {
            gateway,
            store,
            navigator,
            clock,
        }
    }

    /// Register `username` with the server, persist the session cookie, and
    /// replace the current page with the actions page.
    ///
    /// The username is sent as typed; the server decides what it accepts.
    ///
    /// # Errors
    ///
    /// Returns [`DayTradingError::Gateway`] when the server rejects the login
    /// or cannot be reached, and [`DayTradingError::Session`] when the cookie
    /// cannot be written. Nothing is persisted and no navigation happens in
    /// either case.
    pub async fn login(&self, username: &str) -> Result<Session, DayTradingError> {
        if let Err(err) = self.gateway.login(username).await {
            tracing::warn!(username, error = %err, "login rejected");
            return Err(err.into());
        }

        let session = Session::new(username);
        self.store
            .save(&SessionCookie::issue(&session, self.clock.now()))?;
        tracing::info!(username, "logged in");

        self.navigator.replace(Page::Actions);
        Ok(session)
    }
}
