//! In-memory port doubles shared by the service tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use daytrader_domain::error::{GatewayError, SessionError};
use daytrader_domain::request::PendingRequest;
use daytrader_domain::session::{COOKIE_NAME, Session, SessionCookie, Timestamp};

use crate::ports::{Clock, Navigator, Page, SessionStore, TradingGateway};

/// Cookie jar holding a raw `document.cookie`-style string.
#[derive(Default)]
pub struct MemorySessionStore {
    raw: RefCell<String>,
    saved: RefCell<Vec<SessionCookie>>,
    unavailable: bool,
}

impl MemorySessionStore {
    pub fn with_user(username: &str) -> Self {
        Self::with_raw_cookie(&format!("{COOKIE_NAME}={username}"))
    }

    pub fn with_raw_cookie(raw: &str) -> Self {
        Self {
            raw: RefCell::new(raw.to_string()),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<SessionCookie> {
        self.saved.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        Session::from_cookie_header(&self.raw.borrow())
    }

    fn save(&self, cookie: &SessionCookie) -> Result<(), SessionError> {
        if self.unavailable {
            return Err(SessionError::Unavailable("cookies disabled".to_string()));
        }
        let assignment = cookie.to_cookie_string();
        let pair = assignment.split(';').next().unwrap_or_default().to_string();
        *self.raw.borrow_mut() = pair;
        self.saved.borrow_mut().push(cookie.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<Page>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Page> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, page: Page) {
        self.visited.borrow_mut().push(page);
    }
}

/// Gateway answering from a script and recording every call.
#[derive(Default)]
pub struct ScriptedGateway {
    login_error: Option<GatewayError>,
    responses: RefCell<VecDeque<Result<String, GatewayError>>>,
    logins: RefCell<Vec<String>>,
    submitted: RefCell<Vec<PendingRequest>>,
}

impl ScriptedGateway {
    pub fn failing_login(error: GatewayError) -> Self {
        Self {
            login_error: Some(error),
            ..Self::default()
        }
    }

    pub fn respond(self, response: Result<&str, GatewayError>) -> Self {
        self.responses
            .borrow_mut()
            .push_back(response.map(ToString::to_string));
        self
    }

    pub fn logins(&self) -> Vec<String> {
        self.logins.borrow().clone()
    }

    pub fn submitted(&self) -> Vec<PendingRequest> {
        self.submitted.borrow().clone()
    }
}

impl TradingGateway for ScriptedGateway {
    async fn login(&self, username: &str) -> Result<(), GatewayError> {
        self.logins.borrow_mut().push(username.to_string());
        match &self.login_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn submit(&self, request: &PendingRequest) -> Result<String, GatewayError> {
        self.submitted.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
