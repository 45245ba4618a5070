//! Error types shared across the workspace.
//!
//! Each concern owns a small typed error; [`DayTradingError`] aggregates them
//! with `#[from]` conversions so services can use `?` across boundaries.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum DayTradingError {
    #[error("trading server request failed")]
    Gateway(#[from] GatewayError),

    #[error("session store error")]
    Session(#[from] SessionError),
}

/// Input that cannot be mapped onto the domain model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Failure of a call to the trading web server.
///
/// The user interface does not distinguish between the variants: both are
/// rendered through [`GatewayError::server_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never produced a response (network, CORS, aborted, …).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The raw text shown to the user for this failure.
    #[must_use]
    pub fn server_message(&self) -> &str {
        match self {
            Self::Rejected { body, .. } => body,
            Self::Transport(message) => message,
        }
    }
}

/// The session cookie could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}
