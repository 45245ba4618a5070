//! Endpoint URLs on the trading web server.
//!
//! The server only routes paths of the exact form `/<COMMAND>/`, trailing
//! slash included, so every URL is built through [`BaseUrl`].

use std::fmt;

use crate::command::Command;

/// Path segment of the login endpoint.
pub const LOGIN_PATH: &str = "LOGIN/";

/// Base address of the trading web server, always ending in exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Normalise `raw`; an empty value yields `/` (same-origin, root-relative).
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        Self(format!("{trimmed}/"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<base>/LOGIN/`
    #[must_use]
    pub fn login(&self) -> String {
        format!("{}{LOGIN_PATH}", self.0)
    }

    /// `<base>/<COMMAND>/`
    #[must_use]
    pub fn action(&self, command: Command) -> String {
        format!("{}{}/", self.0, command.as_str())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
