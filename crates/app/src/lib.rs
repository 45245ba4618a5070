//! # daytrader-app
//!
//! Application layer: page controllers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TradingGateway`: login and command submission over HTTP
//!   - `SessionStore`: read/write the session cookie
//!   - `Navigator`: replace the current page
//!   - `Clock`: current time for cookie expiry
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SessionGuard`: redirect to login when no session exists
//!   - `LoginService`: log in, persist the session, open the actions page
//!   - `ActionsPage` / `ActionsService`: actions page state and submission
//!
//! ## Dependency rule
//! Depends on `daytrader-domain` only (plus `tracing` and `chrono`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
