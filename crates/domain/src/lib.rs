//! # daytrader-domain
//!
//! Pure domain model for the day-trading web client.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define **Commands** (the closed set of trading actions)
//! - Define **Layouts** (which labeled inputs each command shows, and the
//!   payload key each input is sent under)
//! - Build **Pending requests** from visible input values
//! - Format **Result messages** for the results area
//! - Encode and decode the **Session cookie**
//! - Build **Endpoint URLs** on the trading web server
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod command;
pub mod endpoint;
pub mod layout;
pub mod message;
pub mod request;
pub mod session;
