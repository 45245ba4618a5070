//! Application services: page controllers and use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.

pub mod actions;
pub mod login_service;
pub mod session_guard;

#[cfg(test)]
mod fakes;
