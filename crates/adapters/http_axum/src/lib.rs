//! # daytrader-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) that delivers the
//! day-trading client to browsers.
//!
//! ## Responsibilities
//! - Serve the compiled dashboard bundle (HTML, WASM, JS, CSS) from disk
//! - Answer client-side routes (`/`, `/actions`) with the entry document
//! - Expose `/health` for liveness probes
//! - Trace every request through `tower-http`
//!
//! ## Out of scope
//! The trading endpoints (`/LOGIN/`, `/<COMMAND>/`) belong to the trading
//! web server. The browser calls them directly; this adapter never proxies.

pub mod assets;
pub mod router;

pub use assets::AssetConfig;
