//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the page logic and the outside world
//! (the trading web server, the cookie jar, the browser location, the clock).
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod clock;
pub mod gateway;
pub mod navigator;
pub mod session_store;

pub use clock::{Clock, SystemClock};
pub use gateway::TradingGateway;
pub use navigator::{Navigator, Page};
pub use session_store::SessionStore;
