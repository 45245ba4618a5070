//! Trading gateway port: HTTP calls to the trading web server.

use std::future::Future;

use daytrader_domain::error::GatewayError;
use daytrader_domain::request::PendingRequest;

/// Outbound calls to the trading web server.
///
/// Futures are not required to be `Send`: the browser adapter runs them on
/// the single-threaded UI event loop.
pub trait TradingGateway {
    /// `POST <base>/LOGIN/` with the `username` form field.
    fn login(&self, username: &str) -> impl Future<Output = Result<(), GatewayError>>;

    /// `POST <base>/<COMMAND>/` with the request's form fields.
    ///
    /// Resolves to the plain-text response body on a success status.
    fn submit(&self, request: &PendingRequest) -> impl Future<Output = Result<String, GatewayError>>;
}

impl<T: TradingGateway> TradingGateway for &T {
    fn login(&self, username: &str) -> impl Future<Output = Result<(), GatewayError>> {
        (**self).login(username)
    }

    fn submit(&self, request: &PendingRequest) -> impl Future<Output = Result<String, GatewayError>> {
        (**self).submit(request)
    }
}
