//! Where the trading web server lives.

use daytrader_domain::endpoint::BaseUrl;

/// Build-time override of the trading server address, e.g.
/// `DAYTRADER_API_BASE=http://172.20.0.5:44456 trunk build --release`.
const API_BASE: Option<&str> = option_env!("DAYTRADER_API_BASE");

/// Base URL for all trading endpoints.
///
/// Without a build-time override the page's own origin is used, matching a
/// deployment where the trading server also serves this bundle.
pub fn api_base() -> BaseUrl {
    match API_BASE.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => BaseUrl::new(raw),
        None => BaseUrl::new(&page_origin()),
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
