//! Browser-backed ports: `document.cookie`, `window.location`, `alert()`.

use daytrader_app::ports::{Navigator, Page, SessionStore};
use daytrader_domain::error::SessionError;
use daytrader_domain::session::{Session, SessionCookie};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Session cookie stored in `document.cookie`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSessionStore;

impl SessionStore for CookieSessionStore {
    fn load(&self) -> Option<Session> {
        let cookies = html_document()?.cookie().ok()?;
        Session::from_cookie_header(&cookies)
    }

    fn save(&self, cookie: &SessionCookie) -> Result<(), SessionError> {
        let document = html_document()
            .ok_or_else(|| SessionError::Unavailable("no HTML document".to_string()))?;
        document
            .set_cookie(&cookie.to_cookie_string())
            .map_err(|err| SessionError::Unavailable(format!("{err:?}")))
    }
}

/// Navigates with `location.replace`, so the back button skips the old page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn replace(&self, page: Page) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().replace(page.path()) {
            leptos::logging::error!("failed to navigate to {}: {err:?}", page.path());
        }
    }
}

/// Blocking `alert()` dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        leptos::logging::error!("failed to show alert {message:?}: {err:?}");
    }
}
