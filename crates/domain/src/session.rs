//! Session: the logged-in username and the cookie that carries it.
//!
//! The cookie is a convenience marker, not a credential: the trading server
//! does not validate it, and a missing cookie only triggers a redirect to the
//! login page.

use chrono::{DateTime, Duration, Utc};

/// UTC timestamp used for cookie expiry.
pub type Timestamp = DateTime<Utc>;

/// Cookie name holding the username.
pub const COOKIE_NAME: &str = "dayTradingUsername";

/// Days until the session cookie expires.
pub const COOKIE_LIFETIME_DAYS: i64 = 10;

/// Cookie path; the cookie is visible to every page.
pub const COOKIE_PATH: &str = "/";

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Restore the session from a raw `document.cookie` string.
    ///
    /// Returns `None` when the cookie is missing or holds an empty username.
    #[must_use]
    pub fn from_cookie_header(cookies: &str) -> Option<Self> {
        let prefix = format!("{COOKIE_NAME}=");
        cookies
            .split(';')
            .map(str::trim_start)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .map(decode_value)
            .filter(|username| !username.is_empty())
            .map(Self::new)
    }
}

/// The `Set-Cookie`-style string persisting a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub username: String,
    pub expires: Timestamp,
}

impl SessionCookie {
    /// Cookie for `session`, expiring [`COOKIE_LIFETIME_DAYS`] after `now`.
    #[must_use]
    pub fn issue(session: &Session, now: Timestamp) -> Self {
        Self {
            username: session.username().to_string(),
            expires: now + Duration::days(COOKIE_LIFETIME_DAYS),
        }
    }

    /// Assignment string for `document.cookie`.
    #[must_use]
    pub fn to_cookie_string(&self) -> String {
        format!(
            "{COOKIE_NAME}={};expires={};path={COOKIE_PATH}",
            encode_value(&self.username),
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        )
    }
}

/// Percent-encode characters that would break the `name=value;` cookie syntax.
fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' | ';' | ',' | '=' | '"' | '\\' => out.push_str(&format!("%{:02X}", ch as u32)),
            c if c.is_whitespace() || c.is_control() => {
                let mut buf = [0_u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Decode `%XX` escapes; malformed escapes are kept literally.
fn decode_value(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(byte) = hex_byte(bytes[i + 1], bytes[i + 2]) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_byte(high: u8, low: u8) -> Option<u8> {
    let high = char::from(high).to_digit(16)?;
    let low = char::from(low).to_digit(16)?;
    u8::try_from(high * 16 + low).ok()
}
