//! One-time confirmation message carried in a cookie.
//!
//! The contact handler queues a message on the redirect response; the next
//! GET displays it and clears the cookie. No session state is kept server
//! side.

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::{Cookie, SameSite, time::Duration};

const FLASH_COOKIE: &str = "comptoir_flash";

/// `Set-Cookie` value that queues `message` for the next page view.
pub fn set(message: &str) -> Option<HeaderValue> {
    let cookie = Cookie::build((FLASH_COOKIE, message))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build();
    HeaderValue::from_str(&cookie.encoded().to_string()).ok()
}

/// Pending message from the request, plus the `Set-Cookie` value that
/// clears it.
pub fn take(headers: &HeaderMap) -> (Option<String>, Option<HeaderValue>) {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(raw) = header_value.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            let Ok(cookie) = Cookie::parse_encoded(pair.trim()) else {
                continue;
            };
            if cookie.name() == FLASH_COOKIE && !cookie.value().is_empty() {
                return (Some(cookie.value().to_string()), clear());
            }
        }
    }
    (None, None)
}

fn clear() -> Option<HeaderValue> {
    let cookie = Cookie::build((FLASH_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build();
    HeaderValue::from_str(&cookie.encoded().to_string()).ok()
}
