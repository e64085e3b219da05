//! One-shot flash messages carried across redirects in a cookie
//!
//! The message is percent-encoded so arbitrary text is cookie-safe. Reading
//! the flash removes the cookie, so each message is shown exactly once.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

const FLASH_COOKIE: &str = "gigboard_flash";

/// Add a flash message to the jar
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC).to_string();
    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Take the pending flash message, if any, clearing the cookie
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|cookie| {
        percent_decode_str(cookie.value())
            .decode_utf8_lossy()
            .to_string()
    });
    let jar = match message {
        Some(_) => jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build()),
        None => jar,
    };
    (jar, message)
}

/// Redirect with a flash message attached
pub fn redirect_with_flash(jar: CookieJar, message: &str, to: &str) -> Response {
    (set_flash(jar, message), Redirect::to(to)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_round_trips_arbitrary_text() {
        let jar = CookieJar::new();
        let jar = set_flash(jar, "Venue: The Musical Hop created successfully");
        let (_, message) = take_flash(jar);
        assert_eq!(
            message.as_deref(),
            Some("Venue: The Musical Hop created successfully")
        );
    }

    #[test]
    fn encoded_value_is_cookie_safe() {
        let jar = set_flash(CookieJar::new(), "spaces; semicolons, commas");
        let value = jar.get(FLASH_COOKIE).unwrap().value().to_string();
        assert!(!value.contains(' '));
        assert!(!value.contains(';'));
        assert!(!value.contains(','));
    }

    #[test]
    fn take_flash_on_empty_jar_is_none() {
        let (_, message) = take_flash(CookieJar::new());
        assert!(message.is_none());
    }
}
