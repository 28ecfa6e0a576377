pub use cookie::{time::Duration, Cookie, SameSite};

use http::header::{HeaderMap, HeaderValue, SET_COOKIE};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static COOKIE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\x21-\x7E&&[^()@<>,;:\\"\[\]?={}]]+$"#).unwrap());

/// Appends `cookie` to `headers` as its own `Set-Cookie` entry.
///
/// Cookies with an empty name are skipped.
pub fn set_cookie(headers: &mut HeaderMap, cookie: &Cookie<'static>) -> Result<()> {
    if let Some(value) = serialize(cookie)? {
        headers.append(SET_COOKIE, HeaderValue::from_str(&value)?);
    } else {
        tracing::debug!("skipping cookie without a name");
    }
    Ok(())
}

/// Renders the `Set-Cookie` value for `cookie`, or `None` when it has no name.
pub fn serialize(cookie: &Cookie<'static>) -> Result<Option<String>> {
    if cookie.name().is_empty() {
        return Ok(None);
    }
    validate_name(cookie.name())?;
    validate_value(cookie.name(), cookie.value())?;

    let mut cookie = cookie.clone();
    if cookie.name().starts_with("__Secure") {
        cookie.set_secure(true);
    }
    if cookie.name().starts_with("__Host") {
        cookie.set_path("/");
        cookie.set_secure(true);
        cookie.unset_domain();
    }

    if cookie.max_age().is_some_and(|age| age.is_negative()) {
        return Err(Error::NegativeMaxAge(cookie.name().to_string()));
    }
    if let Some(domain) = cookie.domain() {
        validate_domain(domain)?;
    }
    if let Some(path) = cookie.path() {
        validate_path(path)?;
    }

    Ok(Some(cookie.to_string()))
}

fn validate_name(name: &str) -> Result<()> {
    if COOKIE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidCookieName(name.to_string()))
    }
}

fn validate_value(name: &str, value: &str) -> Result<()> {
    let bad = value
        .chars()
        .find(|&c| c < '\x21' || matches!(c, '"' | ',' | ';' | '\\' | '\x7f') || !c.is_ascii());

    match bad {
        Some(ch) => Err(Error::InvalidCookieValue {
            name: name.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

fn validate_path(path: &str) -> Result<()> {
    match path.chars().find(|&c| !(' '..='~').contains(&c) || c == ';') {
        Some(ch) => Err(Error::InvalidCookiePath {
            path: path.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

fn validate_domain(domain: &str) -> Result<()> {
    if domain.starts_with('-') || domain.ends_with('.') || domain.ends_with('-') {
        return Err(Error::InvalidCookieDomain(domain.to_string()));
    }
    Ok(())
}
