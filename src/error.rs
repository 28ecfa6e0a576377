use http::header::{InvalidHeaderName, InvalidHeaderValue};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error("status code {0} is not in the range 200 to 599")]
    StatusOutOfRange(u16),

    #[error("invalid status text: {0:?}")]
    InvalidStatusText(String),

    #[error("response with null body status {0} cannot have a body")]
    BodyNotAllowed(u16),

    #[error("invalid cookie name: {0:?}")]
    InvalidCookieName(String),

    #[error("cookie {name:?} cannot contain character {ch:?} in its value")]
    InvalidCookieValue { name: String, ch: char },

    #[error("invalid cookie path char {ch:?} in {path:?}")]
    InvalidCookiePath { path: String, ch: char },

    #[error("invalid first/last char in cookie domain: {0}")]
    InvalidCookieDomain(String),

    #[error("Max-Age of cookie {0:?} must not be negative")]
    NegativeMaxAge(String),

    #[error("failed to encode body as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
