use std::borrow::Cow;

use http::StatusCode;

use crate::error::{Error, Result};

/// A status code together with the text sent after it on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: StatusCode,
    pub text: Cow<'static, str>,
}

impl Status {
    /// Resolves the status line for a response.
    ///
    /// Without an explicit `text` the canonical reason phrase is used. Codes
    /// that have none get an empty text rather than an error.
    pub fn resolve(code: u16, text: Option<String>) -> Result<Status> {
        if !(200..=599).contains(&code) {
            return Err(Error::StatusOutOfRange(code));
        }
        let code = StatusCode::from_u16(code).map_err(|_| Error::StatusOutOfRange(code))?;

        let text = match text {
            Some(text) => {
                if !is_reason_phrase(&text) {
                    return Err(Error::InvalidStatusText(text));
                }
                Cow::Owned(text)
            }
            None => Cow::Borrowed(code.canonical_reason().unwrap_or_default()),
        };

        Ok(Status { code, text })
    }

    /// Statuses whose responses never carry a payload.
    pub fn is_null_body(&self) -> bool {
        is_null_body(self.code)
    }
}

// 1xx codes never get here, `resolve` rejects them.
pub(crate) fn is_null_body(code: StatusCode) -> bool {
    matches!(code.as_u16(), 204 | 205 | 304)
}

// reason-phrase = *( HTAB / SP / VCHAR / obs-text )
fn is_reason_phrase(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, '\t' | ' '..='~' | '\u{80}'..='\u{ff}'))
}
