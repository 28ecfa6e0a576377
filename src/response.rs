use std::fmt::Display;

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, LOCATION};
use http::StatusCode;

use crate::error::{Error, Result};
use body::{Body, BodyInit};
use options::{CreatedOptions, Options, RedirectOptions, ResponseOptions};
use status::Status;

pub mod body;
pub mod cookie;
pub mod form;
pub mod media;
pub mod options;
pub mod status;
pub mod wire;

/// A finished response. Nothing about it changes after it is built.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    status_text: String,
    headers: HeaderMap,
    body: Body,
}

impl Response {
    pub fn from_parts(status: Status, headers: HeaderMap, body: Body) -> Result<Response> {
        if status.is_null_body() && !body.is_empty() {
            return Err(Error::BodyNotAllowed(status.code.as_u16()));
        }

        Ok(Response {
            status: status.code,
            status_text: status.text.into_owned(),
            headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}

/// Builds a response from a body and options.
///
/// Headers are taken as given, cookies are appended one `Set-Cookie` each, and
/// a location replaces any `Location` header. The body's type decides its
/// encoding; values without a more specific kind are sent as JSON.
pub fn response(body: impl Into<BodyInit>, options: ResponseOptions) -> Result<Response> {
    let ResponseOptions {
        base,
        location,
        status,
        status_text,
    } = options;

    let mut headers = HeaderMap::with_capacity(base.headers.len() + base.cookies.len() + 1);
    for (name, value) in &base.headers {
        headers.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_bytes(value.trim_matches([' ', '\t', '\r', '\n']).as_bytes())?,
        );
    }

    for c in &base.cookies {
        cookie::set_cookie(&mut headers, c)?;
    }

    if let Some(location) = location {
        headers.insert(LOCATION, HeaderValue::from_bytes(location.as_bytes())?);
    }

    let status = Status::resolve(status.unwrap_or(200), status_text)?;

    let extracted = body.into().extract()?;
    if let Some(content_type) = extracted.content_type {
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
        }
    }

    tracing::trace!(
        status = status.code.as_u16(),
        headers = headers.len(),
        "built response"
    );

    Response::from_parts(status, headers, extracted.body)
}

fn with_status(
    status: StatusCode,
    body: impl Into<BodyInit>,
    options: impl Into<ResponseOptions>,
) -> Result<Response> {
    let mut options = options.into();
    options.status = Some(status.as_u16());
    response(body, options)
}

/// `200 OK`
pub fn ok(body: impl Into<BodyInit>, options: Options) -> Result<Response> {
    with_status(StatusCode::OK, body, options)
}

/// `201 Created`, optionally pointing at the new resource.
pub fn created(body: impl Into<BodyInit>, options: CreatedOptions) -> Result<Response> {
    with_status(StatusCode::CREATED, body, options)
}

/// `204 No Content`, always without a body.
pub fn no_content(options: Options) -> Result<Response> {
    with_status(StatusCode::NO_CONTENT, BodyInit::Empty, options)
}

/// Redirects to `url` with `302 Found` unless the options pick another status.
pub fn redirect(url: impl Display, options: RedirectOptions) -> Result<Response> {
    let status = options.status.unwrap_or(StatusCode::FOUND.as_u16());
    let options = ResponseOptions::from(options).location(url).status(status);
    response(BodyInit::Empty, options)
}

/// `400 Bad Request`
pub fn bad_request(body: impl Into<BodyInit>, options: Options) -> Result<Response> {
    with_status(StatusCode::BAD_REQUEST, body, options)
}

/// `401 Unauthorized`
pub fn unauthorized(body: impl Into<BodyInit>, options: Options) -> Result<Response> {
    with_status(StatusCode::UNAUTHORIZED, body, options)
}

/// `403 Forbidden`
pub fn forbidden(body: impl Into<BodyInit>, options: Options) -> Result<Response> {
    with_status(StatusCode::FORBIDDEN, body, options)
}

/// `404 Not Found`
pub fn not_found(body: impl Into<BodyInit>, options: Options) -> Result<Response> {
    with_status(StatusCode::NOT_FOUND, body, options)
}
