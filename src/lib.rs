//! Convenience constructors for HTTP responses.
//!
//! [`response()`] assembles status, headers, cookies and a body; the named
//! helpers ([`ok`], [`created`], [`no_content`], [`redirect`], [`bad_request`],
//! [`unauthorized`], [`forbidden`], [`not_found`]) fix the status for you.
//!
//! ```
//! use http_responses::{ok, Options};
//! use serde_json::json;
//!
//! let res = ok(json!({ "id": 5 }), Options::new()).unwrap();
//! assert_eq!(res.headers()["content-type"], "application/json");
//! ```

mod error;
pub mod response;

pub use error::{Error, Result};
pub use response::body::{Body, BodyInit, BodyStream};
pub use response::cookie::{Cookie, SameSite};
pub use response::form::{Blob, FormData, FormValue, UrlSearchParams};
pub use response::options::{CreatedOptions, Options, RedirectOptions, ResponseOptions};
pub use response::status::Status;
pub use response::{
    bad_request, created, forbidden, no_content, not_found, ok, redirect, response, unauthorized,
    Response,
};
