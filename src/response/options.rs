//! Per-call configuration for the response builders.
//!
//! Every field is optional. Unset fields mean: no cookies, no extra headers,
//! no `Location`, status `200` (`302` for redirects) and the standard reason
//! phrase for the status text.

use std::fmt::Display;

use crate::response::cookie::Cookie;

/// Cookies and headers, the options every helper accepts.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub(crate) cookies: Vec<Cookie<'static>>,
    pub(crate) headers: Vec<(String, String)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for [`created`](crate::created).
#[derive(Debug, Clone, Default)]
pub struct CreatedOptions {
    pub(crate) base: Options,
    pub(crate) location: Option<String>,
}

impl CreatedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Display) -> Self {
        self.location = Some(location.to_string());
        self
    }
}

/// Options for [`redirect`](crate::redirect).
#[derive(Debug, Clone, Default)]
pub struct RedirectOptions {
    pub(crate) base: Options,
    pub(crate) status: Option<u16>,
}

impl RedirectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `302 Found`.
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Everything [`response`](crate::response()) understands.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    pub(crate) base: Options,
    pub(crate) location: Option<String>,
    pub(crate) status: Option<u16>,
    pub(crate) status_text: Option<String>,
}

impl ResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts anything with a string form, a [`url::Url`] included.
    pub fn location(mut self, location: impl Display) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Defaults to `200`.
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Defaults to the standard reason phrase of the status.
    pub fn status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }
}

macro_rules! base_setters {
    ($ty:ty, |$this:ident| $base:expr) => {
        impl $ty {
            /// Appends a cookie, sent as its own `Set-Cookie` header.
            pub fn cookie(mut self, cookie: impl Into<Cookie<'static>>) -> Self {
                let $this = &mut self;
                $base.cookies.push(cookie.into());
                self
            }

            pub fn cookies<I>(mut self, cookies: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Cookie<'static>>,
            {
                let $this = &mut self;
                $base.cookies.extend(cookies.into_iter().map(Into::into));
                self
            }

            /// Appends a header. Names and values are checked when the
            /// response is built.
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                let $this = &mut self;
                $base.headers.push((name.into(), value.into()));
                self
            }

            pub fn headers<I, K, V>(mut self, headers: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<String>,
            {
                let $this = &mut self;
                $base
                    .headers
                    .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
                self
            }
        }
    };
}

base_setters!(Options, |this| this);
base_setters!(CreatedOptions, |this| this.base);
base_setters!(RedirectOptions, |this| this.base);
base_setters!(ResponseOptions, |this| this.base);

impl From<Options> for ResponseOptions {
    fn from(base: Options) -> Self {
        ResponseOptions {
            base,
            ..Default::default()
        }
    }
}

impl From<CreatedOptions> for ResponseOptions {
    fn from(opts: CreatedOptions) -> Self {
        ResponseOptions {
            base: opts.base,
            location: opts.location,
            ..Default::default()
        }
    }
}

impl From<RedirectOptions> for ResponseOptions {
    fn from(opts: RedirectOptions) -> Self {
        ResponseOptions {
            base: opts.base,
            status: opts.status,
            ..Default::default()
        }
    }
}
