use std::borrow::Cow;
use std::fmt;
use std::io::{self, Read};
use std::rc::Rc;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::response::form::{Blob, FormData, UrlSearchParams};
use crate::response::media::MediaType;

/// A body produced by a reader, passed through without buffering.
pub struct BodyStream(Box<dyn Read + Send>);

impl BodyStream {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        BodyStream(Box::new(reader))
    }
}

impl Read for BodyStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BodyStream(..)")
    }
}

/// Every kind of value a response can be built from.
///
/// Conversions pick the variant from the value's type: text, bytes, blobs,
/// streams and forms pass through, anything else is encoded as JSON.
#[derive(Debug)]
pub enum BodyInit {
    Empty,
    Text(String),
    Binary(Bytes),
    Blob(Blob),
    Stream(BodyStream),
    Form(FormData),
    UrlEncoded(UrlSearchParams),
    Json(Value),
}

impl BodyInit {
    /// Encodes any serializable value as JSON.
    ///
    /// Only `null` is special: it becomes an absent body. Values that
    /// serialize to a string (unit variants, ids, dates) stay quoted JSON.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<BodyInit> {
        Ok(match serde_json::to_value(value)? {
            Value::Null => BodyInit::Empty,
            other => BodyInit::Json(other),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BodyInit::Empty)
    }

    pub(crate) fn extract(self) -> Result<Extracted> {
        let extracted = match self {
            BodyInit::Empty => Extracted::new(Body::Empty, None),
            BodyInit::Text(text) => Extracted::new(
                Body::Full(Bytes::from(text)),
                Some(MediaType::TextPlain.to_string()),
            ),
            BodyInit::Binary(bytes) => Extracted::new(Body::Full(bytes), None),
            BodyInit::Blob(blob) => {
                let content_type =
                    Some(blob.content_type().to_string()).filter(|t| !t.is_empty());
                Extracted::new(Body::Full(blob.into_data()), content_type)
            }
            BodyInit::Stream(stream) => Extracted::new(Body::Stream(stream), None),
            BodyInit::Form(form) => {
                let (boundary, bytes) = form.encode();
                Extracted::new(
                    Body::Full(bytes),
                    Some(format!("{}; boundary={}", MediaType::FormData, boundary)),
                )
            }
            BodyInit::UrlEncoded(params) => Extracted::new(
                Body::Full(Bytes::from(params.encode())),
                Some(MediaType::FormUrlEncoded.to_string()),
            ),
            BodyInit::Json(value) => {
                tracing::debug!("encoding response body as JSON");
                Extracted::new(
                    Body::Full(Bytes::from(serde_json::to_vec(&value)?)),
                    Some(MediaType::Json.to_string()),
                )
            }
        };
        Ok(extracted)
    }
}

pub(crate) struct Extracted {
    pub body: Body,
    pub content_type: Option<String>,
}

impl Extracted {
    fn new(body: Body, content_type: Option<String>) -> Self {
        Extracted { body, content_type }
    }
}

impl From<()> for BodyInit {
    fn from(_: ()) -> Self {
        BodyInit::Empty
    }
}

impl<T: Into<BodyInit>> From<Option<T>> for BodyInit {
    fn from(value: Option<T>) -> Self {
        value.map_or(BodyInit::Empty, Into::into)
    }
}

impl From<String> for BodyInit {
    fn from(text: String) -> Self {
        BodyInit::Text(text)
    }
}

impl From<&str> for BodyInit {
    fn from(text: &str) -> Self {
        BodyInit::Text(text.to_string())
    }
}

impl From<&String> for BodyInit {
    fn from(text: &String) -> Self {
        BodyInit::Text(text.clone())
    }
}

impl From<Box<str>> for BodyInit {
    fn from(text: Box<str>) -> Self {
        BodyInit::Text(text.into_string())
    }
}

impl From<Cow<'_, str>> for BodyInit {
    fn from(text: Cow<'_, str>) -> Self {
        BodyInit::Text(text.into_owned())
    }
}

impl From<Rc<str>> for BodyInit {
    fn from(text: Rc<str>) -> Self {
        BodyInit::Text(text.to_string())
    }
}

impl From<Arc<str>> for BodyInit {
    fn from(text: Arc<str>) -> Self {
        BodyInit::Text(text.to_string())
    }
}

impl From<Bytes> for BodyInit {
    fn from(bytes: Bytes) -> Self {
        BodyInit::Binary(bytes)
    }
}

impl From<Vec<u8>> for BodyInit {
    fn from(bytes: Vec<u8>) -> Self {
        BodyInit::Binary(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for BodyInit {
    fn from(bytes: &'static [u8]) -> Self {
        BodyInit::Binary(Bytes::from_static(bytes))
    }
}

impl From<Blob> for BodyInit {
    fn from(blob: Blob) -> Self {
        BodyInit::Blob(blob)
    }
}

impl From<BodyStream> for BodyInit {
    fn from(stream: BodyStream) -> Self {
        BodyInit::Stream(stream)
    }
}

impl From<FormData> for BodyInit {
    fn from(form: FormData) -> Self {
        BodyInit::Form(form)
    }
}

impl From<UrlSearchParams> for BodyInit {
    fn from(params: UrlSearchParams) -> Self {
        BodyInit::UrlEncoded(params)
    }
}

impl From<Value> for BodyInit {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => BodyInit::Empty,
            Value::String(text) => BodyInit::Text(text),
            other => BodyInit::Json(other),
        }
    }
}

impl From<Map<String, Value>> for BodyInit {
    fn from(map: Map<String, Value>) -> Self {
        BodyInit::Json(Value::Object(map))
    }
}

macro_rules! json_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BodyInit {
                fn from(value: $ty) -> Self {
                    BodyInit::Json(Value::from(value))
                }
            }
        )*
    };
}

json_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

/// The payload of a built [`Response`](crate::Response).
#[derive(Debug)]
pub enum Body {
    Empty,
    Full(Bytes),
    Stream(BodyStream),
}

impl Body {
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    /// The buffered payload, `None` for streams.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::Empty => Some(&[] as &[u8]),
            Body::Full(bytes) => Some(&bytes[..]),
            Body::Stream(_) => None,
        }
    }

    /// Buffers the whole payload, draining a stream if there is one.
    pub fn into_bytes(self) -> io::Result<Bytes> {
        match self {
            Body::Empty => Ok(Bytes::new()),
            Body::Full(bytes) => Ok(bytes),
            Body::Stream(mut stream) => {
                let mut buf = Vec::new();
                stream.read_to_end(&mut buf)?;
                Ok(Bytes::from(buf))
            }
        }
    }

    pub fn into_text(self) -> io::Result<String> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
