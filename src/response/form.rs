use std::hash::{DefaultHasher, Hash, Hasher};

use bytes::{BufMut, Bytes, BytesMut};
use url::{form_urlencoded, Url};

use crate::response::media::MediaType;

/// Raw bytes tagged with a MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
    content_type: String,
}

impl Blob {
    /// The type is lowercased. A type containing anything outside printable
    /// ASCII is dropped.
    pub fn new(data: impl Into<Bytes>, content_type: &str) -> Blob {
        let content_type = if content_type.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
            content_type.to_ascii_lowercase()
        } else {
            String::new()
        };

        Blob {
            data: data.into(),
            content_type,
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn into_data(self) -> Bytes {
        self.data
    }
}

/// Ordered name/value pairs sent as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    pairs: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        UrlSearchParams {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&Url> for UrlSearchParams {
    fn from(url: &Url) -> Self {
        url.query_pairs().into_owned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { blob: Blob, filename: String },
}

/// Ordered form fields sent as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Adds a file part. Without a filename the part is named `blob`.
    pub fn append_file(
        mut self,
        name: impl Into<String>,
        blob: Blob,
        filename: Option<&str>,
    ) -> Self {
        let filename = filename.unwrap_or("blob").to_string();
        self.entries.push((name.into(), FormValue::File { blob, filename }));
        self
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    /// Encodes the form, returning the boundary and the body.
    ///
    /// The boundary is a hash of the parts, so equal forms encode to equal
    /// bytes.
    pub fn encode(&self) -> (String, Bytes) {
        let parts: Vec<BytesMut> = self.entries.iter().map(encode_part).collect();
        let boundary = boundary_for(&parts);

        let len = parts.iter().map(|p| p.len() + boundary.len() + 6).sum::<usize>();
        let mut body = BytesMut::with_capacity(len + boundary.len() + 6);
        for part in parts {
            body.put_slice(b"--");
            body.put_slice(boundary.as_bytes());
            body.put_slice(b"\r\n");
            body.put(part);
            body.put_slice(b"\r\n");
        }
        body.put_slice(b"--");
        body.put_slice(boundary.as_bytes());
        body.put_slice(b"--\r\n");

        (boundary, body.freeze())
    }
}

fn encode_part((name, value): &(String, FormValue)) -> BytesMut {
    let mut part = BytesMut::new();
    part.put_slice(b"Content-Disposition: form-data; name=\"");
    part.put_slice(escape_field(name).as_bytes());
    part.put_slice(b"\"");

    match value {
        FormValue::Text(text) => {
            part.put_slice(b"\r\n\r\n");
            part.put_slice(normalize_newlines(text).as_bytes());
        }
        FormValue::File { blob, filename } => {
            part.put_slice(b"; filename=\"");
            part.put_slice(escape_field(filename).as_bytes());
            part.put_slice(b"\"\r\nContent-Type: ");
            let content_type = match blob.content_type() {
                "" => MediaType::OctetStream.as_str(),
                ty => ty,
            };
            part.put_slice(content_type.as_bytes());
            part.put_slice(b"\r\n\r\n");
            part.put_slice(blob.data());
        }
    }
    part
}

fn escape_field(field: &str) -> String {
    field
        .replace('\n', "%0A")
        .replace('\r', "%0D")
        .replace('"', "%22")
}

fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            c => out.push(c),
        }
    }
    out
}

fn boundary_for(parts: &[BytesMut]) -> String {
    let mut salt: u64 = 0;
    loop {
        let mut hasher = DefaultHasher::new();
        salt.hash(&mut hasher);
        for part in parts {
            part[..].hash(&mut hasher);
        }
        let boundary = format!("----formdata-{:016x}", hasher.finish());

        let collides = parts
            .iter()
            .any(|part| part.windows(boundary.len()).any(|w| w == boundary.as_bytes()));
        if !collides {
            return boundary;
        }
        salt += 1;
    }
}
