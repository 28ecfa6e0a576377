use std::io::{self, Read, Write};

use http::header::{HeaderMap, CONTENT_LENGTH, TRANSFER_ENCODING};

use crate::response::body::Body;
use crate::response::status::is_null_body;
use crate::response::Response;

const CHUNK_SIZE: usize = 8 * 1024;

impl Response {
    /// Writes the response in HTTP/1.1 form.
    ///
    /// Framing comes from the body, not from the headers: buffered bodies get
    /// their real `Content-Length`, streams end in the `chunked` coding, and
    /// caller `Content-Length`/`Transfer-Encoding` values are replaced.
    pub fn write_to(self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "HTTP/1.1 {} {}\r\n", self.status.as_u16(), self.status_text)?;

        for (key, value) in &self.headers {
            if key == CONTENT_LENGTH || key == TRANSFER_ENCODING {
                continue;
            }
            out.write_all(key.as_str().as_bytes())?;
            out.write_all(b": ")?;
            out.write_all(value.as_bytes())?;
            out.write_all(b"\r\n")?;
        }

        match self.body {
            Body::Empty => {
                if !is_null_body(self.status) {
                    out.write_all(b"content-length: 0\r\n")?;
                }
                out.write_all(b"\r\n")?;
            }
            Body::Full(bytes) => {
                write!(out, "content-length: {}\r\n", bytes.len())?;
                out.write_all(b"\r\n")?;
                out.write_all(&bytes)?;
            }
            Body::Stream(mut stream) => {
                let codings = transfer_codings(&self.headers);
                write!(out, "transfer-encoding: {}\r\n", codings.join(", "))?;
                out.write_all(b"\r\n")?;
                write_chunked(&mut stream, out)?;
            }
        }

        out.flush()
    }

    pub fn into_bytes(self) -> io::Result<Vec<u8>> {
        let hint = self.body.as_bytes().map(<[u8]>::len).unwrap_or(0);
        let mut out = Vec::with_capacity(hint + self.headers.len() * 32 + 32);
        self.write_to(&mut out)?;
        Ok(out)
    }
}

// Caller codings in order, with `chunked` moved to the end exactly once.
fn transfer_codings(headers: &HeaderMap) -> Vec<String> {
    let mut codings: Vec<String> = headers
        .get_all(TRANSFER_ENCODING)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("chunked"))
        .map(str::to_string)
        .collect();
    codings.push("chunked".to_string());
    codings
}

fn write_chunked(rdr: &mut impl Read, out: &mut impl Write) -> io::Result<()> {
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match rdr.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        write!(out, "{:x}\r\n", n)?;
        out.write_all(&buf[..n])?;
        out.write_all(b"\r\n")?;
    }
    out.write_all(b"0\r\n\r\n")
}
