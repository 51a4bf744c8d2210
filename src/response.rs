use http::StatusCode;
use std::io::{self, Write};

/// A predetermined response, returned irrespective of request content.
///
/// The status and body are fixed for the process lifetime; serving one is the
/// only thing a handler ever does with the connection after logging the
/// request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CannedResponse {
    status: StatusCode,
    body: &'static [u8],
}

impl CannedResponse {
    pub(crate) fn new(status: StatusCode, body: &'static [u8]) -> Self {
        Self { status, body }
    }

    /// The HTTP status code of this response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The full response body.
    pub fn body(&self) -> &'static [u8] {
        self.body
    }

    /// Serialize the response onto a connection as HTTP/1.1.
    ///
    /// The whole payload is written in one go. No streaming, no chunked
    /// encoding; the connection is closed by the caller afterwards.
    pub(crate) fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        write!(
            writer,
            "HTTP/1.1 {} {}\r\n",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("Unknown")
        )?;
        write!(writer, "content-length: {}\r\n", self.body.len())?;
        write!(writer, "connection: close\r\n\r\n")?;
        writer.write_all(self.body)?;
        writer.flush()
    }
}
