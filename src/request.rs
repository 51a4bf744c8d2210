use std::io::{self, Read};

/// Maximum number of headers accepted when parsing a request head.
const MAX_HEADERS: usize = 64;

/// Maximum accumulated size of a request head. A peer that streams more than
/// this without completing the head is dropped as unparseable.
const MAX_HEAD_BYTES: usize = 64 * 1024;

/// A record of a single request received by the mock.
///
/// Nothing in here influences the response; the record exists so that the
/// request can be dumped to the diagnostic log and inspected by tests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// Request method, as sent. Never validated.
    pub method: String,

    /// Request target, as sent. All paths match the catch-all route.
    pub url: String,

    /// Header name/value pairs in wire order.
    pub headers: Vec<(String, String)>,

    /// Request body, if a `content-length` was declared.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Get the values of all headers with the given name, case-insensitively.
    pub fn get_header(&self, name: impl AsRef<str>) -> impl Iterator<Item = &str> {
        let name_lower = name.as_ref().to_lowercase();

        self.headers
            .iter()
            .filter(move |(name, _)| name.to_lowercase() == name_lower)
            .map(|(_, value)| value.as_str())
    }

    fn content_length(&self) -> usize {
        self.get_header("content-length")
            .next()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Read one request off a connection.
///
/// Returns `Ok(None)` if the peer closed the connection before a complete
/// request head arrived; the caller drops the connection without responding.
/// A head that does not parse as HTTP/1.x is surfaced as `InvalidData`, which
/// the transport layer likewise answers by dropping the connection.
pub(crate) fn read_request(reader: &mut dyn Read) -> io::Result<Option<Request>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 4096];

    loop {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut parser = httparse::Request::new(&mut headers);

        match parser.parse(&buf) {
            Ok(httparse::Status::Complete(head_len)) => {
                let mut request = Request {
                    method: parser.method.unwrap_or_default().to_owned(),
                    url: parser.path.unwrap_or_default().to_owned(),
                    headers: parser
                        .headers
                        .iter()
                        .map(|header| {
                            (
                                header.name.to_owned(),
                                String::from_utf8_lossy(header.value).into_owned(),
                            )
                        })
                        .collect(),
                    body: None,
                };

                let content_length = request.content_length();

                if content_length > 0 {
                    let mut body = buf[head_len..].to_vec();

                    while body.len() < content_length {
                        let n = reader.read(&mut chunk)?;

                        if n == 0 {
                            break;
                        }

                        body.extend_from_slice(&chunk[..n]);
                    }

                    body.truncate(content_length);
                    request.body = Some(body);
                }

                return Ok(Some(request));
            }
            Ok(httparse::Status::Partial) => {}
            Err(e) => {
                return Err(io::Error::new(io::ErrorKind::InvalidData, e.to_string()));
            }
        }

        let n = reader.read(&mut chunk)?;

        if n == 0 {
            // Closed before a complete head.
            return Ok(None);
        }

        buf.extend_from_slice(&chunk[..n]);

        if buf.len() > MAX_HEAD_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "request head too large",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_request_without_body() {
        let mut wire = Cursor::new(
            b"GET /synthesis?speaker=1 HTTP/1.1\r\n\
              host: api.mock.local\r\n\
              \r\n"
                .to_vec(),
        );

        let request = read_request(&mut wire).unwrap().unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "/synthesis?speaker=1");
        assert_eq!(request.get_header("Host").next(), Some("api.mock.local"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn parses_request_with_body() {
        let mut wire = Cursor::new(
            b"POST /audio_query HTTP/1.1\r\n\
              content-length: 11\r\n\
              \r\n\
              hello world"
                .to_vec(),
        );

        let request = read_request(&mut wire).unwrap().unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.body.as_deref(), Some(&b"hello world"[..]));
    }

    #[test]
    fn truncated_body_is_kept_as_received() {
        let mut wire = Cursor::new(
            b"POST / HTTP/1.1\r\n\
              content-length: 100\r\n\
              \r\n\
              partial"
                .to_vec(),
        );

        let request = read_request(&mut wire).unwrap().unwrap();

        assert_eq!(request.body.as_deref(), Some(&b"partial"[..]));
    }

    #[test]
    fn closed_before_complete_head_yields_none() {
        let mut wire = Cursor::new(b"GET / HTT".to_vec());

        assert!(read_request(&mut wire).unwrap().is_none());
    }

    #[test]
    fn oversized_head_is_rejected() {
        let mut head = b"GET / HTTP/1.1\r\nx-pad: ".to_vec();
        head.resize(MAX_HEAD_BYTES + 4096, b'a');
        let mut wire = Cursor::new(head);

        let err = read_request(&mut wire).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn garbage_is_invalid_data() {
        let mut wire = Cursor::new(b"\0\0\0\0\r\n\r\n".to_vec());

        let err = read_request(&mut wire).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
