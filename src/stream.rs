use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};

/// A connection wrapper that turns the configured timeouts into deadlines.
///
/// `TcpStream`'s own timeouts are per-call: a peer trickling one byte at a
/// time in under-the-timeout gaps could hold a connection open indefinitely.
/// Here the read window covers the whole request and the write window the
/// whole response. The remaining budget is recomputed before every call and
/// pushed down onto the socket, so the connection is cut once its window is
/// spent no matter how the peer paces itself.
pub(crate) struct DeadlineStream<'a> {
    stream: &'a mut TcpStream,
    read_deadline: Instant,
    write_timeout: Duration,

    /// Starts at the first response byte, so a request that uses most of its
    /// read window still gets the full write window.
    write_deadline: Option<Instant>,
}

impl<'a> DeadlineStream<'a> {
    pub(crate) fn new(
        stream: &'a mut TcpStream,
        read_timeout: Duration,
        write_timeout: Duration,
    ) -> Self {
        Self {
            stream,
            read_deadline: Instant::now() + read_timeout,
            write_timeout,
            write_deadline: None,
        }
    }

    fn budget(deadline: Instant) -> io::Result<Duration> {
        let now = Instant::now();

        if now >= deadline {
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "connection window exhausted",
            ));
        }

        Ok(deadline - now)
    }
}

impl Read for DeadlineStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream
            .set_read_timeout(Some(Self::budget(self.read_deadline)?))?;
        self.stream.read(buf)
    }
}

impl Write for DeadlineStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let deadline = *self
            .write_deadline
            .get_or_insert_with(|| Instant::now() + self.write_timeout);

        self.stream.set_write_timeout(Some(Self::budget(deadline)?))?;
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
