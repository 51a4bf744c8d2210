//! Server configuration.

use crate::mode::Mode;
use std::net::SocketAddr;
use std::time::Duration;

/// How long a connection may take to deliver a complete request before the
/// transport layer drops it.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a single response write may block before the transport layer
/// drops the connection.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for a [`MockTtsServer`](crate::MockTtsServer), fixed for the
/// lifetime of the server.
///
/// The defaults match the standalone binary: listen on port 8080, answer
/// `200 OK` to everything, 5 second read timeout, 1 second write timeout.
#[derive(Clone, Copy, Debug)]
pub struct ServerConfig {
    /// Address to bind the listener on. Tests usually want `127.0.0.1:0`.
    pub addr: SocketAddr,

    /// Which canned response every request receives.
    pub mode: Mode,

    /// Window within which a connection must deliver its complete request.
    pub read_timeout: Duration,

    /// Window within which the complete response must be written.
    pub write_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            mode: Mode::default(),
            read_timeout: DEFAULT_READ_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }
}
