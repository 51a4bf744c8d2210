//! A tiny mock HTTP server that simulates the responses of a text-to-speech
//! API so that a client's error handling can be exercised deterministically.
//!
//! Every server instance serves exactly one canned response, selected by a
//! [`Mode`] fixed at construction time. The request itself is never inspected
//! to choose the response; it is only logged and recorded so that tests can
//! verify what the client sent.
//!
//! This is intentionally minimal and relatively low-level. Only HTTP/1.x is
//! implemented, there is one catch-all route, and there is no shutdown: a
//! started server runs for the rest of the process lifetime.

mod config;
mod error;
mod mode;
mod pool;
mod request;
mod response;
mod server;
mod stream;

pub use config::{ServerConfig, DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT};
pub use error::Error;
pub use mode::Mode;
pub use request::Request;
pub use response::CannedResponse;
pub use server::MockTtsServer;
