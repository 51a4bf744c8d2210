//! Types for error handling.

use std::error::Error as StdError;
use std::fmt;
use std::io;

/// All possible types of errors that can be returned from voicemock.
#[derive(Debug)]
pub enum Error {
    /// The configured mode code does not map to any canned response.
    ///
    /// This is the intentional misconfiguration trap: it is raised once at
    /// startup and is meant to abort the process before the listener ever
    /// accepts a connection.
    InvalidMode(u8),
    /// An I/O error while binding or serving the listener.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMode(code) => {
                write!(f, "unrecognized mode code {}, expected one of 1-4", code)
            }
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}
