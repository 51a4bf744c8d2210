//! Canned response selection.

use crate::error::Error;
use crate::response::CannedResponse;
use http::StatusCode;

/// Selects which canned response a server instance returns.
///
/// The mode is fixed at construction time and never derived from request
/// content. The error-flavored variants mirror the failure shapes of the
/// text-to-speech API being simulated, so a client under test can be walked
/// through each of its error-handling paths.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Answer `200` with body `OK` to everything.
    ///
    /// This is the default: a mock that has no opinion and just acknowledges
    /// whatever it receives.
    #[default]
    AlwaysOk,
    /// A successful synthesis call: `200` with an empty body.
    Ok,
    /// The upstream API is rate limiting: `500` with body `error: 429`.
    TooManyRequests,
    /// The account has run out of credit: `500` with body
    /// `error: notEnoughPoints`.
    NotEnoughPoints,
    /// A generic rejection: `400` with body `error: some error`.
    BadRequest,
}

impl Mode {
    /// Resolve a numeric mode code from configuration.
    ///
    /// Any code outside the recognized set is an unrecoverable configuration
    /// error. Callers are expected to resolve the code once at startup and
    /// abort on failure, before a listener is bound.
    pub fn from_code(code: u8) -> Result<Self, Error> {
        match code {
            1 => Ok(Mode::Ok),
            2 => Ok(Mode::TooManyRequests),
            3 => Ok(Mode::NotEnoughPoints),
            4 => Ok(Mode::BadRequest),
            _ => Err(Error::InvalidMode(code)),
        }
    }

    /// The canned response this mode serves.
    pub fn canned(self) -> CannedResponse {
        match self {
            Mode::AlwaysOk => CannedResponse::new(StatusCode::OK, b"OK"),
            Mode::Ok => CannedResponse::new(StatusCode::OK, b""),
            Mode::TooManyRequests => {
                CannedResponse::new(StatusCode::INTERNAL_SERVER_ERROR, b"error: 429")
            }
            Mode::NotEnoughPoints => {
                CannedResponse::new(StatusCode::INTERNAL_SERVER_ERROR, b"error: notEnoughPoints")
            }
            Mode::BadRequest => CannedResponse::new(StatusCode::BAD_REQUEST, b"error: some error"),
        }
    }
}
