//! Response definitions
//!
//! Represents the status line and body the server sends back for a command.

use crate::error::{AdminError, Result};

/// Response status codes
///
/// Only the literal status token `200` maps to `Ok`; every other code is an
/// application-level failure whose message is the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Syntax,
    Unknown,
    Unimplemented,
    TooFew,
    TooMany,
    Param,
    Auth,
    Ok,
    Truncated,
    Cant,
    Comms,
    Close,
    /// A code outside the documented table, or a documented code spelled
    /// in a non-canonical form such as `0200`
    Other(u64),
}

impl StatusCode {
    /// Parse the status token of a header line
    ///
    /// Success is decided on the literal text, so `0200` or `+200` are not
    /// `Ok`. Returns `None` when the token is not an integer.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "200" {
            return Some(StatusCode::Ok);
        }
        let code: u64 = token.parse().ok()?;
        let status = match StatusCode::from_code(code) {
            StatusCode::Ok => StatusCode::Other(code),
            known if token == code.to_string() => known,
            _ => StatusCode::Other(code),
        };
        Some(status)
    }

    /// Map a numeric status to its variant
    pub fn from_code(code: u64) -> Self {
        match code {
            100 => StatusCode::Syntax,
            101 => StatusCode::Unknown,
            102 => StatusCode::Unimplemented,
            104 => StatusCode::TooFew,
            105 => StatusCode::TooMany,
            106 => StatusCode::Param,
            107 => StatusCode::Auth,
            200 => StatusCode::Ok,
            201 => StatusCode::Truncated,
            300 => StatusCode::Cant,
            400 => StatusCode::Comms,
            500 => StatusCode::Close,
            other => StatusCode::Other(other),
        }
    }

    /// Numeric value as sent on the wire
    pub fn code(&self) -> u64 {
        match self {
            StatusCode::Syntax => 100,
            StatusCode::Unknown => 101,
            StatusCode::Unimplemented => 102,
            StatusCode::TooFew => 104,
            StatusCode::TooMany => 105,
            StatusCode::Param => 106,
            StatusCode::Auth => 107,
            StatusCode::Ok => 200,
            StatusCode::Truncated => 201,
            StatusCode::Cant => 300,
            StatusCode::Comms => 400,
            StatusCode::Close => 500,
            StatusCode::Other(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

/// A complete response read off the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code from the header line
    pub status: StatusCode,

    /// Exactly the declared number of body bytes, framing newline excluded
    pub body: String,
}

impl Response {
    /// Create an OK response
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Ok,
            body: body.into(),
        }
    }

    /// Create a response with an arbitrary status
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Turn a non-OK status into `AdminError::Command`, otherwise return the
    /// body with trailing whitespace stripped.
    pub fn into_result(self) -> Result<String> {
        if !self.status.is_ok() {
            return Err(AdminError::Command {
                code: self.status.code(),
                message: self.body,
            });
        }
        let mut body = self.body;
        body.truncate(body.trim_end().len());
        Ok(body)
    }
}
