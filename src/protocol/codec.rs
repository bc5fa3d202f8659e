//! Protocol codec
//!
//! Framing for the line-based admin protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! <command text>\n
//! ```
//!
//! ### Response
//! ```text
//! <status> <length>\n        header line, two decimal tokens
//! <length bytes of body>\n   body plus one framing newline
//! ```
//!
//! The server pads the header line to a fixed width, so tokens are separated
//! by arbitrary whitespace rather than a single space.

use std::io::{BufRead, ErrorKind, Write};

use super::command::validate_line;
use super::{Command, Response, StatusCode};
use crate::error::{AdminError, Result};

/// Width the server pads header lines to, newline included
pub const HEADER_LINE_LEN: usize = 13;

/// Maximum accepted body size (16 MB)
pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

// =============================================================================
// Request Framing
// =============================================================================

/// Encode a request line to bytes: text followed by a single newline
pub fn encode_request(line: &str) -> Result<Vec<u8>> {
    validate_line("command", line)?;
    let mut message = Vec::with_capacity(line.len() + 1);
    message.extend_from_slice(line.as_bytes());
    message.push(b'\n');
    Ok(message)
}

/// Write a request line to a stream and flush it
///
/// The server only starts processing once the newline arrives, so the write
/// is always followed by a flush.
pub fn write_request<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    let bytes = encode_request(line)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Write a typed command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    write_request(writer, &command.to_line()?)
}

// =============================================================================
// Response Framing
// =============================================================================

/// Parse a response header line into status and body length
pub fn parse_header(line: &str) -> Result<(StatusCode, usize)> {
    let mut tokens = line.split_whitespace();
    let (status, length) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(status), Some(length), None) => (status, length),
        _ => {
            return Err(AdminError::Protocol(format!(
                "Malformed response header: {:?}",
                line
            )))
        }
    };

    let status = StatusCode::from_token(status).ok_or_else(|| {
        AdminError::Protocol(format!("Invalid status code in header: {:?}", status))
    })?;
    let length: usize = length.parse().map_err(|_| {
        AdminError::Protocol(format!("Invalid body length in header: {:?}", length))
    })?;

    if length > MAX_BODY_SIZE {
        return Err(AdminError::Protocol(format!(
            "Response body too large: {} bytes (max {})",
            length, MAX_BODY_SIZE
        )));
    }

    Ok((status, length))
}

/// Read a complete response from a stream
///
/// Consumes exactly one header line and `length + 1` body bytes. A stream that
/// ends early is a protocol error; any other I/O failure is passed through.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Response> {
    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Err(AdminError::Protocol(
            "Connection closed before response header".to_string(),
        ));
    }
    if raw.last() != Some(&b'\n') {
        return Err(AdminError::Protocol(format!(
            "Connection closed inside response header: {:?}",
            String::from_utf8_lossy(&raw)
        )));
    }
    let header = String::from_utf8(raw).map_err(|e| {
        AdminError::Protocol(format!(
            "Response header is not valid UTF-8: {:?}",
            String::from_utf8_lossy(e.as_bytes())
        ))
    })?;

    let (status, length) = parse_header(&header)?;

    let mut body = vec![0u8; length + 1];
    reader.read_exact(&mut body).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => AdminError::Protocol(format!(
            "Short body read: expected {} bytes plus framing newline",
            length
        )),
        _ => AdminError::Connection(e),
    })?;

    if body.pop() != Some(b'\n') {
        return Err(AdminError::Protocol(
            "Response body not followed by framing newline".to_string(),
        ));
    }

    Ok(Response {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

// =============================================================================
// Server Side Framing
// =============================================================================
//
// The half of the codec a server speaks: reading request lines and writing
// padded responses. The client never calls these; they back fake servers in
// tests and benchmarks and any tooling that impersonates the admin port.

/// Encode a response the way the server frames it
///
/// The header is padded to `HEADER_LINE_LEN` bytes like the real server does.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let header = format!("{:<3} {:<8}\n", response.status.code(), response.body.len());
    let mut message = Vec::with_capacity(header.len() + response.body.len() + 1);
    message.extend_from_slice(header.as_bytes());
    message.extend_from_slice(response.body.as_bytes());
    message.push(b'\n');
    message
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}

/// Read one request line from a stream, without its newline
///
/// Returns `None` once the peer has closed the stream.
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
