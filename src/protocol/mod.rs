//! Protocol Module
//!
//! Defines the text protocol spoken by the admin interface.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! <command> [<arg> ...]\n
//! ```
//!
//! ### Response Format
//! ```text
//! <status> <length>\n
//! <body of exactly length bytes>\n
//! ```
//!
//! ### Status Codes
//! - 100-107: syntax, unknown command, unimplemented, argument count,
//!   parameter and authentication failures
//! - 200: OK
//! - 201: truncated
//! - 300: can't
//! - 400: communication error
//! - 500: close
//!
//! ### Structured Bodies
//! - `stats`: one `<value> <name>` line per counter
//! - `param.show`: `<name> <value>` header lines with indented descriptions

mod command;
mod response;
mod codec;
mod stats;
mod params;

pub use command::{validate_line, Command, CommandType};
pub use response::{Response, StatusCode};
pub use codec::{
    encode_request, encode_response, parse_header, read_request, read_response,
    write_command, write_request, write_response, HEADER_LINE_LEN, MAX_BODY_SIZE,
};
pub use stats::{parse_stats, StatsTable};
pub use params::{parse_params, ParamInfo, ParamTable};
