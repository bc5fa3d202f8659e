//! Statistics body parser
//!
//! The `stats` body carries one counter per line, value first:
//!
//! ```text
//!       123  Client connections accepted
//!        45  Client requests received
//! ```
//!
//! The name is everything after the first run of whitespace following the
//! value, so names may contain spaces.

use std::collections::HashMap;

use crate::error::{AdminError, Result};

/// Counter name to value
///
/// Counters are unsigned 64-bit on the server, so a negative value is a
/// parse error rather than a valid reading.
pub type StatsTable = HashMap<String, u64>;

/// Parse a `stats` response body
pub fn parse_stats(body: &str) -> Result<StatsTable> {
    let mut table = StatsTable::new();

    for (index, raw) in body.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (value, name) = line.split_once(char::is_whitespace).ok_or_else(|| {
            AdminError::Parse(format!(
                "stats line {}: expected '<value> <name>', got {:?}",
                index + 1,
                raw
            ))
        })?;

        let value: u64 = value.parse().map_err(|_| {
            AdminError::Parse(format!(
                "stats line {}: non-numeric value {:?}",
                index + 1,
                value
            ))
        })?;

        table.insert(name.trim_start().to_string(), value);
    }

    Ok(table)
}
