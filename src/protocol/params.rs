//! Parameter body parser
//!
//! `param.show` emits a header line per parameter followed by indented
//! continuation lines holding the wrapped description:
//!
//! ```text
//! default_ttl                120.000000 [seconds]
//!                            Default TTL assigned to objects
//!                            if neither the backend nor the VCL code
//!                            assigns one.
//! ```

use std::collections::BTreeMap;

use crate::error::{AdminError, Result};

/// Current value and description of one parameter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamInfo {
    /// Everything after the name on the header line
    pub value: String,

    /// Continuation lines, each left-trimmed and followed by one space
    pub description: String,
}

/// Parameter name to its info
pub type ParamTable = BTreeMap<String, ParamInfo>;

/// Parse a `param.show` response body
pub fn parse_params(body: &str) -> Result<ParamTable> {
    let mut table = ParamTable::new();
    let mut current: Option<String> = None;

    for (index, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            let name = current.as_ref().ok_or_else(|| {
                AdminError::Parse(format!(
                    "param line {}: continuation before any parameter: {:?}",
                    index + 1,
                    line
                ))
            })?;
            if let Some(info) = table.get_mut(name) {
                info.description.push_str(line.trim_start());
                info.description.push(' ');
            }
            continue;
        }

        let (name, value) = line.split_once(char::is_whitespace).ok_or_else(|| {
            AdminError::Parse(format!(
                "param line {}: expected '<name> <value>', got {:?}",
                index + 1,
                line
            ))
        })?;

        table.insert(
            name.to_string(),
            ParamInfo {
                value: value.trim_start().to_string(),
                description: String::new(),
            },
        );
        current = Some(name.to_string());
    }

    Ok(table)
}
