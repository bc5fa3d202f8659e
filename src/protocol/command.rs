//! Command definitions
//!
//! Represents the requests a client can send to the admin interface.

use crate::error::{AdminError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Status,
    Start,
    Stop,
    Ping,
    UrlPurge,
    Stats,
    ParamShow,
    ParamSet,
    Ban,
    BanList,
    VclList,
    VclUse,
    VclDiscard,
    PanicShow,
    PanicClear,
    Help,
    Banner,
    Quit,
    Raw,
}

impl CommandType {
    /// Verb as written on the wire (`Raw` has none of its own)
    pub fn verb(&self) -> &'static str {
        match self {
            CommandType::Status => "status",
            CommandType::Start => "start",
            CommandType::Stop => "stop",
            CommandType::Ping => "ping",
            CommandType::UrlPurge => "url.purge",
            CommandType::Stats => "stats",
            CommandType::ParamShow => "param.show",
            CommandType::ParamSet => "param.set",
            CommandType::Ban => "ban",
            CommandType::BanList => "ban.list",
            CommandType::VclList => "vcl.list",
            CommandType::VclUse => "vcl.use",
            CommandType::VclDiscard => "vcl.discard",
            CommandType::PanicShow => "panic.show",
            CommandType::PanicClear => "panic.clear",
            CommandType::Help => "help",
            CommandType::Banner => "banner",
            CommandType::Quit => "quit",
            CommandType::Raw => "",
        }
    }
}

/// A command to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check status of the cache process
    Status,

    /// Start the cache process
    Start,

    /// Stop the cache process
    Stop,

    /// Keep the connection alive
    Ping,

    /// Purge URLs matching a regular expression
    Purge { pattern: String },

    /// Dump all counters
    Stats,

    /// Show parameters; `None` shows the default listing
    ParamShow { filter: Option<String> },

    /// Set a parameter value
    ParamSet { name: String, value: String },

    /// Mark obsolete all objects matching the expression
    Ban { expression: String },

    /// List active bans
    BanList,

    /// List loaded configurations
    VclList,

    /// Switch to a named configuration
    VclUse { name: String },

    /// Unload a named configuration
    VclDiscard { name: String },

    /// Return the last panic, if any
    PanicShow,

    /// Clear the last panic
    PanicClear,

    /// Show help, optionally for a single command
    Help { command: Option<String> },

    /// Print the welcome banner
    Banner,

    /// Ask the server to close the connection
    Quit,

    /// Pre-formatted command text
    Raw(String),
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Status => CommandType::Status,
            Command::Start => CommandType::Start,
            Command::Stop => CommandType::Stop,
            Command::Ping => CommandType::Ping,
            Command::Purge { .. } => CommandType::UrlPurge,
            Command::Stats => CommandType::Stats,
            Command::ParamShow { .. } => CommandType::ParamShow,
            Command::ParamSet { .. } => CommandType::ParamSet,
            Command::Ban { .. } => CommandType::Ban,
            Command::BanList => CommandType::BanList,
            Command::VclList => CommandType::VclList,
            Command::VclUse { .. } => CommandType::VclUse,
            Command::VclDiscard { .. } => CommandType::VclDiscard,
            Command::PanicShow => CommandType::PanicShow,
            Command::PanicClear => CommandType::PanicClear,
            Command::Help { .. } => CommandType::Help,
            Command::Banner => CommandType::Banner,
            Command::Quit => CommandType::Quit,
            Command::Raw(_) => CommandType::Raw,
        }
    }

    /// Render the request line (without the trailing newline)
    ///
    /// Arguments are checked before anything is framed: control characters
    /// are rejected everywhere, and single-token arguments (parameter and
    /// configuration names) must not contain whitespace.
    pub fn to_line(&self) -> Result<String> {
        let verb = self.command_type().verb();
        let line = match self {
            Command::Purge { pattern } => {
                format!("{} {}", verb, free_text("pattern", pattern)?)
            }
            Command::ParamShow { filter: Some(filter) } => {
                format!("{} {}", verb, token("filter", filter)?)
            }
            Command::ParamSet { name, value } => {
                format!(
                    "{} {} {}",
                    verb,
                    token("parameter name", name)?,
                    free_text("parameter value", value)?
                )
            }
            Command::Ban { expression } => {
                format!("{} {}", verb, free_text("ban expression", expression)?)
            }
            Command::VclUse { name } | Command::VclDiscard { name } => {
                format!("{} {}", verb, token("configuration name", name)?)
            }
            Command::Help { command: Some(command) } => {
                format!("{} {}", verb, token("command", command)?)
            }
            Command::Raw(text) => free_text("command", text)?.to_string(),
            _ => verb.to_string(),
        };
        Ok(line)
    }
}

/// Reject text that would break request framing
///
/// Any control character (newline, carriage return, NUL, ...) would either
/// end the request early or smuggle a second command onto the wire.
pub fn validate_line(what: &str, text: &str) -> Result<()> {
    if let Some(c) = text.chars().find(|c| c.is_control()) {
        return Err(AdminError::InvalidArgument(format!(
            "{} contains control character {:?}",
            what, c
        )));
    }
    Ok(())
}

fn free_text<'a>(what: &str, text: &'a str) -> Result<&'a str> {
    if text.trim().is_empty() {
        return Err(AdminError::InvalidArgument(format!("{} must not be empty", what)));
    }
    validate_line(what, text)?;
    Ok(text)
}

fn token<'a>(what: &str, text: &'a str) -> Result<&'a str> {
    let text = free_text(what, text)?;
    if text.chars().any(char::is_whitespace) {
        return Err(AdminError::InvalidArgument(format!(
            "{} must be a single token: {:?}",
            what, text
        )));
    }
    Ok(text)
}
