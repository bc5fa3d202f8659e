//! Admin Client
//!
//! Lazily connecting client for the admin interface.
//!
//! ## Connection Lifecycle
//! - `Disconnected` until the first command is issued
//! - `Connected` after a successful connect; reused by later commands
//! - Back to `Disconnected` on `disconnect()`, on any I/O failure and on any
//!   framing failure, so the next command starts on a fresh stream
//!
//! A command error (non-200 status) leaves the connection in place: the
//! response was framed correctly and the stream is still in sync.

use crate::config::Config;
use crate::error::{AdminError, Result};
use crate::network::Connection;
use crate::protocol::{
    parse_params, parse_stats, validate_line, Command, ParamInfo, ParamTable, Response,
    StatsTable,
};

/// Filter token that makes `param.show` list every parameter
pub const ALL_PARAMS_FILTER: &str = "-l";

/// Connection state owned by a client
enum ConnectionState {
    Disconnected,
    Connected(Connection),
}

/// Client for the admin interface
///
/// Requests are strictly sequential: every method takes `&mut self`, so a
/// response is always fully consumed before the next request is written.
pub struct AdminClient {
    config: Config,
    state: ConnectionState,
}

impl AdminClient {
    /// Create a client; no connection is made until the first command
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
        }
    }

    /// Create a client for `host:port` with default timeouts
    pub fn with_addr(host: impl Into<String>, port: u16) -> Self {
        Self::new(Config::builder().host(host).port(port).build())
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a live connection is currently held
    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected(_))
    }

    // =========================================================================
    // Connection Lifecycle
    // =========================================================================

    /// Open a fresh connection to the configured endpoint
    fn open(&self) -> Result<Connection> {
        self.config.validate()?;
        let conn = Connection::open(&self.config)?;
        tracing::debug!("Connected to {}", conn.peer_addr());
        Ok(conn)
    }

    /// Close the connection; the next command reconnects
    ///
    /// A no-op when already disconnected.
    pub fn disconnect(&mut self) {
        if let ConnectionState::Connected(conn) =
            std::mem::replace(&mut self.state, ConnectionState::Disconnected)
        {
            tracing::debug!("Disconnecting from {}", conn.peer_addr());
            conn.close();
        }
    }

    // =========================================================================
    // Core Primitive
    // =========================================================================

    /// Send a command and return its full response, whatever the status
    pub fn execute_raw(&mut self, command: &str) -> Result<Response> {
        validate_line("command", command)?;
        tracing::trace!("Sending command: {}", command);

        let mut conn = match std::mem::replace(&mut self.state, ConnectionState::Disconnected) {
            ConnectionState::Connected(conn) => conn,
            ConnectionState::Disconnected => self.open()?,
        };

        match conn.round_trip(command) {
            Err(e) if e.is_connection_fatal() => {
                tracing::warn!("Dropping connection to {}: {}", conn.peer_addr(), e);
                conn.close();
                Err(e)
            }
            result => {
                self.state = ConnectionState::Connected(conn);
                result
            }
        }
    }

    /// Send a command and return its body with trailing whitespace stripped
    ///
    /// A non-200 status becomes `AdminError::Command`.
    pub fn execute(&mut self, command: &str) -> Result<String> {
        self.execute_raw(command)?.into_result()
    }

    /// Send a typed command
    pub fn run(&mut self, command: &Command) -> Result<String> {
        let line = command.to_line()?;
        self.execute(&line)
    }

    // =========================================================================
    // Named Operations
    // =========================================================================

    /// Get the status of the cache process
    pub fn status(&mut self) -> Result<String> {
        self.run(&Command::Status)
    }

    /// Start the cache process (if stopped)
    pub fn start(&mut self) -> Result<String> {
        self.run(&Command::Start)
    }

    /// Stop the cache process (if started)
    pub fn stop(&mut self) -> Result<String> {
        self.run(&Command::Stop)
    }

    pub fn ping(&mut self) -> Result<String> {
        self.run(&Command::Ping)
    }

    /// Purge URLs matching a regular expression from the cache
    pub fn purge(&mut self, pattern: &str) -> Result<String> {
        self.run(&Command::Purge {
            pattern: pattern.to_string(),
        })
    }

    /// Set the value of a parameter
    pub fn set_param(&mut self, name: &str, value: &str) -> Result<String> {
        self.run(&Command::ParamSet {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn ban(&mut self, expression: &str) -> Result<String> {
        self.run(&Command::Ban {
            expression: expression.to_string(),
        })
    }

    pub fn ban_list(&mut self) -> Result<String> {
        self.run(&Command::BanList)
    }

    pub fn vcl_list(&mut self) -> Result<String> {
        self.run(&Command::VclList)
    }

    pub fn vcl_use(&mut self, name: &str) -> Result<String> {
        self.run(&Command::VclUse {
            name: name.to_string(),
        })
    }

    pub fn vcl_discard(&mut self, name: &str) -> Result<String> {
        self.run(&Command::VclDiscard {
            name: name.to_string(),
        })
    }

    pub fn panic_show(&mut self) -> Result<String> {
        self.run(&Command::PanicShow)
    }

    pub fn panic_clear(&mut self) -> Result<String> {
        self.run(&Command::PanicClear)
    }

    /// Help text, for one command or the whole command set
    pub fn help(&mut self, command: Option<&str>) -> Result<String> {
        self.run(&Command::Help {
            command: command.map(str::to_string),
        })
    }

    pub fn banner(&mut self) -> Result<String> {
        self.run(&Command::Banner)
    }

    /// Ask the server to close the session
    ///
    /// The connection is dropped afterwards whatever the server replied.
    pub fn quit(&mut self) -> Result<String> {
        let result = self.run(&Command::Quit);
        self.disconnect();
        result
    }

    // =========================================================================
    // Structured Operations
    // =========================================================================

    /// Get all counters from the server
    pub fn stats(&mut self) -> Result<StatsTable> {
        let body = self.run(&Command::Stats)?;
        parse_stats(&body)
    }

    fn show_params(&mut self, filter: &str) -> Result<ParamTable> {
        let body = self.run(&Command::ParamShow {
            filter: Some(filter.to_string()),
        })?;
        parse_params(&body)
    }

    /// Value and description of a single parameter
    pub fn show_param(&mut self, name: &str) -> Result<ParamInfo> {
        self.show_params(name)?
            .remove(name)
            .ok_or_else(|| AdminError::NotFound(name.to_string()))
    }

    /// Every parameter the server knows about
    pub fn all_params(&mut self) -> Result<ParamTable> {
        self.show_params(ALL_PARAMS_FILTER)
    }
}

impl Drop for AdminClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}
