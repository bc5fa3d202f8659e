//! # varnishadm
//!
//! Client library for the administrative text protocol of a caching server:
//! - Lazy, self-healing TCP connection
//! - Line framing with status/length-prefixed responses
//! - Typed commands with argument validation
//! - Parsers for statistics and parameter listings
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                AdminClient / SharedClient                    │
//! │     status, start, stop, purge, stats, param.show, ...       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ execute(command)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Connection                              │
//! │         (Disconnected | Connected, one TCP stream)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │   Parsers   │
//!   │ (framing)   │          │(stats/param)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AdminError, Result};
pub use config::Config;
pub use network::{AdminClient, SharedClient};
pub use protocol::{ParamInfo, ParamTable, StatsTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of varnishadm
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
