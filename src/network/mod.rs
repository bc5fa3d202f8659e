//! Network Module
//!
//! TCP client side of the admin protocol.
//!
//! ## Architecture
//! - `Connection`: one buffered TCP stream
//! - `AdminClient`: lazy connect, command execution, typed operations
//! - `SharedClient`: mutex-guarded client for multi-threaded callers

mod connection;
mod client;
mod shared;

pub use connection::Connection;
pub use client::{AdminClient, ALL_PARAMS_FILTER};
pub use shared::SharedClient;
