//! Shared Client
//!
//! Clonable handle that lets several threads use one admin connection.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::network::AdminClient;

/// Thread-safe handle around a single `AdminClient`
///
/// The lock is held for a whole request/response exchange, so requests from
/// different threads never interleave on the wire.
#[derive(Clone)]
pub struct SharedClient {
    inner: Arc<Mutex<AdminClient>>,
}

impl SharedClient {
    pub fn new(config: Config) -> Self {
        Self::from_client(AdminClient::new(config))
    }

    pub fn from_client(client: AdminClient) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// Send a command under the lock
    pub fn execute(&self, command: &str) -> Result<String> {
        self.inner.lock().execute(command)
    }

    /// Run several operations without other callers getting in between
    pub fn with<T>(&self, f: impl FnOnce(&mut AdminClient) -> T) -> T {
        let mut client = self.inner.lock();
        f(&mut client)
    }

    pub fn disconnect(&self) {
        self.inner.lock().disconnect();
    }
}
