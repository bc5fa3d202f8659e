//! Connection Handler
//!
//! Owns one TCP stream to the admin interface.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{AdminError, Result};
use crate::protocol::{read_response, write_request, Response};

/// A single live connection to the admin interface
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (flushed after every request)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Open a connection using the endpoint and timeouts from `config`
    pub fn open(config: &Config) -> Result<Self> {
        let addr = config.addr();
        let stream = match config.connect_timeout() {
            Some(timeout) => connect_with_timeout(&addr, timeout)?,
            None => TcpStream::connect(&addr)?,
        };

        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;
        stream.set_nodelay(true)?;

        Self::from_stream(stream)
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            peer_addr,
        })
    }

    /// Send one request line and read its complete response
    pub fn round_trip(&mut self, line: &str) -> Result<Response> {
        write_request(&mut self.writer, line)?;
        let response = read_response(&mut self.reader)?;
        tracing::trace!(
            "Response from {}: status {} ({} bytes)",
            self.peer_addr,
            response.status.code(),
            response.body.len()
        );
        Ok(response)
    }

    /// Shut the stream down in both directions
    pub fn close(self) {
        if let Err(e) = self.writer.get_ref().shutdown(Shutdown::Both) {
            tracing::debug!("Shutdown of {} failed: {}", self.peer_addr, e);
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Try each resolved address in turn, keeping the last failure
fn connect_with_timeout(addr: &str, timeout: std::time::Duration) -> Result<TcpStream> {
    let mut last_err = None;
    for sock_addr in addr.to_socket_addrs()? {
        match TcpStream::connect_timeout(&sock_addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }
    Err(match last_err {
        Some(e) => AdminError::Connection(e),
        None => AdminError::Connection(std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            format!("{} did not resolve to any address", addr),
        )),
    })
}
