//! Scripted admin server for client tests
//!
//! Listens on an ephemeral loopback port, records every request line and
//! answers with whatever the handler returns.

#![allow(dead_code)]

use std::io::{BufReader, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use varnishadm::protocol::{encode_response, read_request, Response, StatusCode};
use varnishadm::Config;

/// What the server does with one request
pub enum Reply {
    /// Send a correctly framed response
    Frame(Response),

    /// Send raw bytes and keep the connection open
    Bytes(Vec<u8>),

    /// Send raw bytes, then close the connection
    BytesAndClose(Vec<u8>),

    /// Close without answering
    Close,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Frame(Response::ok(body))
    }

    pub fn status(code: u64, body: &str) -> Self {
        Reply::Frame(Response::with_status(StatusCode::from_code(code), body))
    }
}

type Handler = dyn Fn(&str) -> Reply + Send + Sync;

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    connections: Arc<AtomicUsize>,
}

impl MockServer {
    /// Start serving; the accept thread lives until the test process exits
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let connections = Arc::new(AtomicUsize::new(0));
        let handler: Arc<Handler> = Arc::new(handler);

        {
            let requests = Arc::clone(&requests);
            let connections = Arc::clone(&connections);
            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    connections.fetch_add(1, Ordering::SeqCst);
                    let requests = Arc::clone(&requests);
                    let handler = Arc::clone(&handler);
                    thread::spawn(move || serve(stream, requests, handler));
                }
            });
        }

        Self {
            addr,
            requests,
            connections,
        }
    }

    /// Always answer 200 with the request line echoed back as the body
    pub fn echo() -> Self {
        Self::start(|line| Reply::ok(line))
    }

    pub fn config(&self) -> Config {
        Config::builder()
            .host("127.0.0.1")
            .port(self.addr.port())
            .read_timeout_ms(5000)
            .write_timeout_ms(5000)
            .build()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

fn serve(stream: TcpStream, requests: Arc<Mutex<Vec<String>>>, handler: Arc<Handler>) {
    let mut writer = stream.try_clone().unwrap();
    let mut reader = BufReader::new(stream);

    while let Ok(Some(line)) = read_request(&mut reader) {
        requests.lock().push(line.clone());
        match handler(&line) {
            Reply::Frame(response) => {
                if writer.write_all(&encode_response(&response)).is_err() {
                    return;
                }
            }
            Reply::Bytes(bytes) => {
                if writer.write_all(&bytes).is_err() {
                    return;
                }
            }
            Reply::BytesAndClose(bytes) => {
                let _ = writer.write_all(&bytes);
                let _ = writer.shutdown(Shutdown::Both);
                return;
            }
            Reply::Close => {
                let _ = writer.shutdown(Shutdown::Both);
                return;
            }
        }
    }
}
