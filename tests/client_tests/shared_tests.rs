//! Tests for SharedClient
//!
//! Many threads share one connection; every thread must get back the
//! response to its own request.

#[path = "../support/mock_server.rs"]
mod mock_server;

use std::thread;

use mock_server::MockServer;
use varnishadm::SharedClient;

#[test]
fn test_concurrent_requests_do_not_interleave() {
    let server = MockServer::echo();
    let shared = SharedClient::new(server.config());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    let command = format!("param.show p_{}_{}", t, i);
                    assert_eq!(shared.execute(&command).unwrap(), command);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(server.requests().len(), 8 * 25);
    assert_eq!(server.connections(), 1);
}

#[test]
fn test_with_runs_sequence_under_one_lock() {
    let server = MockServer::echo();
    let shared = SharedClient::new(server.config());

    let (first, second) = shared.with(|client| {
        let first = client.stop().unwrap();
        let second = client.start().unwrap();
        (first, second)
    });

    assert_eq!(first, "stop");
    assert_eq!(second, "start");
    assert_eq!(server.requests(), vec!["stop".to_string(), "start".to_string()]);
}

#[test]
fn test_shared_disconnect_reconnects_on_next_use() {
    let server = MockServer::echo();
    let shared = SharedClient::new(server.config());

    shared.execute("status").unwrap();
    shared.disconnect();
    assert!(!shared.with(|client| client.is_connected()));

    shared.execute("status").unwrap();
    assert_eq!(server.connections(), 2);
}
