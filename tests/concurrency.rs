use std::thread;
use voicemock::Mode;

mod utils;

/// Cross-request isolation: many simultaneous clients each get an intact
/// copy of the configured canned response, never a truncated or interleaved
/// one.
#[test]
fn concurrent_clients_all_receive_the_configured_response() {
    let server = utils::start(Mode::TooManyRequests);
    let addr = server.addr();

    let clients: Vec<_> = (0..50)
        .map(|i| {
            thread::spawn(move || utils::send(addr, "GET", &format!("/client/{}", i)))
        })
        .collect();

    for client in clients {
        let (status, body) = client.join().unwrap();

        assert_eq!(status, 500);
        assert_eq!(body, b"error: 429");
    }

    assert_eq!(server.requests_received(), 50);
    assert_eq!(server.requests().len(), 50);
}
