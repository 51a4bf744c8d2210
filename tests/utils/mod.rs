#![allow(dead_code)]

use std::env;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Once;
use voicemock::{Mode, MockTtsServer, ServerConfig};

pub fn logging() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        env::set_var("RUST_BACKTRACE", "1");
        env::set_var("RUST_LOG", "voicemock=debug");
        env_logger::init();
    });
}

/// Start a server on an ephemeral port with the given mode and default
/// timeouts.
pub fn start(mode: Mode) -> MockTtsServer {
    logging();

    MockTtsServer::start(ServerConfig {
        addr: ephemeral_addr(),
        mode,
        ..ServerConfig::default()
    })
    .unwrap()
}

pub fn ephemeral_addr() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

/// Send raw request bytes and return the parsed (status, body) of whatever
/// comes back. The server closes the connection after one response, so the
/// body simply runs to EOF.
pub fn send_raw(addr: SocketAddr, raw: &[u8]) -> (u16, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(raw).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();

    parse_response(&response)
}

/// Issue a bodyless request with the given method and path.
pub fn send(addr: SocketAddr, method: &str, path: &str) -> (u16, Vec<u8>) {
    send_raw(
        addr,
        format!(
            "{} {} HTTP/1.1\r\n\
             host: api.mock.local\r\n\
             connection: close\r\n\
             \r\n",
            method, path
        )
        .as_bytes(),
    )
}

/// Issue a request carrying a body.
pub fn send_with_body(addr: SocketAddr, method: &str, path: &str, body: &[u8]) -> (u16, Vec<u8>) {
    let mut raw = format!(
        "{} {} HTTP/1.1\r\n\
         host: api.mock.local\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n",
        method,
        path,
        body.len()
    )
    .into_bytes();
    raw.extend_from_slice(body);

    send_raw(addr, &raw)
}

fn parse_response(raw: &[u8]) -> (u16, Vec<u8>) {
    let head_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("incomplete response head");

    let head = std::str::from_utf8(&raw[..head_end]).unwrap();
    let status = head
        .lines()
        .next()
        .unwrap()
        .split_whitespace()
        .nth(1)
        .expect("malformed status line")
        .parse()
        .unwrap();

    (status, raw[head_end + 4..].to_vec())
}
