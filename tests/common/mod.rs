//! Minimal one-shot HTTP responder shared by the integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Canned reply for a single request.
pub enum Reply {
    /// Status line code and body, sent with `Content-Type: application/json`.
    Json(u16, String),
    /// Status and raw body bytes, sent with a matching `Content-Length`.
    Raw(u16, Vec<u8>),
    /// Status and a `Content-Length` header claiming this many bytes; only a
    /// short body follows before the connection closes.
    Declared(u16, u64),
    /// Status and this many body bytes with `Transfer-Encoding: chunked`.
    Chunked(u16, usize),
    /// Accept the connection and stay silent for the given time.
    Stall(Duration),
}

/// Serve `reply` to the first connection on a loopback port and return the
/// URL to request. The server thread exits after one connection.
pub fn serve_once(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request_head(&mut stream);
            match reply {
                Reply::Json(status, body) => {
                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason(status),
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
                Reply::Raw(status, body) => {
                    let head = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        status,
                        reason(status),
                        body.len()
                    );
                    let _ = stream.write_all(head.as_bytes());
                    let _ = stream.write_all(&body);
                    let _ = stream.flush();
                }
                Reply::Declared(status, length) => {
                    let head = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{{}}",
                        status,
                        reason(status),
                        length
                    );
                    let _ = stream.write_all(head.as_bytes());
                    let _ = stream.flush();
                }
                Reply::Chunked(status, total) => write_chunked(&mut stream, status, total),
                Reply::Stall(duration) => thread::sleep(duration),
            }
        }
    });

    format!("http://{}/ipranges/googlebot.json", addr)
}

/// Stream `total` filler bytes in 64 KiB chunks. Stops quietly once the
/// client hangs up.
fn write_chunked(stream: &mut TcpStream, status: u16, total: usize) {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n",
        status,
        reason(status)
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }

    let chunk = vec![b' '; 64 * 1024];
    let mut sent = 0;
    while sent < total {
        let len = chunk.len().min(total - sent);
        let frame = format!("{:x}\r\n", len);
        if stream.write_all(frame.as_bytes()).is_err()
            || stream.write_all(&chunk[..len]).is_err()
            || stream.write_all(b"\r\n").is_err()
        {
            return;
        }
        sent += len;
    }
    let _ = stream.write_all(b"0\r\n\r\n");
    let _ = stream.flush();
}

fn read_request_head(stream: &mut TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Payload from the end-to-end ordering scenario.
pub const SCENARIO_PAYLOAD: &str = r#"{"prefixes":[{"ipv4Prefix":"192.0.2.0/24"},{"ipv6Prefix":"2001:db8::/32"},{"ipv4Prefix":"198.51.100.0/24"}]}"#;
