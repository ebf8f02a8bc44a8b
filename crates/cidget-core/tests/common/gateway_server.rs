//! Minimal HTTP/1.1 server that plays a content gateway for integration
//! tests.
//!
//! Serves fixed bodies under `/ipfs/<cid>` from an in-memory map; anything
//! else is 404. Can be forced to answer every request with a fixed error
//! status.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayServerOptions {
    /// If set, every request is answered with this status and a short body.
    pub force_status: Option<u32>,
}

/// Starts a server in a background thread serving `content` (cid → body).
/// Returns the base URL (e.g. "http://127.0.0.1:12345"). The server runs
/// until the process exits.
pub fn start(content: HashMap<String, Vec<u8>>) -> String {
    start_with_options(content, GatewayServerOptions::default())
}

/// Like `start` but allows forcing error responses.
pub fn start_with_options(
    content: HashMap<String, Vec<u8>>,
    opts: GatewayServerOptions,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let content = Arc::new(content);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let content = Arc::clone(&content);
            thread::spawn(move || handle(stream, &content, opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, content: &HashMap<String, Vec<u8>>, opts: GatewayServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);

    if let Some(code) = opts.force_status {
        respond(&mut stream, code, b"forced error\n");
        return;
    }
    if !method.eq_ignore_ascii_case("GET") {
        respond(&mut stream, 405, b"");
        return;
    }
    let body = path
        .strip_prefix("/ipfs/")
        .and_then(|cid| content.get(cid));
    match body {
        Some(body) => respond(&mut stream, 200, body),
        None => respond(&mut stream, 404, b"no link named under that path\n"),
    }
}

fn respond(stream: &mut TcpStream, code: u32, body: &[u8]) {
    let reason = match code {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Error",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
