//! Single-shot HTTP server used by the client tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The request a test server received
#[derive(Debug)]
pub struct CapturedRequest {
    /// Request line and headers
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }

    pub fn has_header(&self, name: &str, expected: &str) -> bool {
        self.header(name) == Some(expected)
    }
}

/// Accept one connection, answer it with `reply_body` as JSON, and return
/// the base URL plus a handle resolving to the captured request
pub async fn serve_once(reply_body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let reply_body = reply_body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let captured = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if let Some(captured) = parse_request(&buf) {
                break captured;
            }
            assert!(n > 0, "connection closed before full request");
        };

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            reply_body.len(),
            reply_body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        captured
    });

    (format!("http://{addr}"), handle)
}

fn parse_request(buf: &[u8]) -> Option<CapturedRequest> {
    let text = String::from_utf8_lossy(buf);
    let (head, rest) = text.split_once("\r\n\r\n")?;
    let captured = CapturedRequest {
        head: head.to_string(),
        body: String::new(),
    };
    let length: usize = captured
        .header("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    if rest.len() < length {
        return None;
    }
    Some(CapturedRequest {
        body: rest[..length].to_string(),
        ..captured
    })
}
