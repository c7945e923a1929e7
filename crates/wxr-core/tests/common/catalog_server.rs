//! Minimal HTTP/1.1 catalog server for integration tests.
//!
//! Serves `GET /sites/<id>` from a fixed map of JSON bodies; unknown ids get
//! 404. Every request is counted so tests can assert how often the catalog
//! was hit.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct CatalogServer {
    /// URL template with an `{id}` placeholder, e.g. "http://127.0.0.1:1234/sites/{id}".
    pub url_template: String,
    hits: Arc<AtomicUsize>,
}

impl CatalogServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Bodies are served verbatim with
/// status 200. The server runs until the process exits.
pub fn start(bodies: HashMap<u64, String>) -> CatalogServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let bodies = Arc::new(bodies);
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let bodies = Arc::clone(&bodies);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &bodies, &hits));
        }
    });
    CatalogServer {
        url_template: format!("http://127.0.0.1:{}/sites/{{id}}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, bodies: &HashMap<u64, String>, hits: &AtomicUsize) {
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
    hits.fetch_add(1, Ordering::SeqCst);

    let body = parse_site_id(request).and_then(|id| bodies.get(&id));
    let response = match body {
        Some(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
}

/// Id from a request line like "GET /sites/42 HTTP/1.1".
fn parse_site_id(request: &str) -> Option<u64> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    let path = parts.next()?;
    path.strip_prefix("/sites/")?.parse().ok()
}
