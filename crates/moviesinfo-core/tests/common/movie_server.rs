//! Minimal scripted HTTP/1.1 server for integration tests.
//!
//! Every accepted connection gets the next scripted response (the last one
//! repeats). Request heads are recorded so tests can check what was sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const VALID_MOVIE: &str = r#"{"id":"abc","name":"Dark Knight Rises","year":2012,"cast":["Christian Bale","Tom Hardy"],"releaseDate":"2012-07-20"}"#;

#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub body: String,
    /// Wait this long before answering (simulates a hung backend).
    pub hold: Option<Duration>,
    /// Sent as a `Location` header.
    pub location: Option<String>,
}

impl Scripted {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            hold: None,
            location: None,
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, body)
    }

    pub fn hang(hold: Duration) -> Self {
        Self {
            status: 200,
            body: VALID_MOVIE.to_string(),
            hold: Some(hold),
            location: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::new(302, "")
        }
    }
}

pub struct MovieServer {
    /// e.g. "http://127.0.0.1:12345/v1/movieinfos"
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MovieServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw request heads, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(script: Vec<Scripted>) -> MovieServer {
    assert!(!script.is_empty(), "script needs at least one response");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let script = Arc::new(script);
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    {
        let hits = Arc::clone(&hits);
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let script = Arc::clone(&script);
                let hits = Arc::clone(&hits);
                let requests = Arc::clone(&requests);
                thread::spawn(move || handle(stream, &script, &hits, &requests));
            }
        });
    }
    MovieServer {
        base_url: format!("http://127.0.0.1:{}/v1/movieinfos", port),
        hits,
        requests,
    }
}

/// A URL nothing listens on (connection refused).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1/movieinfos", port)
}

fn handle(
    mut stream: TcpStream,
    script: &[Scripted],
    hits: &AtomicUsize,
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let head = match read_head(&mut stream) {
        Some(h) => h,
        None => return,
    };
    let n = hits.fetch_add(1, Ordering::SeqCst);
    requests.lock().unwrap().push(head);
    let reply = &script[n.min(script.len() - 1)];
    if let Some(hold) = reply.hold {
        thread::sleep(hold);
    }
    let location = match &reply.location {
        Some(l) => format!("Location: {l}\r\n"),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason(reply.status),
        location,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads until the end of the request head (GET has no body).
fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if buf.len() > 16 * 1024 {
            return None;
        }
    }
    String::from_utf8(buf).ok()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
