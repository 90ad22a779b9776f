// tests/common/mod.rs

//! A scripted mock snapd: listens on a UNIX socket in a temp directory,
//! serves one canned response per connection, and records the raw bytes of
//! every request it receives.

use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, Once};

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use snapd_http::SnapdClient;

/// Install a tracing subscriber honoring `RUST_LOG`, once per test binary,
/// so transport debug logs are visible when a test needs them.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A canned response for the mock daemon to serve.
pub struct MockResponse {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, reason: &'static str, body: serde_json::Value) -> Self {
        Self {
            status,
            reason,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn raw(
        status: u16,
        reason: &'static str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> Self {
        Self {
            status,
            reason,
            content_type,
            body,
        }
    }
}

pub struct MockSnapd {
    // holds the socket's directory alive for the test's duration
    _dir: TempDir,
    socket_path: PathBuf,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockSnapd {
    /// Start a mock daemon that serves `responses` in order, one
    /// connection each, then exits.
    pub fn start(responses: Vec<MockResponse>) -> Self {
        init_tracing();

        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("snapd.socket");
        let listener = UnixListener::bind(&socket_path).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        std::thread::spawn(move || {
            for response in responses {
                let (mut conn, _) = listener.accept().unwrap();
                let request = read_request(&mut conn);
                recorded.lock().unwrap().push(request);

                let header = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
                    response.status,
                    response.reason,
                    response.content_type,
                    response.body.len()
                );
                conn.write_all(header.as_bytes()).unwrap();
                conn.write_all(&response.body).unwrap();
            }
        });

        Self {
            _dir: dir,
            socket_path,
            requests,
        }
    }

    /// A client wired to this mock's socket.
    pub fn client(&self) -> SnapdClient {
        SnapdClient::with_socket_path(&self.socket_path)
    }

    /// Raw request bytes received so far. A request is recorded before its
    /// response is sent, so everything the client has completed is here.
    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, as lossy UTF-8.
    pub fn last_request(&self) -> String {
        let requests = self.requests();
        String::from_utf8_lossy(requests.last().expect("no request received")).into_owned()
    }
}

/// Read exactly one HTTP request: headers, then Content-Length body bytes.
/// Reading to EOF would deadlock, since the client keeps its end open while
/// waiting for the response.
fn read_request(conn: &mut UnixStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        let n = conn.read(&mut chunk).unwrap();
        if n == 0 {
            return buf;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = conn.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    buf
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}
