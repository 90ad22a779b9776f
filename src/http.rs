// src/http.rs

//! Lower-level HTTP transport for talking to snapd over its UNIX socket.
//!
//! snapd's REST API is only reachable through a UNIX domain socket, which
//! the common HTTP client stacks do not speak. The framing is simple enough
//! to do by hand: each call opens a fresh connection, writes an HTTP/1.1
//! request line plus headers (and an optional body), and parses the
//! response off the same stream. No pooling, no keep-alive, no retries.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, trace};
use url::form_urlencoded;

use crate::types::{Payload, RequestBody, ResponseKind, SnapdResponse};
use crate::{ApiError, Error, Result};

/// Virtual base URL snapd expects in the request line.
pub const BASE_URL: &str = "http://localhost/v2";

/// Default path of the snapd socket.
pub const SNAPD_SOCKET: &str = "/run/snapd.socket";

/// A client for snapd's REST API.
///
/// Each call is one full connect/send/receive/close cycle; the socket is
/// owned by the call and dropped on every exit path. The client itself
/// holds no connection state and is cheap to clone.
///
/// By default there is no timeout: a hung daemon blocks the caller
/// indefinitely, matching snapd's own CLI behavior. Use
/// [`SnapdClient::with_timeout`] to bound individual socket operations.
#[derive(Debug, Clone)]
pub struct SnapdClient {
    socket_path: PathBuf,
    timeout: Option<Duration>,
}

impl SnapdClient {
    /// Create a client for the default socket at [`SNAPD_SOCKET`].
    pub fn new() -> Self {
        Self {
            socket_path: PathBuf::from(SNAPD_SOCKET),
            timeout: None,
        }
    }

    /// Create a client for a custom socket path.
    pub fn with_socket_path<P: AsRef<Path>>(socket_path: P) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
            timeout: None,
        }
    }

    /// Set a read/write timeout applied to every socket operation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Path of the socket this client connects to.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Perform a GET request of `path`.
    pub fn get(&self, path: &str) -> Result<SnapdResponse> {
        let response = self.request("GET", path, &[], None)?;
        interpret_response(response)
    }

    /// Perform a GET request of `path` with url-encoded query parameters.
    pub fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<SnapdResponse> {
        let response = self.request("GET", path, query, None)?;
        interpret_response(response)
    }

    /// Perform a POST request of `path` with `body`.
    pub fn post(&self, path: &str, body: RequestBody) -> Result<SnapdResponse> {
        let response = self.request("POST", path, &[], Some(&body))?;
        interpret_response(response)
    }

    /// Perform a PUT request of `path` with `body`.
    pub fn put(&self, path: &str, body: RequestBody) -> Result<SnapdResponse> {
        let response = self.request("PUT", path, &[], Some(&body))?;
        interpret_response(response)
    }

    /// One HTTP exchange: connect, frame, send, parse.
    fn request(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, String)],
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse> {
        let mut stream = UnixStream::connect(&self.socket_path)?;
        if let Some(timeout) = self.timeout {
            stream.set_read_timeout(Some(timeout))?;
            stream.set_write_timeout(Some(timeout))?;
        }

        let mut url = format!("{BASE_URL}{path}");
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        debug!(method, url = %url, "request to snapd");

        let mut request = Vec::new();
        request.extend_from_slice(
            format!("{method} {url} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n")
                .as_bytes(),
        );
        match body {
            Some(body) => {
                let serialized = body.serialized()?;
                request.extend_from_slice(
                    format!(
                        "Content-Type: {}\r\nContent-Length: {}\r\n\r\n",
                        body.content_type(),
                        serialized.len()
                    )
                    .as_bytes(),
                );
                request.extend_from_slice(&serialized);
            }
            None => request.extend_from_slice(b"\r\n"),
        }

        stream.write_all(&request)?;

        let response = read_response(&mut BufReader::new(stream))?;
        trace!(
            status = response.status_code,
            body_len = response.body.len(),
            "response from snapd"
        );
        Ok(response)
    }
}

impl Default for SnapdClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw HTTP response, before interpretation.
#[derive(Debug)]
struct HttpResponse {
    status_code: u16,
    reason: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Look up a header by lowercase name.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Convert a raw response into the snapd envelope or an API error.
fn interpret_response(response: HttpResponse) -> Result<SnapdResponse> {
    if response.status_code >= 400 {
        return Err(Error::Api(ApiError {
            status_code: response.status_code,
            body: response.body,
        }));
    }

    let is_json = response
        .header("content-type")
        .is_some_and(|value| value.starts_with("application/json"));

    if is_json {
        Ok(serde_json::from_slice(&response.body)?)
    } else {
        // Other content types, like application/x.ubuntu.assertion: keep the
        // raw bytes and synthesize the envelope from the status line.
        let kind = if response.status_code == 202 {
            ResponseKind::Async
        } else {
            ResponseKind::Sync
        };
        Ok(SnapdResponse {
            kind,
            status_code: response.status_code,
            status: response.reason,
            result: Payload::Raw(response.body),
            sources: None,
            change: None,
            warning_timestamp: None,
            warning_count: None,
        })
    }
}

/// Parse an HTTP/1.1 response: status line, headers, then the body framed
/// by Content-Length, chunked transfer coding, or connection close.
fn read_response<R: BufRead>(reader: &mut R) -> Result<HttpResponse> {
    let status_line = read_line(reader)?;
    let mut parts = status_line.splitn(3, ' ');
    let version = parts.next().unwrap_or_default();
    if !version.starts_with("HTTP/1.") {
        return Err(Error::Protocol(format!("bad status line: {status_line:?}")));
    }
    let status_code: u16 = parts
        .next()
        .and_then(|code| code.parse().ok())
        .ok_or_else(|| Error::Protocol(format!("bad status line: {status_line:?}")))?;
    let reason = parts.next().unwrap_or("").to_string();

    let mut headers = Vec::new();
    loop {
        let line = read_line(reader)?;
        if line.is_empty() {
            break;
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::Protocol(format!("bad header line: {line:?}")))?;
        headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
    }

    let mut response = HttpResponse {
        status_code,
        reason,
        headers,
        body: Vec::new(),
    };

    response.body = if let Some(length) = response.header("content-length") {
        let length: usize = length
            .parse()
            .map_err(|_| Error::Protocol(format!("bad content-length: {length:?}")))?;
        let mut body = vec![0; length];
        reader.read_exact(&mut body)?;
        body
    } else if response
        .header("transfer-encoding")
        .is_some_and(|value| value.eq_ignore_ascii_case("chunked"))
    {
        read_chunked(reader)?
    } else {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        body
    };

    Ok(response)
}

/// Decode a chunked transfer-coded body.
fn read_chunked<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        let size_line = read_line(reader)?;
        let size_field = size_line.split(';').next().unwrap_or("").trim();
        let size = usize::from_str_radix(size_field, 16)
            .map_err(|_| Error::Protocol(format!("bad chunk size: {size_line:?}")))?;
        if size == 0 {
            break;
        }
        let mut chunk = vec![0; size];
        reader.read_exact(&mut chunk)?;
        body.extend_from_slice(&chunk);
        let mut crlf = [0u8; 2];
        reader.read_exact(&mut crlf)?;
    }
    // skip trailers up to the final blank line
    loop {
        if read_line(reader)?.is_empty() {
            break;
        }
    }
    Ok(body)
}

/// Read one CRLF-terminated line, without the terminator.
fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Protocol("unexpected end of response".to_string()));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(raw: &[u8]) -> Result<HttpResponse> {
        read_response(&mut Cursor::new(raw.to_vec()))
    }

    #[test]
    fn parses_content_length_body() {
        let response = parse(
            b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 4\r\n\r\nnull",
        )
        .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.reason, "OK");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.body, b"null");
    }

    #[test]
    fn parses_chunked_body() {
        let response = parse(
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n",
        )
        .unwrap();
        assert_eq!(response.body, b"hello world");
    }

    #[test]
    fn parses_body_to_eof_without_framing_headers() {
        let response = parse(b"HTTP/1.1 200 OK\r\n\r\nrest of stream").unwrap();
        assert_eq!(response.body, b"rest of stream");
    }

    #[test]
    fn rejects_garbage_status_line() {
        let err = parse(b"not-http\r\n\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn rejects_truncated_response() {
        let err = parse(b"").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn error_status_becomes_api_error_with_body() {
        let response = parse(
            b"HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 16\r\n\r\n{\"type\":\"error\"}",
        )
        .unwrap();

        match interpret_response(response) {
            Err(Error::Api(err)) => {
                assert_eq!(err.status_code, 404);
                assert_eq!(err.json().unwrap()["type"], "error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn json_response_parses_envelope() {
        let response = parse(
            b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 67\r\n\r\n{\"type\":\"sync\",\"status-code\":200,\"status\":\"OK\",\"result\":{\"id\":\"1\"}}",
        )
        .unwrap();

        let parsed = interpret_response(response).unwrap();
        assert_eq!(parsed.kind, ResponseKind::Sync);
        assert_eq!(parsed.result.as_json().unwrap()["id"], "1");
    }

    #[test]
    fn non_json_response_keeps_raw_bytes() {
        let response = parse(
            b"HTTP/1.1 200 OK\r\nContent-Type: application/x.ubuntu.assertion\r\nContent-Length: 35\r\n\r\nassertion-header: value\n\nsignature\n",
        )
        .unwrap();

        let parsed = interpret_response(response).unwrap();
        assert_eq!(parsed.kind, ResponseKind::Sync);
        assert_eq!(parsed.status_code, 200);
        assert_eq!(parsed.status, "OK");
        assert_eq!(
            parsed.result.as_raw(),
            Some(&b"assertion-header: value\n\nsignature\n"[..])
        );
    }

    #[test]
    fn non_json_202_is_async() {
        let response =
            parse(b"HTTP/1.1 202 Accepted\r\nContent-Length: 2\r\n\r\nok").unwrap();
        let parsed = interpret_response(response).unwrap();
        assert_eq!(parsed.kind, ResponseKind::Async);
    }
}
