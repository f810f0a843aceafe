#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread::JoinHandle;

use prodshot_core::client::{parse_response, GenerationClient, GenerationOutcome};
use prodshot_core::error::Result;
use prodshot_core::payload::ImagePayload;

/// Smallest valid PNG signature plus a few trailing bytes; enough for sniffing.
pub const PNG_BYTES: [u8; 16] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

/// Base64 of `PNG_BYTES`.
pub const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUg==";

pub fn sample_original() -> ImagePayload {
    ImagePayload::new(PNG_BYTES.to_vec(), "image/png", "mug.png")
}

/// A `generateContent` body with the given parts JSON.
pub fn response_with_parts(parts: &str) -> String {
    format!(r#"{{"candidates": [{{"content": {{"role": "model", "parts": {parts}}}, "finishReason": "STOP"}}]}}"#)
}

pub fn image_response(media_type: &str, data: &str) -> String {
    response_with_parts(&format!(
        r#"[{{"inlineData": {{"mimeType": "{media_type}", "data": "{data}"}}}}]"#
    ))
}

pub fn text_only_response(text: &str) -> String {
    response_with_parts(&format!(r#"[{{"text": "{text}"}}]"#))
}

/// Client that answers from a canned response body without touching the network.
pub struct CannedClient {
    body: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl CannedClient {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl GenerationClient for CannedClient {
    fn generate(&self, _image: &ImagePayload, prompt: &str) -> Result<GenerationOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(parse_response(&self.body)?)
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// Write `bytes` to `name` inside a fresh temp dir. Keep the dir alive while the file is used.
pub fn write_temp_file(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write temp file");
    (dir, path)
}

/// One-shot HTTP server on localhost that answers a single request with a
/// fixed status and body, then hands back what it received.
pub struct StubServer {
    pub endpoint: String,
    handle: JoinHandle<RecordedRequest>,
}

#[derive(Debug)]
pub struct RecordedRequest {
    /// Request line, e.g. `POST /v1beta/models/m:generateContent HTTP/1.1`.
    pub request_line: String,
    /// Header lines, names lowercased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl StubServer {
    pub fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
                }
            }

            let len = headers
                .iter()
                .find(|(n, _)| n == "content-length")
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(0);
            let mut raw = vec![0u8; len];
            reader.read_exact(&mut raw).expect("read body");

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
            stream.flush().expect("flush response");

            RecordedRequest {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: String::from_utf8_lossy(&raw).into_owned(),
            }
        });

        Self {
            endpoint: format!("http://{addr}/v1beta"),
            handle,
        }
    }

    /// Wait for the single request and return it.
    pub fn received(self) -> RecordedRequest {
        self.handle.join().expect("stub server thread")
    }
}

/// An endpoint on localhost where nothing is listening.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}/v1beta")
}
