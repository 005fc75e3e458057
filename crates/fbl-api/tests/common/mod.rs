//! Local stub of the feedback API built on `tiny_http`.
//!
//! The stub answers a fixed script of responses in order and records every
//! request it sees. `tiny_http::Server::recv` blocks, so the server runs on its
//! own thread and the recording is collected when the thread is joined.

#![allow(dead_code)]

use std::io::Read;
use std::thread::JoinHandle;

use fbl_config::ApiConfig;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct StubApi {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl StubApi {
    /// Start a stub that answers `script` (status, body) in order, then stops.
    pub fn start(script: Vec<(u16, &'static str)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("stub should bind");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("stub should have a TCP port");

        let handle = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in script {
                let Ok(mut request) = server.recv() else {
                    break;
                };
                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                seen.push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.as_str().to_string(), h.value.as_str().to_string()))
                        .collect(),
                    body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
                });
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .expect("static header is valid"),
                    );
                let _ = request.respond(response);
            }
            seen
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            handle,
        }
    }

    /// Wait for the scripted exchange to finish and return what was received.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("stub thread should not panic")
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            authenticate_header: "stub-secret".into(),
            referer: "edit.example.gov".into(),
            per_page: 20,
            timeout_secs: Some(5),
        }
    }
}

/// An `ApiConfig` pointing at a port nothing listens on.
pub fn unreachable_config() -> ApiConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    ApiConfig {
        base_url: format!("http://127.0.0.1:{port}/"),
        authenticate_header: "stub-secret".into(),
        per_page: 12,
        timeout_secs: Some(2),
        ..ApiConfig::default()
    }
}
