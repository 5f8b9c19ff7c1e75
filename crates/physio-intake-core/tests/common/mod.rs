//! Shared in-process backend double for integration tests.

use std::io::Read;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use tiny_http::{Header, Response, Server};

/// A request the test backend saw.
#[allow(dead_code)]
pub struct SeenRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// Spawn a backend that answers each request with the next canned reply
/// (the last one repeats). Returns the base URL and a receiver of
/// observed requests. The serving thread lives for the rest of the test
/// process.
pub fn spawn_backend(replies: Vec<(u16, &str)>) -> (String, Receiver<SeenRequest>) {
    let server = Server::http("127.0.0.1:0").expect("bind test backend");
    let addr = server.server_addr().to_ip().expect("tcp listener");
    let replies: Vec<(u16, String)> = replies
        .into_iter()
        .map(|(status, body)| (status, body.to_string()))
        .collect();
    let (tx, rx) = channel();

    thread::spawn(move || {
        let mut pending = replies.into_iter();
        let mut current = pending.next().expect("at least one canned reply");

        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let _ = tx.send(SeenRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body,
            });

            let (status, payload) = current.clone();
            let response = Response::from_string(payload)
                .with_status_code(status)
                .with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                );
            let _ = request.respond(response);

            if let Some(next) = pending.next() {
                current = next;
            }
        }
    });

    (format!("http://{addr}"), rx)
}
