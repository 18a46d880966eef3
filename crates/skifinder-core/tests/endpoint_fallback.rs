//! Endpoint-fallback integration tests.
//!
//! Runs the real blocking client against a canned local HTTP stub: each test
//! binds a loopback listener, serves a fixed sequence of responses and
//! records the request lines it saw, so the candidate-endpoint order and
//! short-circuit behavior are observable.

use skifinder_core::history::RecentSearches;
use skifinder_core::{Config, ConnectivityStatus, FinderError, Phase, SearchClient, Session};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

struct Canned {
    status: u16,
    reason: &'static str,
    body: &'static str,
}

const VERMONT_BODY: &str = r#"[
  {"name": "Killington Resort", "address": "Killington, VT", "rating": 4.6, "distance": 5.2, "place_id": "id-1"},
  {"name": "Stowe Mountain Resort", "address": "Stowe, VT", "rating": 4.8, "distance": 8.1, "place_id": "id-2"},
  {"name": "Mount Snow", "address": "West Dover, VT", "rating": 4.5, "distance": 12.7, "place_id": "id-3"}
]"#;

/// Serve `responses` in order on a fresh loopback listener; returns the base
/// URL and a handle yielding the request lines ("METHOD /path") received.
fn serve(responses: Vec<Canned>) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for canned in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            seen.push(read_request(&mut stream));
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                canned.status,
                canned.reason,
                canned.body.len(),
                canned.body
            );
            stream.write_all(response.as_bytes()).expect("write response");
        }
        seen
    });
    (base, handle)
}

/// Read one HTTP request (headers + declared body) and return its request
/// line, trimmed to "METHOD /path".
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut byte = [0u8; 1];
    while !buf.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) => buf.push(byte[0]),
        }
    }
    let head = String::from_utf8_lossy(&buf).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            line.to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
        })
        .unwrap_or(0);
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        let _ = stream.read_exact(&mut body);
    }

    head.lines()
        .next()
        .unwrap_or_default()
        .split(' ')
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

fn client_for(base: &str) -> SearchClient {
    let config = Config::default().with_base_url(base);
    SearchClient::new(&config).expect("build client")
}

/// A base URL on which nothing listens.
fn dead_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

#[test]
fn search_falls_back_to_legacy_endpoint_on_500() {
    let (base, handle) = serve(vec![
        Canned {
            status: 500,
            reason: "Internal Server Error",
            body: r#"{"error": "primary exploded"}"#,
        },
        Canned {
            status: 200,
            reason: "OK",
            body: VERMONT_BODY,
        },
    ]);

    let results = client_for(&base).search("vermont").expect("search succeeds");
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].name, "Stowe Mountain Resort");

    let seen = handle.join().unwrap();
    assert_eq!(seen, ["POST /api/search", "POST /search"]);
}

#[test]
fn search_short_circuits_on_primary_success() {
    let (base, handle) = serve(vec![Canned {
        status: 200,
        reason: "OK",
        body: VERMONT_BODY,
    }]);

    let results = client_for(&base).search("vermont").expect("search succeeds");
    assert_eq!(results.len(), 3);

    let seen = handle.join().unwrap();
    assert_eq!(seen, ["POST /api/search"]);
}

#[test]
fn last_candidate_error_text_is_surfaced() {
    let (base, handle) = serve(vec![
        Canned {
            status: 500,
            reason: "Internal Server Error",
            body: r#"{"error": "primary exploded"}"#,
        },
        Canned {
            status: 404,
            reason: "Not Found",
            body: r#"{"error": "No ski resorts found for the given query"}"#,
        },
    ]);

    let err = client_for(&base).search("atlantis").unwrap_err();
    match err {
        FinderError::Backend { status, ref message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "No ski resorts found for the given query");
        }
        ref other => panic!("expected Backend error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "No ski resorts found for the given query");

    handle.join().unwrap();
}

#[test]
fn malformed_success_body_falls_through_to_legacy() {
    let (base, handle) = serve(vec![
        Canned {
            status: 200,
            reason: "OK",
            body: "<html>definitely not json</html>",
        },
        Canned {
            status: 200,
            reason: "OK",
            body: VERMONT_BODY,
        },
    ]);

    let results = client_for(&base).search("vermont").expect("search succeeds");
    assert_eq!(results.len(), 3);

    let seen = handle.join().unwrap();
    assert_eq!(seen, ["POST /api/search", "POST /search"]);
}

#[test]
fn probe_falls_back_to_legacy_endpoint() {
    let (base, handle) = serve(vec![
        Canned {
            status: 404,
            reason: "Not Found",
            body: "{}",
        },
        Canned {
            status: 200,
            reason: "OK",
            body: r#"{"status": "ok", "message": "Backend is running"}"#,
        },
    ]);

    assert_eq!(client_for(&base).probe(), ConnectivityStatus::Connected);

    let seen = handle.join().unwrap();
    assert_eq!(seen, ["GET /api/test", "GET /test"]);
}

#[test]
fn probe_reports_error_when_nothing_listens() {
    assert_eq!(
        client_for(&dead_base()).probe(),
        ConnectivityStatus::Error
    );
}

#[test]
fn unreachable_backend_surfaces_unreachable() {
    let err = client_for(&dead_base()).search("vermont").unwrap_err();
    assert!(matches!(err, FinderError::Unreachable { .. }));
    assert_eq!(
        err.user_message(),
        "Failed to fetch ski resorts. Please try again later."
    );
}

#[test]
fn session_dispatch_end_to_end() {
    let (base, handle) = serve(vec![
        Canned {
            status: 500,
            reason: "Internal Server Error",
            body: r#"{"error": "primary exploded"}"#,
        },
        Canned {
            status: 200,
            reason: "OK",
            body: VERMONT_BODY,
        },
    ]);

    let client = client_for(&base);
    let mut session = Session::new(RecentSearches::default());
    session.run_search(&client, "vermont").unwrap();

    assert_eq!(*session.phase(), Phase::Populated);
    assert_eq!(session.raw_results().len(), 3);
    assert_eq!(session.history().entries(), ["vermont"]);
    let view = session.displayed();
    assert_eq!(view.visible[0].name, "Stowe Mountain Resort");

    handle.join().unwrap();
}

#[test]
fn failed_dispatch_leaves_session_errored_and_not_loading() {
    let client = client_for(&dead_base());
    let mut session = Session::new(RecentSearches::default());
    session.run_search(&client, "vermont").unwrap();

    assert_eq!(*session.phase(), Phase::Errored);
    assert!(!session.is_loading());
    assert!(session.raw_results().is_empty());
    assert_eq!(
        session.error(),
        Some("Failed to fetch ski resorts. Please try again later.")
    );
}
