//! Integration tests for the fetch and submission paths.
//!
//! Canned HTTP responses are served from a loopback listener so the client
//! and controller are exercised end to end without a real catalog backend.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use marquee_api::{CatalogClient, FetchController};
use marquee_core::MovieDraft;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serve one canned JSON response on a fresh loopback port.
///
/// Returns the endpoint URL and a receiver yielding the raw request that
/// arrived.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        tx.send(request).ok();
    });

    (format!("http://{}/", addr), rx)
}

/// Read one HTTP request (head plus Content-Length body) off the socket.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0_u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        if let Some(head_end) = find(&data, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..head_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[tokio::test]
async fn test_fetch_maps_episode_payload() {
    let (endpoint, request) = serve_once(
        "200 OK",
        r#"{"results": [{"episode_id": 4, "title": "A New Hope", "opening_crawl": "It is a period...", "release_date": "1977-05-25"}]}"#,
    )
    .await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let movies = client.fetch_movies().await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id.as_str(), "4");
    assert_eq!(movies[0].title, "A New Hope");
    assert_eq!(movies[0].opening_text, "It is a period...");
    assert_eq!(movies[0].release_date, "1977-05-25");

    let raw = request.await.unwrap();
    assert!(raw.starts_with("GET / HTTP/1.1"));
}

#[tokio::test]
async fn test_fetch_maps_keyed_payload() {
    let (endpoint, _request) = serve_once(
        "200 OK",
        r#"{"-k1": {"title": "X", "openingText": "Y", "releaseDate": "2020-01-01"}}"#,
    )
    .await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let movies = client.fetch_movies().await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id.as_str(), "-k1");
    assert_eq!(movies[0].title, "X");
}

#[tokio::test]
async fn test_fetch_non_success_status_collapses_to_generic_message() {
    let (endpoint, _request) = serve_once("500 Internal Server Error", "{}").await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let err = client.fetch_movies().await.unwrap_err();

    assert!(err.is_status());
    assert_eq!(err.to_string(), "Something went wrong...");
}

#[tokio::test]
async fn test_refresh_settles_loaded_and_clears_loading() {
    let (endpoint, _request) = serve_once("200 OK", r#"{"results": []}"#).await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let mut controller = FetchController::new(client);

    let state = controller.refresh().await;
    assert!(!state.is_loading());
    assert!(state.movies().is_empty());
    assert!(state.error().is_none());
}

#[tokio::test]
async fn test_refresh_settles_failed_and_clears_loading() {
    let (endpoint, _request) = serve_once("404 Not Found", "{}").await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let mut controller = FetchController::new(client);

    let state = controller.refresh().await;
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Something went wrong..."));
}

#[tokio::test]
async fn test_submit_sends_exact_json_body_with_json_content_type() {
    let (endpoint, request) = serve_once("201 Created", "{}").await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let draft = MovieDraft::new("X", "Y", "2020-01-01");
    client.submit(&draft).await.unwrap();

    let raw = request.await.unwrap();
    assert!(raw.starts_with("POST / HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"title":"X","openingText":"Y","releaseDate":"2020-01-01"}"#));
}

#[tokio::test]
async fn test_submit_ignores_failure_status() {
    let (endpoint, _request) = serve_once("500 Internal Server Error", "{}").await;

    let client = CatalogClient::new(&endpoint, TIMEOUT).unwrap();
    let draft = MovieDraft::new("X", "Y", "2020-01-01");

    assert!(client.submit(&draft).await.is_ok());
}
