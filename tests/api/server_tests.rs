//! Server Lifecycle Tests
//!
//! Run the real listener on an ephemeral port and talk plain HTTP/1.1 to it.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use chat_api::config::ServerSettings;
use chat_api::startup::Application;

use crate::common::{test_state, InMemoryStore};

fn server_settings() -> ServerSettings {
    ServerSettings {
        host: "127.0.0.1".into(),
        port: 0,
        shutdown_timeout_secs: 2,
    }
}

async fn raw_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_server_serves_requests_and_stops_on_signal() {
    let store = InMemoryStore::default();
    let app = Application::with_state(test_state(&store), &server_settings())
        .await
        .unwrap();
    let addr = app.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(app.run_until(async move {
        let _ = stop_rx.await;
    }));

    let response = raw_request(
        addr,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("OK"), "{response}");

    let body = r#"{"title":"Over TCP"}"#;
    let request = format!(
        "POST /chats HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let response = raw_request(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 201"), "{response}");
    assert_eq!(store.chat_count(), 1);

    stop_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop in time")
        .unwrap()
        .unwrap();

    assert!(TcpStream::connect(addr).await.is_err());
}
