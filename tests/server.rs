//! Server lifecycle tests over a real socket.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::{oneshot, Notify},
};

use url_shortener::{build_router, config::AppConfig, server, AppState};

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect failed");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_serves_until_signal_then_stops() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(AppConfig::default()));
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(
        listener,
        build_router(state),
        Duration::from_secs(5),
        async move {
            let _ = stop_rx.await;
        },
    ));

    let body = r#"{"destination":"https://example.com/"}"#;
    let response = raw_request(
        addr,
        &format!(
            "PUT /shortURL HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""short_url":"http://localhost:9090/"#));

    let response = raw_request(
        addr,
        "GET /nosuch HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");

    stop_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();

    assert!(TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn test_drain_timeout_bounds_shutdown() {
    let started = Arc::new(Notify::new());
    let router = {
        let started = Arc::clone(&started);
        Router::new().route(
            "/slow",
            get(move || {
                let started = Arc::clone(&started);
                async move {
                    started.notify_one();
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    "done"
                }
            }),
        )
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(
        listener,
        router,
        Duration::from_millis(100),
        async move {
            let _ = stop_rx.await;
        },
    ));

    let _client = tokio::spawn(raw_request(
        addr,
        "GET /slow HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    ));
    started.notified().await;

    stop_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("drain timeout was not enforced")
        .unwrap()
        .unwrap();
}
