//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Start a mock HTTP backend returning a fixed status, on an ephemeral port.
#[allow(dead_code)]
pub async fn start_http_backend(status: u16, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let status_text = match status {
                            200 => "200 OK",
                            301 => "301 Moved Permanently",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock SMTP server on an ephemeral port.
///
/// Sends a banner, reads the client's EHLO plus the trailing blank line,
/// answers with `reply`, then drains whatever follows and closes. The
/// returned counter increments once per completed exchange.
#[allow(dead_code)]
pub async fn start_smtp_server(reply: &'static str) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let exchanges = Arc::new(AtomicU32::new(0));
    let counter = exchanges.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        let (reader, mut writer) = socket.into_split();
                        let mut lines = BufReader::new(reader).lines();

                        let _ = writer.write_all(b"220 mock.example.com ESMTP\n").await;
                        let _ = writer.flush().await;

                        // EHLO line plus the blank line following it.
                        let _ = lines.next_line().await;
                        let _ = lines.next_line().await;

                        let _ = writer.write_all(format!("{reply}\n").as_bytes()).await;
                        let _ = writer.flush().await;
                        counter.fetch_add(1, Ordering::SeqCst);

                        // QUIT, if the client sends one.
                        let _ = lines.next_line().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, exchanges)
}

/// Start a plain TCP listener that accepts and immediately closes, on an
/// ephemeral port. Useful as a target that can never complete a handshake.
#[allow(dead_code)]
pub async fn start_closing_listener() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => drop(socket),
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address on which nothing is listening.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Poll `predicate` until it returns true or the deadline passes.
#[allow(dead_code)]
pub async fn wait_until<F, Fut>(deadline: Duration, mut predicate: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = tokio::time::Instant::now();
    while start.elapsed() < deadline {
        if predicate().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    false
}
