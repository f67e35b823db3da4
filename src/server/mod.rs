// Server module entry point
// Listener creation and the accept loop

pub mod connection;
pub mod listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

pub use listener::create_reusable_listener;

/// Accept loop: runs until the process is terminated.
///
/// Accept errors are logged and the loop keeps going; a single bad accept
/// must not take the fixture down mid test run.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::serve(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::net::SocketAddr;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Start the backend on an ephemeral port with a capturing request logger
    async fn spawn_backend() -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let state = Arc::new(crate::config::AppState::with_request_logger(
            cfg,
            Box::new(move |peer, line| {
                captured
                    .lock()
                    .unwrap()
                    .push(crate::logger::format_backend_line(peer, line));
            }),
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = run(listener, state).await;
        });
        (addr, lines)
    }

    async fn send_request(addr: SocketAddr, target: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {target} HTTP/1.1\r\nHost: backend\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        String::from_utf8(raw).unwrap()
    }

    fn body_of(raw: &str) -> &str {
        raw.split_once("\r\n\r\n").map_or("", |(_, body)| body)
    }

    #[tokio::test]
    async fn health_over_real_socket() {
        let (addr, _) = spawn_backend().await;
        let raw = send_request(addr, "/health").await;

        assert!(raw.starts_with("HTTP/1.1 200"), "got: {raw}");
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert_eq!(body_of(&raw), r#"{"status":"healthy"}"#);
    }

    #[tokio::test]
    async fn unknown_path_over_real_socket() {
        let (addr, _) = spawn_backend().await;
        let raw = send_request(addr, "/nonexistent").await;

        assert!(raw.starts_with("HTTP/1.1 404"), "got: {raw}");
        assert_eq!(body_of(&raw), "");
    }

    #[tokio::test]
    async fn every_request_is_logged_once() {
        let (addr, lines) = spawn_backend().await;
        send_request(addr, "/health").await;
        send_request(addr, "/nonexistent").await;

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[Backend] 127.0.0.1:"));
        assert!(lines[0].ends_with(" - GET /health HTTP/1.1"));
        assert!(lines[1].ends_with(" - GET /nonexistent HTTP/1.1"));
    }
}
