use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::Transport;
use crate::error::{Error, Result};

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<String> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/top-records", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });

        (url, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_post_returns_body_and_sends_headers() {
        let (url, server) = serve_once("200 OK", r#"{"records":[]}"#).await;
        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();

        let body = transport
            .post(
                &url,
                &[("x-token", "secret"), ("Content-Type", "application/json")],
                r#"{"num_records":10}"#.to_string(),
            )
            .await
            .unwrap();
        assert_eq!(body, r#"{"records":[]}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /top-records HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("x-token: secret"));
        assert!(request.ends_with(r#"{"num_records":10}"#));
    }

    #[tokio::test]
    async fn test_http_error_status_is_failure() {
        let (url, server) = serve_once("500 Internal Server Error", "{}").await;
        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();

        let err = transport.post(&url, &[], "{}".to_string()).await.unwrap_err();
        assert!(matches!(err, Error::Http(ref msg) if msg.contains("500")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_host_is_failure() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let result = transport
            .post(&format!("http://{}/top-records", addr), &[], "{}".to_string())
            .await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
