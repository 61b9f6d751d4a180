//! PDF download and text extraction.

use std::time::Duration;

use bytes::{Bytes, BytesMut};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::errors::AppError;

pub const PDF_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;

/// Caps applied to a single resume download.
#[derive(Debug, Clone, Copy)]
pub struct DownloadLimits {
    pub timeout: Duration,
    pub max_bytes: usize,
}

impl Default for DownloadLimits {
    fn default() -> Self {
        Self {
            timeout: PDF_DOWNLOAD_TIMEOUT,
            max_bytes: MAX_PDF_BYTES,
        }
    }
}

/// HTTP client used for resume downloads.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder().timeout(PDF_DOWNLOAD_TIMEOUT).build()
}

/// Downloads a PDF from an http(s) URL.
pub async fn fetch_pdf(http: &Client, url: &str) -> Result<Bytes, AppError> {
    fetch_pdf_with_limits(http, url, DownloadLimits::default()).await
}

/// Downloads a PDF, failing once `limits.timeout` elapses or the body grows
/// past `limits.max_bytes`.
pub async fn fetch_pdf_with_limits(
    http: &Client,
    url: &str,
    limits: DownloadLimits,
) -> Result<Bytes, AppError> {
    let url = parse_pdf_url(url)?;

    let body = tokio::time::timeout(limits.timeout, download(http, &url, limits))
        .await
        .map_err(|_| {
            AppError::Pdf(format!(
                "download timed out after {}s",
                limits.timeout.as_secs_f32()
            ))
        })??;

    info!("Downloaded resume PDF ({} bytes)", body.len());
    Ok(body)
}

async fn download(http: &Client, url: &Url, limits: DownloadLimits) -> Result<Bytes, AppError> {
    let mut response = http
        .get(url.clone())
        .timeout(limits.timeout)
        .send()
        .await
        .map_err(|e| AppError::Pdf(format!("failed to download pdf: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Pdf(format!(
            "failed to download pdf: {url} returned {status}"
        )));
    }

    if let Some(len) = response.content_length() {
        if len > limits.max_bytes as u64 {
            return Err(too_large(limits.max_bytes));
        }
    }

    let mut body = BytesMut::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| AppError::Pdf(format!("failed to read pdf body: {e}")))?
    {
        if body.len() + chunk.len() > limits.max_bytes {
            return Err(too_large(limits.max_bytes));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::Pdf(format!("pdf exceeds the {max_bytes} byte limit"))
}

/// Extracts plain text from PDF bytes on the blocking pool.
pub async fn extract_text(pdf: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("pdf extraction task failed: {e}")))?
        .map_err(|e| AppError::Pdf(format!("failed to extract text: {e}")))?;

    debug!("Extracted {} characters of resume text", text.chars().count());
    Ok(text)
}

fn parse_pdf_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|_| AppError::Validation(format!("Invalid resume URL: {raw}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Validation(format!(
            "Unsupported resume URL scheme: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    fn limits(timeout_ms: u64, max_bytes: usize) -> DownloadLimits {
        DownloadLimits {
            timeout: Duration::from_millis(timeout_ms),
            max_bytes,
        }
    }

    /// Serves one connection with a canned raw HTTP response, then closes it.
    async fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/resume.pdf")
    }

    #[tokio::test]
    async fn test_download_within_limits() {
        let url = serve_once(b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\n%PDF-1.4").await;
        let body = fetch_pdf_with_limits(&local_client(), &url, limits(2000, 64))
            .await
            .unwrap();
        assert_eq!(&body[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let started = std::time::Instant::now();
        let result = fetch_pdf_with_limits(
            &local_client(),
            &format!("http://{addr}/resume.pdf"),
            limits(200, MAX_PDF_BYTES),
        )
        .await;

        assert!(matches!(result, Err(AppError::Pdf(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_rejected() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 32\r\n\r\n%PDF-0123456789abcdef0123456789a",
        )
        .await;
        let result = fetch_pdf_with_limits(&local_client(), &url, limits(2000, 16)).await;
        assert!(matches!(result, Err(AppError::Pdf(m)) if m.contains("byte limit")));
    }

    #[tokio::test]
    async fn test_streamed_body_over_limit_rejected() {
        // No Content-Length: the body runs until the connection closes.
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n%PDF-0123456789abcdef0123456789a",
        )
        .await;
        let result = fetch_pdf_with_limits(&local_client(), &url, limits(2000, 16)).await;
        assert!(matches!(result, Err(AppError::Pdf(m)) if m.contains("byte limit")));
    }

    #[tokio::test]
    async fn test_error_status_rejected() {
        let url = serve_once(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n").await;
        let result = fetch_pdf_with_limits(&local_client(), &url, limits(2000, 64)).await;
        assert!(matches!(result, Err(AppError::Pdf(m)) if m.contains("404")));
    }

    #[test]
    fn test_https_url_accepted() {
        let url = parse_pdf_url("https://utfs.io/f/resume.pdf").unwrap();
        assert_eq!(url.host_str(), Some("utfs.io"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(matches!(
            parse_pdf_url("file:///etc/passwd"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_garbage_url_rejected() {
        assert!(matches!(parse_pdf_url("not a url"), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_fail_extraction() {
        let result = extract_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(result.is_err());
    }
}
