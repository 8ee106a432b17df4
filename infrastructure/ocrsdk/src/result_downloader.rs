use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use business::domain::recognition::errors::RecognitionError;
use business::domain::recognition::services::ResultFetcher;

/// Streams a completed recognition result from its (https) location to disk.
pub struct OcrSdkResultDownloader {
    client: Client,
}

impl OcrSdkResultDownloader {
    /// Builds the https-only download client; a builder failure is returned to the caller.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .https_only(true)
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResultFetcher for OcrSdkResultDownloader {
    async fn fetch(
        &self,
        result_location: &str,
        destination: &Path,
    ) -> Result<(), RecognitionError> {
        let mut file = tokio::fs::File::create(destination).await.map_err(|e| {
            RecognitionError::File(format!("{}: {}", destination.display(), e))
        })?;

        let response = self
            .client
            .get(result_location)
            .send()
            .await
            .map_err(RecognitionError::network)?;

        if !response.status().is_success() {
            return Err(RecognitionError::Network(format!(
                "result download answered HTTP {}",
                response.status()
            )));
        }

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(RecognitionError::network)?;
            file.write_all(&chunk).await.map_err(RecognitionError::file)?;
        }

        file.flush().await.map_err(RecognitionError::file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, http_response, serve_once};

    fn plain_http_downloader() -> OcrSdkResultDownloader {
        OcrSdkResultDownloader::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn should_write_result_body_to_destination() {
        let body = "<receipts><recognizedText><![CDATA[\nMiso Soup 3.00]]></recognizedText></receipts>";
        let (url, _server) = serve_once(http_response("200 OK", body)).await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("result.txt");

        plain_http_downloader()
            .fetch(&format!("{}/files/T1.result", url), &destination)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&destination).unwrap(), body);
    }

    #[tokio::test]
    async fn should_fail_with_network_error_on_http_error_status() {
        let (url, _server) = serve_once(http_response("404 Not Found", "")).await;
        let dir = tempfile::tempdir().unwrap();

        let result = plain_http_downloader()
            .fetch(&format!("{}/missing", url), &dir.path().join("result.txt"))
            .await;

        assert!(matches!(result, Err(RecognitionError::Network(_))));
    }

    #[tokio::test]
    async fn should_leave_destination_in_place_when_transport_fails() {
        let url = closed_port_url().await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("result.txt");

        let result = plain_http_downloader().fetch(&url, &destination).await;

        assert!(matches!(result, Err(RecognitionError::Network(_))));
        assert!(destination.exists());
    }

    #[tokio::test]
    async fn should_keep_partial_file_when_body_is_cut_short() {
        let response =
            "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: 512\r\nConnection: close\r\n\r\n<receipts><recogn"
                .to_string();
        let (url, _server) = serve_once(response).await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("result.txt");

        let result = plain_http_downloader()
            .fetch(&format!("{}/files/T1.result", url), &destination)
            .await;

        assert!(matches!(result, Err(RecognitionError::Network(_))));
        let written = std::fs::read_to_string(&destination).unwrap();
        assert!("<receipts><recogn".starts_with(&written));
    }

    #[tokio::test]
    async fn should_refuse_plain_http_by_default() {
        let url = closed_port_url().await;
        let dir = tempfile::tempdir().unwrap();

        let result = OcrSdkResultDownloader::new()
            .unwrap()
            .fetch(&url, &dir.path().join("result.txt"))
            .await;

        assert!(matches!(result, Err(RecognitionError::Network(_))));
    }

    #[tokio::test]
    async fn should_fail_with_file_error_when_destination_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing-dir").join("result.txt");

        let result = plain_http_downloader()
            .fetch("http://127.0.0.1:9/never", &destination)
            .await;

        assert!(matches!(result, Err(RecognitionError::File(_))));
    }
}
