use std::path::Path;

use async_trait::async_trait;
use reqwest::{Response, StatusCode, header};

use business::domain::recognition::errors::RecognitionError;
use business::domain::recognition::model::{RecognitionTask, TaskId};
use business::domain::recognition::services::RecognitionService;
use business::domain::recognition::settings::ProcessingSettings;

use crate::client::OcrSdkClient;
use crate::envelope::parse_envelope;

pub struct OcrSdkRecognitionService {
    client: OcrSdkClient,
}

impl OcrSdkRecognitionService {
    pub fn new(client: OcrSdkClient) -> Self {
        Self { client }
    }

    fn is_auth_failure(status: StatusCode) -> bool {
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
    }

    /// Error envelopes come back with non-success statuses, so the body is
    /// parsed whatever the status, except for rejected credentials.
    async fn read_task(response: Response) -> Result<RecognitionTask, RecognitionError> {
        let status = response.status();

        if Self::is_auth_failure(status) {
            let body = response.text().await.unwrap_or_default();
            let detail = match parse_envelope(&body) {
                Err(RecognitionError::Service(message)) => message,
                _ => status.to_string(),
            };
            return Err(RecognitionError::Auth(detail));
        }

        let body = response.text().await.map_err(RecognitionError::network)?;
        parse_envelope(&body)
    }
}

#[async_trait]
impl RecognitionService for OcrSdkRecognitionService {
    async fn submit(
        &self,
        image_path: &Path,
        settings: &ProcessingSettings,
    ) -> Result<RecognitionTask, RecognitionError> {
        let image = tokio::fs::read(image_path).await.map_err(|e| {
            RecognitionError::File(format!("{}: {}", image_path.display(), e))
        })?;

        let request = self
            .client
            .client
            .post(self.client.process_receipt_url())
            .query(&settings.query_pairs())
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(image);

        let response = self
            .client
            .authorized(request)
            .send()
            .await
            .map_err(RecognitionError::network)?;

        Self::read_task(response).await
    }

    async fn get_status(&self, task_id: &TaskId) -> Result<RecognitionTask, RecognitionError> {
        let request = self
            .client
            .client
            .get(self.client.task_status_url())
            .query(&[("taskId", task_id.as_str())]);

        let response = self
            .client
            .authorized(request)
            .send()
            .await
            .map_err(RecognitionError::network)?;

        Self::read_task(response).await
    }
}
