use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::extraction::ReceiptTextExtractor;
use crate::domain::receipt::model::ExtractedItem;
use crate::domain::receipt::use_cases::recognize::{
    RecognizeReceiptParams, RecognizeReceiptUseCase,
};
use crate::domain::recognition::errors::RecognitionError;
use crate::domain::recognition::model::TaskStatus;
use crate::domain::recognition::services::{RecognitionService, ResultFetcher};
use crate::domain::recognition::settings::ProcessingSettings;
use crate::domain::recognition::use_cases::wait_for_completion::WaitForCompletionUseCase;

/// Submit → wait → download → extract, one task per call, no retries.
pub struct RecognizeReceiptUseCaseImpl {
    pub recognizer: Arc<dyn RecognitionService>,
    pub poller: Arc<dyn WaitForCompletionUseCase>,
    pub fetcher: Arc<dyn ResultFetcher>,
    pub extractor: ReceiptTextExtractor,
    pub settings: ProcessingSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecognizeReceiptUseCase for RecognizeReceiptUseCaseImpl {
    async fn execute(
        &self,
        params: RecognizeReceiptParams,
    ) -> Result<Vec<ExtractedItem>, RecognitionError> {
        self.logger.info(&format!(
            "Uploading receipt image {}",
            params.image_path.display()
        ));

        let submitted = self
            .recognizer
            .submit(&params.image_path, &self.settings)
            .await?;

        self.logger.info(&format!(
            "Upload completed: task {} is {}",
            submitted.id, submitted.status
        ));

        let task = self.poller.wait_for_completion(submitted).await?;

        let result_location = match task.status {
            TaskStatus::Completed => task
                .result_location
                .ok_or(RecognitionError::UnknownResponse)?,
            _ => {
                let message = task
                    .error_message
                    .unwrap_or_else(|| "recognition.task_failed".to_string());
                self.logger.error(&format!(
                    "Task {} ended as {}: {}",
                    task.id, task.status, message
                ));
                return Err(RecognitionError::RemoteTask(message));
            }
        };

        self.logger.info(&format!(
            "Processing completed, downloading result to {}",
            params.result_path.display()
        ));

        self.fetcher
            .fetch(&result_location, &params.result_path)
            .await?;

        let raw = tokio::fs::read(&params.result_path)
            .await
            .map_err(RecognitionError::file)?;

        let extraction = self.extractor.extract(&String::from_utf8_lossy(&raw));

        for skipped in &extraction.skipped {
            self.logger.warn(&format!(
                "Dropped text block {} ({}): {:?}",
                skipped.position, skipped.reason, skipped.payload
            ));
        }

        self.logger.info(&format!(
            "Receipt recognized: {} items extracted, {} blocks dropped",
            extraction.items.len(),
            extraction.skipped.len()
        ));

        Ok(extraction.items)
    }
}
