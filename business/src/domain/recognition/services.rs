use std::path::Path;

use async_trait::async_trait;

use super::errors::RecognitionError;
use super::model::{RecognitionTask, TaskId};
use super::settings::ProcessingSettings;

/// Service port for the remote task lifecycle: submit an image, query its status.
#[async_trait]
pub trait RecognitionService: Send + Sync {
    /// Uploads the image at `image_path` and returns the freshly created task.
    async fn submit(
        &self,
        image_path: &Path,
        settings: &ProcessingSettings,
    ) -> Result<RecognitionTask, RecognitionError>;

    async fn get_status(&self, task_id: &TaskId) -> Result<RecognitionTask, RecognitionError>;
}

/// Service port for downloading a completed result to local storage.
///
/// A failed fetch may leave a partial file at `destination`.
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    async fn fetch(&self, result_location: &str, destination: &Path)
    -> Result<(), RecognitionError>;
}
