use async_trait::async_trait;

use crate::domain::recognition::errors::RecognitionError;
use crate::domain::recognition::model::RecognitionTask;

#[async_trait]
pub trait WaitForCompletionUseCase: Send + Sync {
    /// Polls until `task` reaches `Completed` or `Failed` and returns that final state.
    async fn wait_for_completion(
        &self,
        task: RecognitionTask,
    ) -> Result<RecognitionTask, RecognitionError>;
}
