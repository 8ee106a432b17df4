use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recognition::errors::RecognitionError;
use crate::domain::recognition::model::RecognitionTask;
use crate::domain::recognition::services::RecognitionService;
use crate::domain::recognition::settings::PollingPolicy;
use crate::domain::recognition::use_cases::wait_for_completion::WaitForCompletionUseCase;

/// Re-queries task status on a fixed interval until the service reports a
/// terminal state. A failed status query ends the wait immediately.
pub struct TaskPoller {
    pub service: Arc<dyn RecognitionService>,
    pub policy: PollingPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl WaitForCompletionUseCase for TaskPoller {
    async fn wait_for_completion(
        &self,
        task: RecognitionTask,
    ) -> Result<RecognitionTask, RecognitionError> {
        if task.id.is_null() {
            self.logger
                .error(&format!("Refusing to poll null task id {}", task.id));
            return Err(RecognitionError::InvalidTask(format!(
                "null task id {}",
                task.id
            )));
        }

        let task_id = task.id.clone();
        let mut current = task;
        let mut attempts: u32 = 0;

        while current.is_active() {
            if let Some(max) = self.policy.max_attempts
                && attempts >= max
            {
                self.logger.warn(&format!(
                    "Task {} still {} after {} status queries, giving up",
                    task_id, current.status, attempts
                ));
                return Err(RecognitionError::Timeout { attempts });
            }

            tokio::time::sleep(self.policy.interval).await;
            attempts += 1;

            current = self.service.get_status(&task_id).await.inspect_err(|err| {
                self.logger
                    .error(&format!("Status query for task {} failed: {}", task_id, err));
            })?;

            self.logger
                .info(&format!("Task {} status is {}", task_id, current.status));
        }

        Ok(current)
    }
}
