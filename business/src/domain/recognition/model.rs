use super::errors::RecognitionError;

/// Marker the service uses inside an all-zero (null) GUID.
const NULL_ID_MARKER: &str = "00000000";

/// Opaque task identifier assigned by the recognition service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A null id usually means a logic error in the caller, never a transient state.
    pub fn is_null(&self) -> bool {
        self.0.contains(NULL_ID_MARKER)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a recognition task, as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Queued => write!(f, "Queued"),
            TaskStatus::InProgress => write!(f, "InProgress"),
            TaskStatus::Completed => write!(f, "Completed"),
            TaskStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = RecognitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" | "Queued" => Ok(TaskStatus::Queued),
            "InProgress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            "ProcessingFailed" | "Failed" | "Deleted" | "NotEnoughCredits" => {
                Ok(TaskStatus::Failed)
            }
            _ => Err(RecognitionError::UnknownResponse),
        }
    }
}

/// A unit of work tracked by the remote service for one call.
///
/// Status is authoritative from the service and only replaced by newer status
/// queries; the task is dropped once it reaches a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionTask {
    pub id: TaskId,
    pub status: TaskStatus,
    /// Only meaningful once `status` is `Completed`.
    pub result_location: Option<String>,
    /// Only meaningful once `status` is `Failed`.
    pub error_message: Option<String>,
}

impl RecognitionTask {
    pub fn new(id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::new(id),
            status,
            result_location: None,
            error_message: None,
        }
    }

    pub fn with_result_location(mut self, location: impl Into<String>) -> Self {
        self.result_location = Some(location.into());
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, TaskStatus::Queued | TaskStatus::InProgress)
    }
}

/// True while the service is still working on the task.
pub fn is_active(task: &RecognitionTask) -> bool {
    task.is_active()
}
