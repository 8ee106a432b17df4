/// Failures of the receipt recognition chain.
/// Messages use code-style identifiers; details from the remote side are appended.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recognition.file: {0}")]
    File(String),
    #[error("recognition.network: {0}")]
    Network(String),
    #[error("recognition.auth: {0}")]
    Auth(String),
    #[error("recognition.invalid_task: {0}")]
    InvalidTask(String),
    #[error("recognition.remote_task_failed: {0}")]
    RemoteTask(String),
    /// Error envelope returned by the service, message kept verbatim.
    #[error("{0}")]
    Service(String),
    #[error("recognition.unknown_response")]
    UnknownResponse,
    #[error("recognition.timeout: task still active after {attempts} status queries")]
    Timeout { attempts: u32 },
}

impl RecognitionError {
    pub fn file(err: impl std::fmt::Display) -> Self {
        RecognitionError::File(err.to_string())
    }
    pub fn network(err: impl std::fmt::Display) -> Self {
        RecognitionError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_surface_service_message_verbatim() {
        let err = RecognitionError::Service("Invalid application id or password".to_string());
        assert_eq!(err.to_string(), "Invalid application id or password");
    }

    #[test]
    fn should_include_attempts_in_timeout_message() {
        let err = RecognitionError::Timeout { attempts: 3 };
        assert!(err.to_string().contains("3 status queries"));
    }

    #[test]
    fn should_build_file_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "receipt.jpg missing");
        let err = RecognitionError::file(io);
        assert!(matches!(err, RecognitionError::File(ref msg) if msg == "receipt.jpg missing"));
    }
}
