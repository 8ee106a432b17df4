use serde::Deserialize;

use business::domain::recognition::errors::RecognitionError;
use business::domain::recognition::model::{RecognitionTask, TaskId, TaskStatus};

/// Root of every service reply: either `<response>` or `<error>`.
#[derive(Debug, Deserialize)]
enum Envelope {
    #[serde(rename = "response")]
    Response(ResponseBody),
    #[serde(rename = "error")]
    Error(ErrorBody),
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "task", default)]
    tasks: Vec<TaskElement>,
}

#[derive(Debug, Deserialize)]
struct TaskElement {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@status")]
    status: String,
    #[serde(rename = "@resultUrl", default)]
    result_url: Option<String>,
    #[serde(rename = "@error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Vec<MessageElement>,
}

#[derive(Debug, Deserialize)]
struct MessageElement {
    #[serde(rename = "$text", default)]
    text: String,
}

impl TaskElement {
    fn into_task(self) -> Result<RecognitionTask, RecognitionError> {
        let status = self.status.parse::<TaskStatus>()?;
        Ok(RecognitionTask {
            id: TaskId::new(self.id),
            status,
            result_location: self.result_url.filter(|url| !url.is_empty()),
            error_message: self.error.filter(|message| !message.is_empty()),
        })
    }
}

/// Parses a response body into the first task it describes.
///
/// An `<error>` envelope surfaces its message verbatim; anything else that
/// carries no task is an unknown response.
pub fn parse_envelope(body: &str) -> Result<RecognitionTask, RecognitionError> {
    match quick_xml::de::from_str::<Envelope>(body) {
        Ok(Envelope::Response(response)) => response
            .tasks
            .into_iter()
            .next()
            .ok_or(RecognitionError::UnknownResponse)?
            .into_task(),
        Ok(Envelope::Error(error)) => Err(error
            .message
            .into_iter()
            .next()
            .map(|message| RecognitionError::Service(message.text))
            .unwrap_or(RecognitionError::UnknownResponse)),
        Err(_) => Err(RecognitionError::UnknownResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_queued_task() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<response>
  <task id="a1b2c3d4-5e6f-7a8b-9c0d-e1f2a3b4c5d6" registrationTime="2024-03-01T10:00:00Z"
        statusChangeTime="2024-03-01T10:00:01Z" status="Queued" filesCount="1"
        credits="0" estimatedProcessingTime="5" />
</response>"#;

        let task = parse_envelope(body).unwrap();

        assert_eq!(task.id.as_str(), "a1b2c3d4-5e6f-7a8b-9c0d-e1f2a3b4c5d6");
        assert_eq!(task.status, TaskStatus::Queued);
        assert!(task.result_location.is_none());
        assert!(task.error_message.is_none());
    }

    #[test]
    fn should_parse_completed_task_with_result_url() {
        let body = r#"<response><task id="T1" status="Completed" resultUrl="https://ocrsdk.blob.core.windows.net/files/T1.result" /></response>"#;

        let task = parse_envelope(body).unwrap();

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(
            task.result_location.as_deref(),
            Some("https://ocrsdk.blob.core.windows.net/files/T1.result")
        );
    }

    #[test]
    fn should_parse_failed_task_with_error() {
        let body = r#"<response><task id="T1" status="ProcessingFailed" error="Image is corrupted" /></response>"#;

        let task = parse_envelope(body).unwrap();

        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.error_message.as_deref(), Some("Image is corrupted"));
    }

    #[test]
    fn should_surface_error_message_verbatim() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<error><message language="english">Invalid application id or password</message></error>"#;

        let result = parse_envelope(body);

        assert!(
            matches!(result, Err(RecognitionError::Service(ref msg)) if msg == "Invalid application id or password")
        );
    }

    #[test]
    fn should_keep_error_message_text_unchanged() {
        let body = r#"<error><message language="english">Image  too small: 40x40px, minimum is 100x100px.</message></error>"#;

        let result = parse_envelope(body);

        assert!(
            matches!(result, Err(RecognitionError::Service(ref msg)) if msg == "Image  too small: 40x40px, minimum is 100x100px.")
        );
    }

    #[test]
    fn should_report_unknown_response_without_task() {
        assert!(matches!(
            parse_envelope("<response></response>"),
            Err(RecognitionError::UnknownResponse)
        ));
        assert!(matches!(
            parse_envelope("<html><body>Bad Gateway</body></html>"),
            Err(RecognitionError::UnknownResponse)
        ));
        assert!(matches!(
            parse_envelope("not xml at all"),
            Err(RecognitionError::UnknownResponse)
        ));
    }

    #[test]
    fn should_report_unknown_response_for_unknown_status() {
        let body = r#"<response><task id="T1" status="Hibernating" /></response>"#;
        assert!(matches!(
            parse_envelope(body),
            Err(RecognitionError::UnknownResponse)
        ));
    }
}
