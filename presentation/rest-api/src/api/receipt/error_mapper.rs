use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recognition::errors::RecognitionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecognitionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecognitionError::File(_) => (StatusCode::INTERNAL_SERVER_ERROR, "FileError"),
            RecognitionError::Network(_) => (StatusCode::BAD_GATEWAY, "NetworkError"),
            RecognitionError::Auth(_) => (StatusCode::BAD_GATEWAY, "AuthError"),
            RecognitionError::InvalidTask(_) => (StatusCode::BAD_GATEWAY, "InvalidTaskError"),
            RecognitionError::RemoteTask(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "RemoteTaskError")
            }
            RecognitionError::Service(_) => (StatusCode::BAD_GATEWAY, "ServiceError"),
            RecognitionError::UnknownResponse => {
                (StatusCode::BAD_GATEWAY, "UnknownResponseError")
            }
            RecognitionError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "TimeoutError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
