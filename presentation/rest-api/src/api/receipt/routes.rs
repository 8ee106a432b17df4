use std::path::PathBuf;
use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Binary, Json},
};
use uuid::Uuid;

use business::domain::receipt::use_cases::recognize::{
    RecognizeReceiptParams, RecognizeReceiptUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::ExtractedItemResponse;
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    recognize_use_case: Arc<dyn RecognizeReceiptUseCase>,
    work_dir: PathBuf,
}

impl ReceiptApi {
    pub fn new(recognize_use_case: Arc<dyn RecognizeReceiptUseCase>, work_dir: PathBuf) -> Self {
        Self {
            recognize_use_case,
            work_dir,
        }
    }
}

/// Receipt recognition API
#[OpenApi]
impl ReceiptApi {
    /// Scan a receipt image
    ///
    /// Uploads the photographed receipt to the OCR service, waits for it to be
    /// recognized and returns the purchased items with their prices, in
    /// receipt order.
    #[oai(path = "/receipts/scan", method = "post", tag = "ApiTags::Receipts")]
    async fn scan_receipt(&self, body: Binary<Vec<u8>>) -> ScanReceiptResponse {
        if body.0.is_empty() {
            return ScanReceiptResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "receipt.image_empty",
            )));
        }

        let upload_id = Uuid::new_v4();
        let image_path = self.work_dir.join(format!("{upload_id}.img"));
        let result_path = self.work_dir.join(format!("{upload_id}.txt"));

        if let Err(err) = tokio::fs::write(&image_path, &body.0).await {
            tracing::error!("Could not store upload {}: {}", image_path.display(), err);
            return ScanReceiptResponse::InternalError(Json(ErrorResponse::new(
                "FileError",
                "receipt.upload_not_stored",
            )));
        }

        let outcome = self
            .recognize_use_case
            .execute(RecognizeReceiptParams {
                image_path: image_path.clone(),
                result_path: result_path.clone(),
            })
            .await;

        for path in [&image_path, &result_path] {
            let _ = tokio::fs::remove_file(path).await;
        }

        match outcome {
            Ok(items) => {
                ScanReceiptResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => ScanReceiptResponse::UnprocessableEntity(json),
                    502 => ScanReceiptResponse::BadGateway(json),
                    504 => ScanReceiptResponse::GatewayTimeout(json),
                    _ => ScanReceiptResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ExtractedItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
