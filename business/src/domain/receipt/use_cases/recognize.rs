use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::receipt::model::ExtractedItem;
use crate::domain::recognition::errors::RecognitionError;

#[derive(Debug, Clone)]
pub struct RecognizeReceiptParams {
    pub image_path: PathBuf,
    /// Where the downloaded result is written; must be distinct per concurrent call.
    pub result_path: PathBuf,
}

#[async_trait]
pub trait RecognizeReceiptUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecognizeReceiptParams,
    ) -> Result<Vec<ExtractedItem>, RecognitionError>;
}
