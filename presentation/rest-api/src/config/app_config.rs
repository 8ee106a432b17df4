use std::env;
use std::path::PathBuf;

use super::{
    cors_config, ocrsdk_config::OcrSdkConfig, polling_config::PollingConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub ocrsdk: OcrSdkConfig,
    pub polling: PollingConfig,
    /// Where uploads and downloaded results live while a scan runs (OCR_WORK_DIR)
    pub work_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            ocrsdk: OcrSdkConfig::from_env(),
            polling: PollingConfig::from_env(),
            work_dir: env::var("OCR_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir().join("receipt-ocr")),
        }
    }
}
