use std::sync::Arc;

use logger::TracingLogger;
use ocrsdk::client::OcrSdkClient;
use ocrsdk::recognition_service::OcrSdkRecognitionService;
use ocrsdk::result_downloader::OcrSdkResultDownloader;

use business::application::receipt::recognize::RecognizeReceiptUseCaseImpl;
use business::application::recognition::poller::TaskPoller;
use business::domain::receipt::extraction::ReceiptTextExtractor;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::default());
        let health_api = crate::api::health::routes::Api::new();

        tokio::fs::create_dir_all(&config.work_dir).await?;

        // Infrastructure adapters
        let ocrsdk = &config.ocrsdk;
        let client = OcrSdkClient::new(ocrsdk.application_id.clone(), ocrsdk.password.clone())
            .with_server_url(ocrsdk.server_url.clone());
        let recognizer = Arc::new(OcrSdkRecognitionService::new(client));
        let fetcher = Arc::new(OcrSdkResultDownloader::new()?);

        // Use cases
        let poller = Arc::new(TaskPoller {
            service: recognizer.clone(),
            policy: config.polling.policy,
            logger: logger.clone(),
        });
        let recognize_use_case = Arc::new(RecognizeReceiptUseCaseImpl {
            recognizer,
            poller,
            fetcher,
            extractor: ReceiptTextExtractor::default(),
            settings: ocrsdk.settings.clone(),
            logger,
        });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(
            recognize_use_case,
            config.work_dir.clone(),
        );

        Ok(Self {
            health_api,
            receipt_api,
        })
    }
}
