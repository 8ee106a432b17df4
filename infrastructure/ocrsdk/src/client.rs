use reqwest::{Client, RequestBuilder};

pub const DEFAULT_SERVER_URL: &str = "https://cloud.ocrsdk.com";
const USER_AGENT: &str = concat!("receipt-ocr/", env!("CARGO_PKG_VERSION"));

/// Shared OCR SDK HTTP client configuration.
pub struct OcrSdkClient {
    pub client: Client,
    pub application_id: String,
    pub password: String,
    pub server_url: String,
}

impl OcrSdkClient {
    pub fn new(application_id: String, password: String) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            application_id,
            password,
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Attaches the application id and password as HTTP basic credentials.
    pub fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.application_id, Some(&self.password))
    }

    /// Returns the receipt submission endpoint URL.
    pub fn process_receipt_url(&self) -> String {
        format!("{}/processReceipt", self.server_url)
    }

    /// Returns the task status endpoint URL.
    pub fn task_status_url(&self) -> String {
        format!("{}/getTaskStatus", self.server_url)
    }
}
