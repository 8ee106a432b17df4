use std::env;

use business::domain::recognition::settings::ProcessingSettings;
use ocrsdk::client::DEFAULT_SERVER_URL;

/// Credentials, endpoint and processing settings for the OCR SDK.
pub struct OcrSdkConfig {
    pub application_id: String,
    pub password: String,
    pub server_url: String,
    pub settings: ProcessingSettings,
}

impl OcrSdkConfig {
    /// Environment variables:
    /// - OCRSDK_APPLICATION_ID, OCRSDK_PASSWORD: required
    /// - OCRSDK_SERVER_URL (default: "https://cloud.ocrsdk.com")
    /// - OCR_COUNTRY, OCR_IMAGE_SOURCE, OCR_CORRECT_ORIENTATION, OCR_CORRECT_SKEW
    pub fn from_env() -> Self {
        let application_id = env::var("OCRSDK_APPLICATION_ID")
            .expect("OCRSDK_APPLICATION_ID environment variable must be set");
        let password = env::var("OCRSDK_PASSWORD")
            .expect("OCRSDK_PASSWORD environment variable must be set");
        let server_url =
            env::var("OCRSDK_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let settings = settings_from(
            env::var("OCR_COUNTRY").ok(),
            env::var("OCR_IMAGE_SOURCE").ok(),
            env::var("OCR_CORRECT_ORIENTATION").ok().as_deref(),
            env::var("OCR_CORRECT_SKEW").ok().as_deref(),
        );

        Self {
            application_id,
            password,
            server_url,
            settings,
        }
    }
}

fn settings_from(
    country: Option<String>,
    image_source: Option<String>,
    correct_orientation: Option<&str>,
    correct_skew: Option<&str>,
) -> ProcessingSettings {
    let mut settings = ProcessingSettings::default();
    if let Some(country) = country {
        settings = settings.with_country(country);
    }
    if let Some(image_source) = image_source {
        settings = settings.with_image_source(image_source);
    }
    if let Some(flag) = correct_orientation {
        settings = settings.with_correct_orientation(parse_flag("OCR_CORRECT_ORIENTATION", flag));
    }
    if let Some(flag) = correct_skew {
        settings = settings.with_correct_skew(parse_flag("OCR_CORRECT_SKEW", flag));
    }
    settings
}

fn parse_flag(name: &str, raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => panic!("{name} must be a boolean, got {raw:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_default_settings_when_nothing_is_set() {
        let settings = settings_from(None, None, None, None);
        assert_eq!(settings, ProcessingSettings::default());
    }

    #[test]
    fn should_override_settings_from_values() {
        let settings = settings_from(
            Some("spain".to_string()),
            Some("photo".to_string()),
            Some("false"),
            Some("0"),
        );

        assert_eq!(settings.country, "spain");
        assert_eq!(settings.image_source, "photo");
        assert!(!settings.correct_orientation);
        assert!(!settings.correct_skew);
    }

    #[test]
    fn should_parse_flags_case_insensitively() {
        assert!(parse_flag("X", "TRUE"));
        assert!(parse_flag("X", " yes "));
        assert!(!parse_flag("X", "No"));
    }

    #[test]
    #[should_panic(expected = "OCR_CORRECT_SKEW must be a boolean")]
    fn should_panic_on_invalid_flag() {
        parse_flag("OCR_CORRECT_SKEW", "maybe");
    }
}
