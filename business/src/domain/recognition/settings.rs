use std::time::Duration;

/// Processing options sent verbatim to the service with each submitted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSettings {
    pub country: String,
    pub image_source: String,
    pub correct_orientation: bool,
    pub correct_skew: bool,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            country: "usa".to_string(),
            image_source: "auto".to_string(),
            correct_orientation: true,
            correct_skew: true,
        }
    }
}

impl ProcessingSettings {
    pub fn with_country(self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self
        }
    }

    pub fn with_image_source(self, image_source: impl Into<String>) -> Self {
        Self {
            image_source: image_source.into(),
            ..self
        }
    }

    pub fn with_correct_orientation(self, correct_orientation: bool) -> Self {
        Self {
            correct_orientation,
            ..self
        }
    }

    pub fn with_correct_skew(self, correct_skew: bool) -> Self {
        Self {
            correct_skew,
            ..self
        }
    }

    /// Query parameters in the names the service expects.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("country", self.country.clone()),
            ("imageSource", self.image_source.clone()),
            ("correctOrientation", self.correct_orientation.to_string()),
            ("correctSkew", self.correct_skew.to_string()),
        ]
    }
}

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

/// How the status poller waits for a task to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    pub interval: Duration,
    /// `None` polls until the service reports a terminal state.
    pub max_attempts: Option<u32>,
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: Some(DEFAULT_MAX_POLL_ATTEMPTS),
        }
    }
}

impl PollingPolicy {
    pub fn unbounded(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_default_settings_as_query_pairs() {
        let pairs = ProcessingSettings::default().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("country", "usa".to_string()),
                ("imageSource", "auto".to_string()),
                ("correctOrientation", "true".to_string()),
                ("correctSkew", "true".to_string()),
            ]
        );
    }

    #[test]
    fn should_override_single_setting_without_touching_others() {
        let settings = ProcessingSettings::default()
            .with_country("canada")
            .with_correct_skew(false);

        assert_eq!(settings.country, "canada");
        assert_eq!(settings.image_source, "auto");
        assert!(settings.correct_orientation);
        assert!(!settings.correct_skew);
    }

    #[test]
    fn should_default_to_five_second_bounded_polling() {
        let policy = PollingPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(5));
        assert_eq!(policy.max_attempts, Some(120));
    }

    #[test]
    fn should_build_unbounded_policy() {
        let policy = PollingPolicy::unbounded(Duration::from_millis(10));
        assert!(policy.max_attempts.is_none());
    }
}
