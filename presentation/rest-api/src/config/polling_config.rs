use std::env;
use std::time::Duration;

use business::domain::recognition::settings::{
    DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL, PollingPolicy,
};

/// Status polling cadence.
///
/// Environment variables:
/// - OCR_POLL_INTERVAL_MS (default: 5000)
/// - OCR_POLL_MAX_ATTEMPTS (default: 120, `0` polls until the task settles)
pub struct PollingConfig {
    pub policy: PollingPolicy,
}

impl PollingConfig {
    pub fn from_env() -> Self {
        let policy = policy_from(
            env::var("OCR_POLL_INTERVAL_MS").ok().as_deref(),
            env::var("OCR_POLL_MAX_ATTEMPTS").ok().as_deref(),
        );
        Self { policy }
    }
}

fn policy_from(interval_ms: Option<&str>, max_attempts: Option<&str>) -> PollingPolicy {
    let interval = interval_ms
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .expect("OCR_POLL_INTERVAL_MS must be a number of milliseconds")
        })
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    let max_attempts = match max_attempts {
        Some(raw) => match raw
            .trim()
            .parse::<u32>()
            .expect("OCR_POLL_MAX_ATTEMPTS must be a non-negative number")
        {
            0 => None,
            attempts => Some(attempts),
        },
        None => Some(DEFAULT_MAX_POLL_ATTEMPTS),
    };

    PollingPolicy {
        interval,
        max_attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_policy_when_unset() {
        let policy = policy_from(None, None);
        assert_eq!(policy.interval, Duration::from_millis(5000));
        assert_eq!(policy.max_attempts, Some(120));
    }

    #[test]
    fn should_read_interval_and_attempts() {
        let policy = policy_from(Some("250"), Some("8"));
        assert_eq!(policy.interval, Duration::from_millis(250));
        assert_eq!(policy.max_attempts, Some(8));
    }

    #[test]
    fn should_treat_zero_attempts_as_unbounded() {
        assert_eq!(policy_from(None, Some("0")).max_attempts, None);
    }

    #[test]
    #[should_panic(expected = "OCR_POLL_INTERVAL_MS")]
    fn should_panic_on_invalid_interval() {
        policy_from(Some("soon"), None);
    }
}
