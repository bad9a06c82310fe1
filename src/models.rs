use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Outcome of a successful classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authentic,
    Inauthentic,
}

impl From<bool> for Verdict {
    fn from(is_authentic: bool) -> Self {
        if is_authentic {
            Self::Authentic
        } else {
            Self::Inauthentic
        }
    }
}

impl Verdict {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Authentic => "Likely Authentic News",
            Self::Inauthentic => "Potential Fake News Detected",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Authentic => {
                "Our analysis suggests this news article is likely to be authentic."
            }
            Self::Inauthentic => {
                "Our analysis indicates this news article might contain misleading information."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Seconds before a request is abandoned; unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Authentic);
        assert_eq!(Verdict::from(false), Verdict::Inauthentic);
    }

    #[test]
    fn test_verdict_copy() {
        assert_eq!(Verdict::Authentic.title(), "Likely Authentic News");
        assert_eq!(Verdict::Inauthentic.title(), "Potential Fake News Detected");
        assert!(Verdict::Inauthentic.description().contains("misleading"));
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.service_url, "http://localhost:8000");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_app_config_fills_missing_fields() {
        let config: AppConfig = toml::from_str("request_timeout = 15").unwrap();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.request_timeout, Some(15));
    }
}
