use std::time::Duration;

use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation API base URL
    #[serde(default = "default_recs_api_url")]
    pub recs_api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_recs_timeout_secs")]
    pub recs_timeout_secs: u64,

    /// Id of the text input holding the movie title
    #[serde(default = "default_recs_input_id")]
    pub recs_input_id: String,

    /// Id of the element that receives the cards
    #[serde(default = "default_recs_container_id")]
    pub recs_container_id: String,

    /// Render at most this many cards (all when unset)
    #[serde(default)]
    pub recs_max_cards: Option<usize>,
}

fn default_recs_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_recs_timeout_secs() -> u64 {
    10
}

fn default_recs_input_id() -> String {
    "movieInput".to_string()
}

fn default_recs_container_id() -> String {
    "recommendations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recs_api_url: default_recs_api_url(),
            recs_timeout_secs: default_recs_timeout_secs(),
            recs_input_id: default_recs_input_id(),
            recs_container_id: default_recs_container_id(),
            recs_max_cards: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Call `validate` once any command-line overrides are applied.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Reject settings the requester cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.recs_max_cards == Some(0) {
            anyhow::bail!("RECS_MAX_CARDS must be at least 1");
        }
        if self.recs_timeout_secs == 0 {
            anyhow::bail!("RECS_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.recs_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let vars: Vec<(String, String)> = Vec::new();
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.recs_api_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.recs_input_id, "movieInput");
        assert_eq!(config.recs_container_id, "recommendations");
        assert_eq!(config.recs_max_cards, None);
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("RECS_API_URL".to_string(), "http://recs.local:8080".to_string()),
            ("RECS_TIMEOUT_SECS".to_string(), "3".to_string()),
            ("RECS_MAX_CARDS".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.recs_api_url, "http://recs.local:8080");
        assert_eq!(config.recs_timeout_secs, 3);
        assert_eq!(config.recs_max_cards, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_card_limit_rejected() {
        let config = Config {
            recs_max_cards: Some(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            recs_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
