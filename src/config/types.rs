use serde::Deserialize;
use std::time::Duration;

/// Public profile pages live under this prefix
pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com/in/";

/// Settings for fetching and rendering a profile
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Base URL that profile identifiers are joined onto
    pub base_url: String,

    /// Time to let client-side rendering settle after navigation (milliseconds)
    pub render_wait_ms: u64,

    /// Navigation and request timeout (seconds)
    pub timeout_secs: u64,

    /// User agent sent by HTTP sessions
    pub user_agent: String,

    /// Run the browser without a window
    pub headless: bool,
}

impl Config {
    pub fn render_wait(&self) -> Duration {
        Duration::from_millis(self.render_wait_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            render_wait_ms: 1500,
            timeout_secs: 30,
            user_agent: format!("linkedin2md/{}", env!("CARGO_PKG_VERSION")),
            headless: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://www.linkedin.com/in/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.render_wait(), Duration::from_millis(1500));
        assert!(config.user_agent.starts_with("linkedin2md/"));
        assert!(config.headless);
    }
}
