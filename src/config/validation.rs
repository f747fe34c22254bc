use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.render_wait_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "render_wait_ms must be <= 60000ms, got {}ms",
            config.render_wait_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Identifiers are joined onto the base URL, so it must be an http(s)
/// directory URL
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", base_url, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            base_url
        )));
    }

    if !url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base_url '{}' must end with '/'",
            base_url
        )));
    }

    Ok(())
}
