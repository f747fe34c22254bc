use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates a configuration from TOML text
///
/// Missing keys fall back to the values of [`Config::default`].
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
base-url = "https://profiles.example.com/in/"
render-wait-ms = 250
timeout-secs = 10
user-agent = "TestAgent/1.0"
headless = false
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.base_url, "https://profiles.example.com/in/");
        assert_eq!(config.render_wait_ms, 250);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "TestAgent/1.0");
        assert!(!config.headless);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("timeout-secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, Config::default().base_url);
        assert_eq!(config.render_wait_ms, Config::default().render_wait_ms);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.base_url, "https://www.linkedin.com/in/");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/linkedin2md.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("timeout-secs = 0");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
