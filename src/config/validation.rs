use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    if config.page_limit == Some(0) {
        return Err(ConfigError::Validation(
            "page_limit must be a positive integer when set".to_string(),
        ));
    }

    // Ten minutes at most
    if config.politeness_delay > 600_000 {
        return Err(ConfigError::Validation(format!(
            "politeness_delay must be <= 600000ms, got {}ms",
            config.politeness_delay
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    if config.header.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent header cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII
    if !config.header.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        return Err(ConfigError::Validation(format!(
            "user agent header contains characters not allowed in HTTP headers: '{}'",
            config.header
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.corpus_path.is_empty() {
        return Err(ConfigError::Validation(
            "corpus_path cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation("log_path cannot be empty".to_string()));
    }

    if matches!(config.summary_path.as_deref(), Some("")) {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}
