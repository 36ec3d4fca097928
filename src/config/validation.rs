use crate::config::types::{
    AnalysisConfig, Config, CrawlerConfig, OutputConfig, SourceConfig, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_analysis_config(&config.analysis)?;
    Ok(())
}

/// Validates the article source
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.content_class.trim().is_empty() {
        return Err(ConfigError::Validation(
            "content-class cannot be empty".to_string(),
        ));
    }

    if config.content_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "content-id cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32

    if !config.wait_seconds.is_finite() || config.wait_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "wait-seconds must be a non-negative number, got {}",
            config.wait_seconds
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.word_counts_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "word-counts-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.language.trim().is_empty() {
        return Err(ConfigError::Validation(
            "analysis language cannot be empty".to_string(),
        ));
    }

    if let Some(path) = &config.corpus_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "corpus-path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact-email cannot be empty".to_string(),
        ));
    }

    // must contain @ and have text on both sides
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default();
        config.source.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));

        config.source.base_url = "ftp://wiki.example.org".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));

        config.source.base_url = "http://127.0.0.1:8080".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_content_markers() {
        let mut config = Config::default();
        config.source.content_class = "  ".to_string();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.source.content_id = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_wait_seconds() {
        let mut config = Config::default();
        config.crawler.wait_seconds = 0.0;
        assert!(validate(&config).is_ok());

        config.crawler.wait_seconds = f64::NAN;
        assert!(validate(&config).is_err());

        config.crawler.wait_seconds = -0.5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_crawler_name() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "bad name!".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("admin@sub.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
    }
}
