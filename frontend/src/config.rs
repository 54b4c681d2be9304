/// Base URL used when the build does not set `FITLOG_API_BASE_URL`
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Runtime configuration of the client
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Read configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("FITLOG_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = AppConfig::with_base_url("https://api.fitlog.example/");
        assert_eq!(config.api_base_url, "https://api.fitlog.example");
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        assert_eq!(AppConfig::with_base_url("  ").api_base_url, DEFAULT_API_BASE_URL);
    }
}
