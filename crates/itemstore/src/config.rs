use std::{env, time::Duration};

/// Origins admitted by the CORS policy when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://frontend:3000",
    "http://localhost:5173",
];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origins allowed to make cross-origin requests (scheme + host + port).
    pub allowed_origins: Vec<String>,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CORS_ALLOWED_ORIGINS` - Comma separated origins (default: the frontend dev origins)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|| {
                    DEFAULT_ALLOWED_ORIGINS
                        .iter()
                        .map(|origin| origin.to_string())
                        .collect()
                }),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|&seconds: &u64| seconds > 0)
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Splits a comma separated origin list, dropping blanks and trailing slashes.
///
/// `*` is dropped: credentials are allowed, so origins must be listed.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            let wildcard = *origin == "*";
            if wildcard {
                tracing::warn!("Ignoring wildcard CORS origin, list origins explicitly");
            }
            !wildcard
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:3000",
                "http://frontend:3000",
                "http://localhost:5173"
            ]
        );
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_custom_origins() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://app.example.com/ ,, http://localhost:8080",
        )]);

        assert_eq!(
            config.allowed_origins,
            vec!["https://app.example.com", "http://localhost:8080"]
        );
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_wildcard_origin_is_dropped() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "*, http://localhost:3000",
        )]);

        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "0")]);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "30")]);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
