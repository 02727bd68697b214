use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Backend service
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub posts_table: String,
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub login_path: String,
    pub secure_cookies: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Backend service
            supabase_url: required_env("SUPABASE_URL")?,
            supabase_anon_key: required_env("SUPABASE_ANON_KEY")?,
            posts_table: env_or_default("POSTS_TABLE", "posts"),
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            login_path: env_or_default("LOGIN_PATH", "/login"),
            secure_cookies: parse_env_bool("SECURE_COOKIES", false)?,
        })
    }

    /// Configuration pointing at a local backend, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            posts_table: "posts".to_string(),
            http_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 8080,
            login_path: "/login".to_string(),
            secure_cookies: false,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.supabase_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidValue {
                    name: "SUPABASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "SUPABASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.supabase_anon_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SUPABASE_ANON_KEY".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.posts_table.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "POSTS_TABLE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "LOGIN_PATH".to_string(),
                message: format!("must start with '/', got '{}'", self.login_path),
            });
        }
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_bool() {
        assert!(parse_env_bool("NONEXISTENT_VAR", true).unwrap());
        assert!(!parse_env_bool("NONEXISTENT_VAR", false).unwrap());
    }

    #[test]
    fn test_for_testing_is_valid() {
        Config::for_testing().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            supabase_url: "not a url".to_string(),
            ..Config::for_testing()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { name, .. }) if name == "SUPABASE_URL"
        ));

        let config = Config {
            supabase_url: "ftp://example.com".to_string(),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_key_and_relative_login() {
        let config = Config {
            supabase_anon_key: String::new(),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            login_path: "login".to_string(),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            http_timeout: Duration::ZERO,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::set_var("SUPABASE_URL", "https://project.supabase.co");
        std::env::set_var("SUPABASE_ANON_KEY", "anon");
        std::env::remove_var("POSTS_TABLE");
        std::env::remove_var("WEB_PORT");
        std::env::remove_var("LOGIN_PATH");
        std::env::remove_var("HTTP_TIMEOUT_SECS");
        std::env::remove_var("SECURE_COOKIES");

        let config = Config::from_env().unwrap();
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.posts_table, "posts");
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(!config.secure_cookies);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_required() {
        std::env::remove_var("SUPABASE_URL");
        std::env::set_var("SUPABASE_ANON_KEY", "anon");

        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingEnvVar(name)) if name == "SUPABASE_URL"
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_bad_port() {
        std::env::set_var("SUPABASE_URL", "https://project.supabase.co");
        std::env::set_var("SUPABASE_ANON_KEY", "anon");
        std::env::set_var("WEB_PORT", "eighty");

        let result = Config::from_env();
        std::env::remove_var("WEB_PORT");
        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }
}
