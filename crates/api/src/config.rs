use std::str::FromStr;

use crate::auth::token::{TokenConfig, DEFAULT_ISSUER};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL and the token secret has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    /// Token signing secret and issuer.
    pub token: TokenConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                 |
    /// |------------------------|----------|-------------------------|
    /// | `DATABASE_URL`         | **yes**  | --                      |
    /// | `JWT_SECRET`           | **yes**  | --                      |
    /// | `JWT_ISSUER`           | no       | `API MovieFlix`         |
    /// | `HOST`                 | no       | `0.0.0.0`               |
    /// | `PORT`                 | no       | `3000`                  |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                    |
    /// | `LOG_FORMAT`           | no       | `text`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        let cors_raw = lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into());
        let cors_origins: Vec<String> = cors_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        // Credentials are allowed, which rules out a wildcard origin.
        if cors_origins.iter().any(|o| o == "*") {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: cors_raw,
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 3000)?,
            database_url: required("DATABASE_URL")?,
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            log_format,
            token: TokenConfig {
                secret: required("JWT_SECRET")?,
                issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.into()),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/movieflix"),
        ("JWT_SECRET", "s3cret"),
    ];

    #[test]
    fn test_defaults() {
        let config = load(&REQUIRED).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.token.secret, "s3cret");
        assert_eq!(config.token.issuer, "API MovieFlix");
    }

    #[test]
    fn test_missing_secret() {
        let result = load(&[("DATABASE_URL", "postgres://localhost/movieflix")]);
        assert_matches!(result, Err(ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let result = load(&[
            ("DATABASE_URL", "postgres://localhost/movieflix"),
            ("JWT_SECRET", "   "),
        ]);
        assert_matches!(result, Err(ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));
        assert_matches!(
            load(&vars),
            Err(ConfigError::Invalid { var: "PORT", value }) if value == "eighty"
        );
    }

    #[test]
    fn test_wildcard_cors_origin_rejected() {
        for value in ["*", "http://a.test, *"] {
            let mut vars = REQUIRED.to_vec();
            vars.push(("CORS_ORIGINS", value));
            assert_matches!(
                load(&vars),
                Err(ConfigError::Invalid { var: "CORS_ORIGINS", value: v }) if v == value
            );
        }
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("LOG_FORMAT", "json"),
            ("JWT_ISSUER", "Test Issuer"),
        ]);
        let config = load(&vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.token.issuer, "Test Issuer");
    }
}
