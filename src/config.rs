// src/config.rs
//
// Runtime configuration from the environment (and `.env`, if present).

use std::path::PathBuf;
use std::time::Duration;

use crate::db::default_database_path;
use crate::error::{AppError, AppResult};
use crate::integrations::tmdb::DEFAULT_BASE_URL;

pub const ENV_API_TOKEN: &str = "TMDB_API_TOKEN";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_DB_PATH: &str = "MOVIEHUB_DB_PATH";
pub const ENV_HTTP_TIMEOUT: &str = "MOVIEHUB_HTTP_TIMEOUT_SECS";
pub const ENV_POOL_SIZE: &str = "MOVIEHUB_POOL_SIZE";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Without a token every remote call fails and reads are served from cache.
    pub api_token: Option<String>,
    pub base_url: String,
    pub db_path: PathBuf,
    pub http_timeout: Duration,
    pub pool_size: u32,
}

impl AppConfig {
    /// Load `.env` and read the process environment.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(AppError::Config(format!("Failed to read .env: {}", e)));
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_path = match get(ENV_DB_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let http_timeout = match get(ENV_HTTP_TIMEOUT) {
            Some(raw) => Duration::from_secs(parse_number(ENV_HTTP_TIMEOUT, &raw)?),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let pool_size = match get(ENV_POOL_SIZE) {
            Some(raw) => parse_number(ENV_POOL_SIZE, &raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_size == 0 {
            return Err(AppError::Config(format!("{} must be at least 1", ENV_POOL_SIZE)));
        }

        Ok(Self {
            api_token: get(ENV_API_TOKEN),
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            db_path,
            http_timeout,
            pool_size,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::Config(format!("{} is not a valid number: {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[(ENV_DB_PATH, "/tmp/movies.db")]).unwrap();

        assert_eq!(config.api_token, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.db_path, PathBuf::from("/tmp/movies.db"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.pool_size, 8);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            (ENV_API_TOKEN, "secret"),
            (ENV_BASE_URL, "http://localhost:8080/3/movie"),
            (ENV_DB_PATH, "/tmp/movies.db"),
            (ENV_HTTP_TIMEOUT, "5"),
            (ENV_POOL_SIZE, "2"),
        ])
        .unwrap();

        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "http://localhost:8080/3/movie");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn test_blank_token_is_unset() {
        let config = config(&[(ENV_API_TOKEN, "  "), (ENV_DB_PATH, "/tmp/movies.db")]).unwrap();
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let result = config(&[(ENV_DB_PATH, "/tmp/movies.db"), (ENV_HTTP_TIMEOUT, "soon")]);
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = config(&[(ENV_DB_PATH, "/tmp/movies.db"), (ENV_POOL_SIZE, "0")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
