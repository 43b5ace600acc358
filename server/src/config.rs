//! Process configuration, read from the environment once at startup.
//!
//! - `RECIPES_BACKEND`: "memory" (default) | "file" | "postgres"
//! - `RECIPES_SEED_FILE`: seed file for the file backend (default: recipes.json)
//! - `DATABASE_URL`: connection string, required for the postgres backend
//! - `PORT`: listen port (default: 8080)

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEED_FILE: &str = "recipes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown RECIPES_BACKEND: {0} (expected memory, file or postgres)")]
    UnknownBackend(String),

    #[error("DATABASE_URL must be set for the postgres backend")]
    MissingDatabaseUrl,

    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}

/// Which recipe store to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Memory,
    File { seed_path: PathBuf },
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: Backend,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_name = lookup("RECIPES_BACKEND").unwrap_or_else(|| "memory".to_string());

        let backend = match backend_name.trim().to_ascii_lowercase().as_str() {
            "memory" => Backend::Memory,
            "file" => Backend::File {
                seed_path: lookup("RECIPES_SEED_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE)),
            },
            "postgres" => Backend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|url| !url.is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            _ => return Err(ConfigError::UnknownBackend(backend_name)),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { backend, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_file_backend() {
        let config = config_from(&[("RECIPES_BACKEND", "file")]).unwrap();
        assert_eq!(
            config.backend,
            Backend::File {
                seed_path: PathBuf::from("recipes.json")
            }
        );

        let config = config_from(&[
            ("RECIPES_BACKEND", "File"),
            ("RECIPES_SEED_FILE", "/data/seed.json"),
        ])
        .unwrap();
        assert_eq!(
            config.backend,
            Backend::File {
                seed_path: PathBuf::from("/data/seed.json")
            }
        );
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert_eq!(
            config_from(&[("RECIPES_BACKEND", "postgres")]),
            Err(ConfigError::MissingDatabaseUrl)
        );
        assert_eq!(
            config_from(&[("RECIPES_BACKEND", "postgres"), ("DATABASE_URL", "")]),
            Err(ConfigError::MissingDatabaseUrl)
        );

        let config = config_from(&[
            ("RECIPES_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/recipes"),
        ])
        .unwrap();
        assert_eq!(
            config.backend,
            Backend::Postgres {
                database_url: "postgres://localhost/recipes".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_backend() {
        assert_eq!(
            config_from(&[("RECIPES_BACKEND", "mongo")]),
            Err(ConfigError::UnknownBackend("mongo".to_string()))
        );
    }

    #[test]
    fn test_port() {
        assert_eq!(config_from(&[("PORT", "3000")]).unwrap().port, 3000);
        assert_eq!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
    }
}
