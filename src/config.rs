//! Configuration manager for userbase.

use std::fs::File;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_PORT: u16 = 1323;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL: &str = "DATABASE_URL";
const CONFIG_PATH: &str = "CONFIG_PATH";
const PORT: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Interface to listen on.
    pub address: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Expose Prometheus metrics on `/metrics`.
    pub metrics: bool,
    /// Related to PostgreSQL configuration.
    #[serde(skip_serializing)]
    pub postgres: Postgres,
}

/// PostgreSQL configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Postgres {
    /// Connection string, `DATABASE_URL` takes precedence.
    pub url: Option<String>,
    /// Maximum pool connections.
    pub pool_size: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            metrics: false,
            postgres: Postgres::default(),
        }
    }
}

impl Default for Postgres {
    fn default() -> Self {
        Self {
            url: None,
            pool_size: crate::database::DEFAULT_POOL_SIZE,
        }
    }
}

impl Configuration {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Reads the YAML file from `CONFIG_PATH` or the default location, then
    /// applies environment overrides.
    pub fn read(self) -> Self {
        let file_path = if let Ok(path) = std::env::var(CONFIG_PATH) {
            PathBuf::from(path)
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        self.load(&file_path)
            .with_env(|key| std::env::var(key).ok())
    }

    /// Parse `path`, falling back to defaults when it is missing or invalid.
    fn load(&self, path: &Path) -> Self {
        match File::open(path) {
            Ok(file) => match serde_yaml::from_reader(file) {
                Ok(config) => config,
                Err(err) => self.error(path, err),
            },
            Err(err) => self.error(path, err),
        }
    }

    /// Apply `DATABASE_URL` and `PORT` overrides.
    fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var(DATABASE_URL).filter(|url| !url.is_empty()) {
            self.postgres.url = Some(url);
        }

        if let Some(port) = var(PORT) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(err) => {
                    tracing::warn!(%port, error = %err, "ignoring invalid `PORT`")
                },
            }
        }

        self
    }

    /// Return a default configuration as fallback.
    fn error(&self, path: &Path, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, path = %path.display(), "configuration file not loaded, using defaults");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:1323");
        assert_eq!(config.postgres.url, None);
        assert_eq!(config.postgres.pool_size, 10);
        assert!(!config.metrics);
    }

    #[test]
    fn test_partial_yaml() {
        let config: Configuration =
            serde_yaml::from_str("port: 8080\npostgres:\n  pool_size: 2\n")
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.postgres.pool_size, 2);
        assert_eq!(config.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_env_overrides() {
        let config = Configuration::default().with_env(|key| match key {
            DATABASE_URL => Some("postgres://localhost/users".into()),
            PORT => Some("4000".into()),
            _ => None,
        });
        assert_eq!(
            config.postgres.url.as_deref(),
            Some("postgres://localhost/users")
        );
        assert_eq!(config.port, 4000);

        let config =
            Configuration::default().with_env(|_| Some("not a port".into()));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Configuration::default().load(&dir.path().join("missing.yaml"));
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "port: [not, a, port]\n").unwrap();

        let config = Configuration::default().load(&path);
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "port: 9000\nmetrics: true\npostgres:\n  url: postgres://file/db\n  pool_size: 3\n",
        )
        .unwrap();

        let config = Configuration::default().load(&path);
        assert_eq!(config.port, 9000);
        assert!(config.metrics);
        assert_eq!(config.postgres.url.as_deref(), Some("postgres://file/db"));
        assert_eq!(config.postgres.pool_size, 3);

        let config = config.with_env(|key| match key {
            DATABASE_URL => Some("postgres://env/db".into()),
            _ => None,
        });
        assert_eq!(config.postgres.url.as_deref(), Some("postgres://env/db"));
        assert_eq!(config.port, 9000);
    }
}
