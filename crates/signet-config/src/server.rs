use crate::{ConfigError, parse_flag, parse_or};

pub const DEFAULT_PORT: u16 = 3000;

/// Where user credentials are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local map, lost on restart.
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{other}', expected postgres or memory")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub storage_backend: StorageBackend,
    /// Prometheus recorder and `/metrics` route.
    pub metrics_enabled: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(lookup, "SERVER_PORT", DEFAULT_PORT)?,
            storage_backend: parse_or(lookup, "STORAGE_BACKEND", StorageBackend::default())?,
            metrics_enabled: parse_flag(lookup, "METRICS_ENABLED", true)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(&|_: &str| -> Option<String> { None }).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_metrics_switch() {
        for (raw, expected) in [("false", false), ("0", false), ("OFF", false), ("true", true), ("1", true)] {
            let lookup = |key: &str| (key == "METRICS_ENABLED").then(|| raw.to_string());
            assert_eq!(ServerConfig::from_lookup(&lookup).unwrap().metrics_enabled, expected, "{raw}");
        }

        let lookup = |key: &str| (key == "METRICS_ENABLED").then(|| "maybe".to_string());
        assert!(matches!(
            ServerConfig::from_lookup(&lookup),
            Err(ConfigError::InvalidValue { var: "METRICS_ENABLED", .. })
        ));
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("Memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }
}
