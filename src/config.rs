// src/config.rs
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Which post store the server runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Postgres,
    /// In-memory store seeded with the sample corpus.
    Demo,
}

impl DataSource {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "demo" => Ok(Self::Demo),
            other => Err(ConfigError::Invalid(format!(
                "DATA_SOURCE must be `postgres` or `demo`, got `{other}`"
            ))),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Demo => "demo",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    data_source: DataSource,
    frontend_dir: Option<PathBuf>,
    rate_limit_enabled: bool,
    db_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 16;

fn default_allowed_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://localhost:8000",
        "http://localhost:8080",
        "http://localhost:3001",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| {
            format!(
                "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}",
                user = var_or("DB_USER", "postgres"),
                password = var_or("DB_PASSWORD", ""),
                host = var_or("DB_HOST", "localhost"),
                port = var_or("DB_PORT", "5432"),
                name = var_or("DB_NAME", "blog_db"),
                sslmode = var_or("DB_SSLMODE", "disable"),
            )
        });

        let listen_addr = var("LISTEN_ADDR")
            .or_else(|| var("PORT").map(|port| format!("0.0.0.0:{}", port.trim())))
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let data_source = var("DATA_SOURCE")
            .map(|raw| DataSource::parse(&raw))
            .transpose()?
            .unwrap_or(DataSource::Postgres);

        let frontend_dir = var("FRONTEND_DIR").map(PathBuf::from);

        let rate_limit_enabled = var("RATE_LIMIT_ENABLED").is_none_or(|v| parse_flag(v.trim()));

        let db_max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                    ))
                })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            data_source,
            frontend_dir,
            rate_limit_enabled,
            db_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn data_source(&self) -> DataSource {
        self.data_source
    }

    /// Directory of the single-page app, when one should be served.
    pub fn frontend_dir(&self) -> Option<&PathBuf> {
        self.frontend_dir.as_ref()
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub const fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Same configuration with a different origin list; used by tests.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    #[must_use]
    pub fn with_rate_limit(mut self, enabled: bool) -> Self {
        self.rate_limit_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_frontend_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.frontend_dir = dir;
        self
    }
}
