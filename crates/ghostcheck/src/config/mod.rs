use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::directory::DEFAULT_PAGE_SIZE;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the directory service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub saved: SavedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) if environment == AppEnvironment::Development => LogFormat::Pretty,
            Err(_) => LogFormat::Compact,
        };

        let page_size = match env::var("GHOSTCHECK_PAGE_SIZE") {
            Ok(value) => parse_page_size(&value)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let sources = CatalogSources::from_paths(
            env::var_os("GHOSTCHECK_COMPANIES_CSV").map(PathBuf::from),
            env::var_os("GHOSTCHECK_JOBS_CSV").map(PathBuf::from),
        )?;

        let saved_dir = env::var_os("GHOSTCHECK_SAVED_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".ghostcheck"));

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            catalog: CatalogConfig { sources, page_size },
            saved: SavedConfig { dir: saved_dir },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Where the listing snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSources {
    Sample,
    Csv {
        companies: PathBuf,
        jobs: PathBuf,
    },
}

impl CatalogSources {
    /// Both exports or neither; a lone path is a configuration mistake.
    pub fn from_paths(
        companies: Option<PathBuf>,
        jobs: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match (companies, jobs) {
            (Some(companies), Some(jobs)) => Ok(Self::Csv { companies, jobs }),
            (None, None) => Ok(Self::Sample),
            _ => Err(ConfigError::IncompleteCatalog),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub sources: CatalogSources,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct SavedConfig {
    pub dir: PathBuf,
}

fn parse_page_size(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPageSize,
    InvalidLogFormat(String),
    IncompleteCatalog,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPageSize => {
                write!(f, "GHOSTCHECK_PAGE_SIZE must be a positive integer")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT '{}' must be compact or pretty", value)
            }
            ConfigError::IncompleteCatalog => write!(
                f,
                "GHOSTCHECK_COMPANIES_CSV and GHOSTCHECK_JOBS_CSV must be set together"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPageSize
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::IncompleteCatalog => None,
        }
    }
}
