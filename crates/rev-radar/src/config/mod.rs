use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PROSPECT_CAP: usize = 1000;
pub const MAX_PROSPECT_CAP: usize = 100_000;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("RADAR_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let seed = match env::var("RADAR_SEED") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw))?,
            Err(_) => DEFAULT_SEED,
        };

        let prospect_cap = match env::var("RADAR_PROSPECT_CAP") {
            Ok(raw) => parse_prospect_cap(&raw)?,
            Err(_) => DEFAULT_PROSPECT_CAP,
        };

        let path = match env::var("RADAR_DATASET") {
            Ok(raw) if !raw.trim().is_empty() => Some(checked_dataset_path(raw.trim())?),
            _ => None,
        };

        let log_level = env::var("RADAR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig {
                path,
                seed,
                prospect_cap,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where prospects come from: a file on disk, or the seeded generator.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
    pub seed: u64,
    pub prospect_cap: usize,
}

impl DatasetConfig {
    pub fn with_path(mut self, path: &str) -> Result<Self, ConfigError> {
        self.path = Some(checked_dataset_path(path)?);
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            seed: DEFAULT_SEED,
            prospect_cap: DEFAULT_PROSPECT_CAP,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_prospect_cap(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|cap| (1..=MAX_PROSPECT_CAP).contains(cap))
        .ok_or_else(|| ConfigError::InvalidProspectCap(raw.to_string()))
}

fn checked_dataset_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let supported = Path::new(raw)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if supported {
        Ok(PathBuf::from(raw))
    } else {
        Err(ConfigError::UnsupportedDataset(raw.to_string()))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed(String),
    InvalidProspectCap(String),
    UnsupportedDataset(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed(value) => {
                write!(f, "RADAR_SEED must be a valid u64, got '{}'", value)
            }
            ConfigError::InvalidProspectCap(value) => write!(
                f,
                "RADAR_PROSPECT_CAP must be between 1 and {}, got '{}'",
                MAX_PROSPECT_CAP, value
            ),
            ConfigError::UnsupportedDataset(value) => {
                write!(f, "dataset '{}' must be a .csv or .json file", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
