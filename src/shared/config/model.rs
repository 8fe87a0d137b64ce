use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
            log_dir: default_log_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Scan independent chunks on the rayon pool; serial when disabled.
    #[serde(default = "default_parallel_chunks")]
    pub parallel_chunks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel_chunks: default_parallel_chunks(),
        }
    }
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_parallel_chunks() -> bool {
    true
}

/// Loads settings from an optional TOML file (path via `KOLOMDB_CONFIG`,
/// default `config`); missing file falls back to the defaults above.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("KOLOMDB_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
