use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "benchenv.toml";
pub const ENV_PREFIX: &str = "BENCHENV";
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Separates entries of `BENCHENV_SEED`. Values are single-line, so a newline
/// never occurs inside a seed.
pub const SEED_LIST_SEPARATOR: &str = "\n";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    pub format: Option<LogFormat>,
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// PARAMETER file applied on top of the seeded variables.
    pub parameter_file: Option<PathBuf>,
    /// Where the variable block goes; stdout when unset.
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub dump_table: bool,
    /// Seed the registry with the environment benchenv was started in.
    #[serde(default)]
    pub capture_environment: bool,
    /// Built-in `KEY=value` variables.
    #[serde(default)]
    pub seed: Vec<String>,
    #[serde(default)]
    pub log: LogConfig,
}

/// Loads `path` (if present) and `BENCHENV_*` environment overrides.
///
/// Nested keys use a double underscore, e.g. `BENCHENV_LOG__FORMAT=json`.
/// `BENCHENV_SEED` holds one `KEY=value` seed per line.
pub fn load_config(path: &str) -> Result<AppConfig> {
    let mut config: AppConfig = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(SEED_LIST_SEPARATOR)
                .with_list_parse_key("seed"),
        )
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.log.format.is_none() {
        config.log.format = Some(LogFormat::Compact);
    }
    if config.log.filter.is_none() {
        config.log.filter = Some(DEFAULT_LOG_FILTER.to_string());
    }
}
