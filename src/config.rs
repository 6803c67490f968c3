use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".itineraryrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub columns: Columns,
    /// Wrap substituted spans in ANSI color escapes.
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Header names of the four lookup columns. Matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    #[serde(default = "default_name_column")]
    pub name: String,
    #[serde(default = "default_short_code_column")]
    pub short_code: String,
    #[serde(default = "default_long_code_column")]
    pub long_code: String,
    #[serde(default = "default_locality_column")]
    pub locality: String,
}

fn default_color() -> bool {
    true
}

fn default_name_column() -> String {
    "name".to_string()
}

fn default_short_code_column() -> String {
    "iata_code".to_string()
}

fn default_long_code_column() -> String {
    "icao_code".to_string()
}

fn default_locality_column() -> String {
    "municipality".to_string()
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: default_name_column(),
            short_code: default_short_code_column(),
            long_code: default_long_code_column(),
            locality: default_locality_column(),
        }
    }
}

impl Columns {
    /// All four header names, in name / short / long / locality order.
    pub fn all(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.short_code.as_str(),
            self.long_code.as_str(),
            self.locality.as_str(),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Column names must be non-empty and distinct ignoring case, otherwise
    /// two logical columns would resolve to the same header field.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in self.columns.all() {
            let normalized = column.trim().to_lowercase();
            if normalized.is_empty() {
                bail!("Invalid 'columns': column names must not be empty");
            }
            if !seen.insert(normalized) {
                bail!("Invalid 'columns': \"{}\" is used more than once", column);
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            from_file: true,
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Load and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
