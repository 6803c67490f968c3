use std::{
    env, fs,
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Columns, default_config_json};

/// Outcome of writing the default config into a directory.
#[derive(Debug, PartialEq, Eq)]
enum Scaffold {
    Created,
    Exists,
}

pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    match scaffold_config(&cwd)? {
        Scaffold::Exists => {
            eprintln!(
                "Error: {} already exists, remove it to start over",
                CONFIG_FILE_NAME
            );
            Ok(ExitStatus::Failure)
        }
        Scaffold::Created => {
            eprintln!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
            eprintln!(
                "  lookup columns: {}",
                Columns::default().all().join(", ").dimmed()
            );
            Ok(ExitStatus::Success)
        }
    }
}

/// Write the default config into `dir` unless one is already there.
fn scaffold_config(dir: &Path) -> Result<Scaffold> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(Scaffold::Exists);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(Scaffold::Created)
}
