use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DATA_FILE_ENV: &str = "ANIME_INVENTORY_DATA";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    data_file: Option<PathBuf>,
}

/// Picks the backing file: command line, then environment, then the config
/// file, then `data.json` in the working directory.
pub fn get_data_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_path(
        cli_override,
        env::var(DATA_FILE_ENV).ok(),
        &get_config_path(),
    )
}

fn resolve_data_path(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    config_path: &Path,
) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }

    if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(path);
    }

    if config_path.exists() {
        match read_config(config_path) {
            Ok(ConfigFile {
                data_file: Some(path),
            }) => return path,
            Ok(_) => {}
            Err(e) => warn!("Ignoring config file: {e:#}"),
        }
    }

    PathBuf::from(DEFAULT_DATA_FILE)
}

fn read_config(config_path: &Path) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config = toml::from_str(&config_content)
        .with_context(|| format!("Invalid config file {}", config_path.display()))?;
    Ok(config)
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("anime-inventory"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
