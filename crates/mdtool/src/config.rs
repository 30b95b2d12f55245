//! Config file discovery and bootstrapping

use std::fs;
use std::path::{Path, PathBuf};

use mdtool_core::Config;

use crate::prelude::*;

/// `~/.config/mdtool/config.yaml`
pub fn default_path() -> Result<PathBuf> {
    let home = dirs_next::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(path_under(&home))
}

fn path_under(home: &Path) -> PathBuf {
    home.join(".config").join("mdtool").join("config.yaml")
}

/// Load the config from `explicit`, or from the default location
///
/// A missing default file is created from the built-in document first. A
/// missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.to_path_buf()).into());
            }
            read(path)
        }
        None => {
            let path = default_path()?;
            bootstrap(&path)?;
            read(&path)
        }
    }
}

/// Write the default document to `path` unless a file is already there
///
/// Returns `true` when the file was created.
pub fn bootstrap(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| f!("Failed to create config directory {}", dir.display()))?;
    }
    fs::write(path, Config::default_yaml())
        .with_context(|| f!("Failed to write default config to {}", path.display()))?;
    log::debug!("Bootstrapped config at {}", path.display());

    Ok(true)
}

fn read(path: &Path) -> Result<Config> {
    log::debug!("Using config {}", path.display());
    let yaml = fs::read_to_string(path)
        .with_context(|| f!("Failed to read config {}", path.display()))?;
    Config::from_yaml_str(&yaml)
        .with_context(|| f!("Invalid config {}", path.display()))
}
