//! Configuration loading
//!
//! The suggestion catalog, model catalog, filter set, and greeting copy are
//! injected configuration rather than hardcoded constants, so tests can
//! substitute arbitrary catalogs without touching the state-model logic.
//!
//! Lookup order: an explicit `--config` path wins; otherwise
//! `$XDG_CONFIG_HOME/nirmala/config.toml` is used when present; otherwise
//! the built-in defaults apply. A missing default file is fine, a malformed
//! file is a startup error.

mod types;

pub use types::{Config, FilterConfig, ScreenConfig};

use std::path::{Path, PathBuf};

use crate::error::NirmalaError;

/// Load configuration, preferring an explicit path over the default location
pub fn load(override_path: Option<&Path>) -> Result<Config, NirmalaError> {
    let config = match override_path {
        Some(path) => parse_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => parse_file(&path)?,
            _ => Config::default(),
        },
    };
    validate(&config)?;
    Ok(config)
}

/// Default config file location (`~/.config/nirmala/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nirmala").join("config.toml"))
}

fn parse_file(path: &Path) -> Result<Config, NirmalaError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NirmalaError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| NirmalaError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject configs that would break composer invariants at runtime
fn validate(config: &Config) -> Result<(), NirmalaError> {
    if config.models.is_empty() {
        return Err(NirmalaError::EmptyModelCatalog);
    }
    for (index, filter) in config.filters.iter().enumerate() {
        let duplicated = config.filters[..index]
            .iter()
            .any(|earlier| earlier.name == filter.name);
        if duplicated {
            return Err(NirmalaError::DuplicateFilter(filter.name.clone()));
        }
    }
    Ok(())
}
