//! Configuration module for v4api
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "V4API_SETTINGS_PATH";

/// Default locations searched for a settings file, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("v4api.yml"),
        PathBuf::from("config/v4api.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("v4api/v4api.yml"));
    }
    paths
}

/// Load settings from `explicit`, the settings path variable, or the
/// first default location that exists, then apply environment overrides.
/// Falls back to defaults when no file is found.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let from_env = std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from);

    let path = match (explicit, from_env) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(path)) if path.exists() => Some(path),
        _ => default_paths().into_iter().find(|p| p.exists()),
    };

    let mut settings = match path {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_must_exist() {
        assert!(load(Some(Path::new("/nonexistent/v4api.yml"))).is_err());
    }

    #[test]
    fn test_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v4api.yml");
        std::fs::write(&path, "output:\n  echo: false\n").unwrap();

        let settings = load(Some(&path)).unwrap();
        assert!(!settings.output.echo);
    }

    #[test]
    fn test_default_paths_order() {
        let paths = default_paths();
        assert_eq!(paths[0], PathBuf::from("v4api.yml"));
        assert_eq!(paths[1], PathBuf::from("config/v4api.yml"));
    }
}
