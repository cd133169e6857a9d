//! Configuration management module

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::model::Config;

/// Load configuration from an explicit path, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"toml\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.format, "toml");
        assert!(!config.parser.debug);
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[parser\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
