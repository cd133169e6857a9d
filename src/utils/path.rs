//! Input and output paths

use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Check if a file exists and is readable
pub fn check_file_readable(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    Ok(())
}

/// Read file content with proper error handling
pub fn read_file(path: &Path) -> Result<String> {
    check_file_readable(path)?;
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read statblock text from a file, or from stdin when no path (or `-`) is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let expanded = expand_tilde(&p.to_string_lossy());
            read_file(&expanded)
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read statblock from stdin")?;
            Ok(buffer)
        }
    }
}

/// Write file content, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/statblocks/rat.txt");
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_write_then_read_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("rat.txt");
        write_file(&path, "GIANT RAT\n").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "GIANT RAT\n");
    }
}
