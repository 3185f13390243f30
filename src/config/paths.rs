//! Path management for Dompet
//!
//! ## Path Resolution Order
//!
//! 1. `DOMPET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dompet` or `~/.config/dompet`
//! 3. Windows: `%APPDATA%\dompet`

use std::path::PathBuf;

use crate::error::DompetError;

/// Default ledger file name, shared with existing ledgers
pub const LEDGER_FILE_NAME: &str = "transaksi.csv";

/// Manages all paths used by Dompet
#[derive(Debug, Clone)]
pub struct DompetPaths {
    base_dir: PathBuf,
}

impl DompetPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/app-data directory can be determined.
    pub fn new() -> Result<Self, DompetError> {
        let base_dir = match std::env::var("DOMPET_DATA_DIR") {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DompetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/dompet/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join(LEDGER_FILE_NAME)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), DompetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DompetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DompetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DompetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                DompetError::Config("Could not determine home directory (HOME is not set)".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("dompet"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DompetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DompetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("dompet"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("transaksi.csv")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
