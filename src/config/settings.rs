//! User settings for Dompet

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::DompetPaths;
use crate::error::DompetError;
use crate::models::Kind;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix printed before amounts in reports and the today queue
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file to use instead of `<data dir>/transaksi.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Kind preselected on a fresh entry form
    #[serde(default)]
    pub default_kind: Kind,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rp".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            ledger_file: None,
            default_kind: Kind::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] for that.
    pub fn load_or_create(paths: &DompetPaths) -> Result<Self, DompetError> {
        read_json(paths.settings_file()).map_err(|e| match e {
            DompetError::Storage(msg) => DompetError::Config(msg),
            other => other,
        })
    }

    pub fn save(&self, paths: &DompetPaths) -> Result<(), DompetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The ledger file to open, honoring the `ledger_file` override
    ///
    /// A relative override is resolved against the base directory.
    pub fn ledger_path(&self, paths: &DompetPaths) -> PathBuf {
        match &self.ledger_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.base_dir().join(path),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "Rp");
        assert_eq!(settings.default_kind, Kind::Income);
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "IDR ".into();
        settings.default_kind = Kind::Expense;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "IDR ");
        assert_eq!(loaded.default_kind, Kind::Expense);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(DompetError::Config(_))
        ));
    }

    #[test]
    fn test_ledger_path_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DompetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.ledger_path(&paths), paths.ledger_file());

        settings.ledger_file = Some(PathBuf::from("books/2024.csv"));
        assert_eq!(
            settings.ledger_path(&paths),
            temp_dir.path().join("books").join("2024.csv")
        );
    }
}
