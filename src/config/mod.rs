//! Configuration module for Dompet
//!
//! - Path resolution for the settings file and the ledger file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DompetPaths;
pub use settings::Settings;
