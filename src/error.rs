// src/error.rs

//! Error types for import rewriting
//!
//! Every failure is fatal for the file being processed. Messages carry the
//! plugin name and the module or transform reference that caused them so the
//! host can surface them next to the offending import.

use thiserror::Error;

/// Name prefixed to every error message
pub const PLUGIN_NAME: &str = "import-rewrite";

/// Result type for import rewriting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the rewrite engine
#[derive(Error, Debug)]
pub enum Error {
    /// A module is configured for rewriting but has no `transform` rule
    #[error("import-rewrite: transform option is required for module {module}")]
    Configuration { module: String },

    /// A `.js` transform reference could not be loaded
    #[error("import-rewrite: failed to load transform file {reference}: {reason}")]
    Load { reference: String, reason: String },

    /// A loaded transform reference does not export a function
    #[error("import-rewrite: expected transform function to be exported from {reference}")]
    Contract { reference: String },

    /// Whole-module import of a module configured with `prevent_full_import`
    #[error(
        "import-rewrite: import of entire module {module} not allowed due to preventFullImport setting"
    )]
    Policy { module: String },

    /// Failed to read a configuration file
    #[error("import-rewrite: failed to read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Configuration file is not valid TOML or JSON
    #[error("import-rewrite: failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}
