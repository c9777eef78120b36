//! Common error types for the books dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the dashboard crates
#[derive(Error, Debug)]
pub enum Error {
    /// A data source file does not exist
    #[error("Data source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// A required column is absent from a source's header row
    #[error("Required column '{column}' not found in {source_name}")]
    MissingColumn {
        source_name: &'static str,
        column: String,
    },

    /// No catalog rows survived validation and coercion
    #[error("Catalog is empty after validation ({raw_rows} raw rows, all dropped)")]
    EmptyCatalog { raw_rows: usize },

    /// A selected title has no catalog record
    ///
    /// Titles offered for selection come from the catalog itself, so this
    /// indicates a caller bug rather than a user-facing condition.
    #[error("No catalog record for title: {0}")]
    TitleNotFound(String),

    /// CSV decoding error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration file (wraps toml::de::Error)
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether this error must halt dashboard construction entirely
    ///
    /// Startup faults leave no partial view to render.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Error::SourceNotFound { .. }
                | Error::MissingColumn { .. }
                | Error::EmptyCatalog { .. }
                | Error::Csv(_)
                | Error::Io(_)
                | Error::Toml(_)
                | Error::Config(_)
        )
    }
}
