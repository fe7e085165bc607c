//! Error types for the fixture generator.

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating or writing fixtures.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to create or write an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// A category has no entry in the spending catalog
    #[error("No spending profile configured for category '{category}'")]
    MissingProfile { category: String },

    /// A spending profile is unusable (bad range or empty vocabulary)
    #[error("Invalid spending profile for category '{category}': {message}")]
    InvalidProfile { category: String, message: String },

    /// A record was asked for a column it does not provide
    #[error("Unknown column '{column}'")]
    UnknownColumn { column: String },

    /// The history window reaches outside the supported calendar
    #[error("History of {days} days does not fit in the calendar")]
    HistoryOutOfRange { days: u32 },

    /// Expense generation was given no categories to pick from
    #[error("Cannot generate expenses without categories")]
    NoCategories,
}
