//! Error handling for the roster system
//!
//! This module provides idiomatic Rust error types using thiserror for
//! better error messages and proper error chain handling.

use thiserror::Error;

/// Main error type for the roster system
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] crate::database::DatabaseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation and data-integrity errors raised by the seat assignment engine
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Roster is empty: nothing to draw")]
    EmptyRoster,

    #[error("The two speakers must be different members")]
    InvalidSelection,

    #[error("Speaker '{name}' not found among drawable members")]
    SpeakerNotFound { name: String },

    #[error("Seat {seat} is claimed more than once by fixed-seat members")]
    SeatConflict { seat: i32 },
}

impl DrawError {
    /// Whether the caller can fix this error by correcting its input.
    ///
    /// Seat conflicts indicate an upstream data-integrity violation and are
    /// not retryable; the remaining variants are user-correctable.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, DrawError::SeatConflict { .. })
    }
}

/// Errors from the export renderers
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Exported bytes are not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
