//! Error types for point export operations.

use thiserror::Error;

/// Errors that can occur during point export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing the export file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export requested before the scale calibration was set.
    ///
    /// Nothing is written: the export aborts before touching the
    /// filesystem so no partial file can exist.
    #[error("scale calibration is not set; set DPI and map scale before exporting")]
    CalibrationMissing,
}
