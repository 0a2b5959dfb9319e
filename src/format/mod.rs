//! Point export formats.
//!
//! Currently one format exists: the `.georef` text file pairing a scale
//! calibration with the captured image-space points.

mod error;
pub mod georef;

pub use error::ExportError;
