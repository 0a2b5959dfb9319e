//! Georef TXT format implementation.
//!
//! A `.georef` file carries the calibration header followed by the
//! captured points, one per line, in capture order:
//!
//! ```text
//! dpi, mpi, scale
//! 300, 100.584, 5
//! Px, Py, Name
//! 12, 34, A
//! 56, 78,
//! ```
//!
//! Coordinates are written with zero decimal places; names are written
//! verbatim, including the empty name. The file is newline-terminated.

use std::path::{Path, PathBuf};

use crate::format::error::ExportError;
use crate::model::{PointAnnotationStore, ScaleCalibration};

/// File extension for exported point files.
pub const EXTENSION: &str = "georef";

/// Derive the export path for an image: same stem, `.georef` extension.
pub fn georef_path(image_path: &Path) -> PathBuf {
    image_path.with_extension(EXTENSION)
}

/// Render the store and calibration as georef text.
pub fn serialize(store: &PointAnnotationStore, calibration: &ScaleCalibration) -> String {
    let mut out = String::new();
    out.push_str("dpi, mpi, scale\n");
    out.push_str(&format!(
        "{}, {}, {}\n",
        calibration.dpi, calibration.mpi, calibration.scale
    ));
    out.push_str("Px, Py, Name\n");
    for point in store.iter() {
        out.push_str(&format!("{:.0}, {:.0}, {}\n", point.x, point.y, point.name));
    }
    out
}

/// Export the store to `path`.
///
/// Refuses with [`ExportError::CalibrationMissing`] when no calibration
/// has been set; the refusal happens before any file is created.
pub fn export(
    store: &PointAnnotationStore,
    calibration: Option<&ScaleCalibration>,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let calibration = calibration.ok_or(ExportError::CalibrationMissing)?;

    let content = serialize(store, calibration);
    std::fs::write(path, content)?;

    log::info!("Exported {} points to {:?}", store.len(), path);
    Ok(path.to_path_buf())
}
