//! Read-only facts about the external image source.
//!
//! The viewport never touches pixel data; decoding and resampling
//! belong to the host. All the core needs is the pixel extent and,
//! for calibration, whatever DPI the metadata carried.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from probing an image file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or decoded far enough to read
    /// its dimensions.
    #[error("failed to read image dimensions from {path:?}")]
    Probe {
        /// The file that failed.
        path: PathBuf,
        /// Decoder-level cause.
        #[source]
        source: image::ImageError,
    },
}

/// Dimensions and DPI metadata of an open image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Dots per inch from metadata, when present and meaningful.
    /// Scanners commonly report zero; that is normalized to `None`
    /// and the calibration flow prompts the user instead.
    pub dpi: Option<f64>,
}

impl ImageInfo {
    /// Describe an image by its pixel extent, with no DPI metadata.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpi: None,
        }
    }

    /// Attach DPI metadata. Zero or negative values mean "not set"
    /// and are dropped.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = (dpi.is_finite() && dpi > 0.0).then_some(dpi);
        self
    }

    /// Probe an image file for its dimensions without decoding pixels.
    ///
    /// DPI is left unset: the `image` crate does not surface density
    /// metadata, so hosts that have it (or prompt for it) attach it
    /// via [`ImageInfo::with_dpi`].
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let (width, height) = image::image_dimensions(path).map_err(|source| LoadError::Probe {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Probed {:?}: {}x{}", path, width, height);
        Ok(Self::new(width, height))
    }

    /// Width as `f64`, for transform arithmetic.
    pub fn width_f(&self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for transform arithmetic.
    pub fn height_f(&self) -> f64 {
        f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_dpi() {
        let info = ImageInfo::new(800, 600);
        assert_eq!(info.width, 800);
        assert_eq!(info.height, 600);
        assert_eq!(info.dpi, None);
    }

    #[test]
    fn test_with_dpi_drops_meaningless_values() {
        assert_eq!(ImageInfo::new(10, 10).with_dpi(300.0).dpi, Some(300.0));
        assert_eq!(ImageInfo::new(10, 10).with_dpi(0.0).dpi, None);
        assert_eq!(ImageInfo::new(10, 10).with_dpi(-72.0).dpi, None);
        assert_eq!(ImageInfo::new(10, 10).with_dpi(f64::NAN).dpi, None);
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let result = ImageInfo::from_file(Path::new("/nonexistent/map.png"));
        assert!(matches!(result, Err(LoadError::Probe { .. })));
    }
}
