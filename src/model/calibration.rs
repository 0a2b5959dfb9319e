//! Map-scale calibration for georeferencing export.
//!
//! A calibration ties the raster to real-world units: the image's DPI
//! and the map scale in chains per inch, from which the "map units per
//! inch" (mpi) value is derived. Export is refused until a complete
//! calibration exists; constructing a [`ScaleCalibration`] *is* the
//! completeness proof.

use thiserror::Error;

/// Chains-per-inch to map-units-per-inch conversion factor.
///
/// One chain is 20.1168 metres, so a scale denominator given in chains
/// per inch converts to metres of ground per inch of map by this factor.
pub const CHAINS_PER_INCH_TO_MPI: f64 = 20.1168;

/// Errors from parsing calibration input.
///
/// Both are recoverable input-validation failures: the requesting flow
/// abandons the operation (no partial calibration is committed) and may
/// re-prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// A prompt answer was not a number.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Which input failed to parse ("dpi" or "scale").
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The image metadata reported no usable DPI.
    ///
    /// The host should prompt the user for a DPI value instead.
    #[error("image metadata has no usable DPI; a user-supplied value is required")]
    MissingDpi,
}

/// A complete scale calibration: DPI, map scale, and derived mpi.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCalibration {
    /// Dots per inch of the scanned map.
    pub dpi: f64,
    /// Map scale denominator in chains per inch, as entered by the user.
    /// Kept as text so the export echoes the input verbatim.
    pub scale: String,
    /// Map units per inch: `scale × 20.1168`.
    pub mpi: f64,
}

impl ScaleCalibration {
    /// Build a calibration from user-entered DPI and scale text.
    pub fn new(dpi_text: &str, scale_text: &str) -> Result<Self, CalibrationError> {
        let dpi = parse_field("dpi", dpi_text)?;
        if dpi <= 0.0 {
            return Err(CalibrationError::MissingDpi);
        }
        Self::from_dpi(dpi, scale_text)
    }

    /// Build a calibration from a metadata-supplied DPI and scale text.
    ///
    /// A non-positive or non-finite DPI means the metadata carried no
    /// real value (scanners commonly report zero); the caller should
    /// fall back to prompting the user.
    pub fn from_dpi(dpi: f64, scale_text: &str) -> Result<Self, CalibrationError> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(CalibrationError::MissingDpi);
        }
        let scale = parse_field("scale", scale_text)?;
        Ok(Self {
            dpi,
            scale: scale_text.trim().to_string(),
            mpi: scale * CHAINS_PER_INCH_TO_MPI,
        })
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, CalibrationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CalibrationError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_mpi_is_scale_times_conversion_factor() {
        let cal = ScaleCalibration::from_dpi(300.0, "5").unwrap();
        assert!((cal.mpi - 100.584).abs() < EPSILON);
        assert_eq!(cal.scale, "5");
        assert_eq!(cal.dpi, 300.0);
    }

    #[test]
    fn test_new_parses_dpi_text() {
        let cal = ScaleCalibration::new(" 600 ", "2.5").unwrap();
        assert_eq!(cal.dpi, 600.0);
        assert!((cal.mpi - 2.5 * CHAINS_PER_INCH_TO_MPI).abs() < EPSILON);
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let err = ScaleCalibration::new("lots", "5").unwrap_err();
        assert_eq!(
            err,
            CalibrationError::InvalidNumber {
                field: "dpi",
                value: "lots".to_string(),
            }
        );

        let err = ScaleCalibration::from_dpi(300.0, "five").unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::InvalidNumber { field: "scale", .. }
        ));
    }

    #[test]
    fn test_zero_dpi_metadata_requires_user_input() {
        assert_eq!(
            ScaleCalibration::from_dpi(0.0, "5").unwrap_err(),
            CalibrationError::MissingDpi
        );
        assert_eq!(
            ScaleCalibration::new("0", "5").unwrap_err(),
            CalibrationError::MissingDpi
        );
    }

    #[test]
    fn test_scale_text_is_echoed_trimmed() {
        let cal = ScaleCalibration::from_dpi(300.0, " 5 ").unwrap();
        assert_eq!(cal.scale, "5");
    }
}
