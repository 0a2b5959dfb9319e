//! Data model: image-space points and scale calibration.

mod calibration;
mod point;

pub use calibration::{CHAINS_PER_INCH_TO_MPI, CalibrationError, ScaleCalibration};
pub use point::{ImagePoint, PointAnnotation, PointAnnotationStore};
