//! mapdigit - Map digitising viewport core
//!
//! The affine-transform engine behind an interactive raster-map
//! viewer: pan/zoom/rotate a scanned map inside a display surface,
//! map pointer positions back to image pixels, capture named points,
//! and export them with a scale calibration as a `.georef` file.
//!
//! Windowing, menus, dialogs, and rendering are external collaborators:
//! hosts translate their native input into [`ViewerEvent`]s, feed them
//! to a [`ViewerController`], and resample the image through the
//! viewport's inverse-transform coefficients on redraw.

pub mod data;
pub mod event;
pub mod format;
pub mod mapper;
pub mod model;
pub mod transform;
pub mod viewport;

pub use data::{ImageInfo, LoadError};
pub use event::{EventOutcome, ViewerController, ViewerEvent};
pub use model::{ImagePoint, PointAnnotation, PointAnnotationStore, ScaleCalibration};
pub use transform::{AffineMatrix, TransformError};
pub use viewport::Viewport;
