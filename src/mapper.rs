//! Device→image coordinate queries.
//!
//! The single source of truth for "is the pointer over the image": both
//! the live coordinate readout and point capture resolve device
//! coordinates through [`to_image_point`].

use crate::model::ImagePoint;
use crate::viewport::Viewport;

/// Map a device (surface) coordinate to image pixel space.
///
/// Applies the viewport's inverse transform to the homogeneous point
/// `(x, y, 1)`. Returns `None` when the transform is singular for this
/// frame (best-effort query, never an error path — the readout shows a
/// placeholder) or when the mapped point falls outside
/// `[0, image_width] × [0, image_height]`, bounds inclusive. Sub-pixel
/// precision is retained; rounding is the caller's display concern.
pub fn to_image_point(
    device_x: f64,
    device_y: f64,
    viewport: &Viewport,
    image_width: f64,
    image_height: f64,
) -> Option<ImagePoint> {
    let inverse = match viewport.inverse() {
        Ok(m) => m,
        Err(e) => {
            log::debug!("Suppressing pointer query: {}", e);
            return None;
        }
    };

    let (x, y) = inverse.apply(device_x, device_y);
    if x < 0.0 || y < 0.0 || x > image_width || y > image_height {
        return None;
    }
    Some(ImagePoint::new(x, y))
}

/// Map an image coordinate back to device space (forward transform).
///
/// Infallible: the accumulated matrix always exists even when its
/// inverse does not.
pub fn to_device_point(image_x: f64, image_y: f64, viewport: &Viewport) -> (f64, f64) {
    viewport.matrix().apply(image_x, image_y)
}
