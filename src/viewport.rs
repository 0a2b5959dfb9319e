//! Viewport state: the accumulated image→device transform.
//!
//! A `Viewport` owns exactly one [`AffineMatrix`] mapping image pixel
//! space to device (surface) pixel space. Every gesture composes a
//! delta matrix onto it; the inverse used for pointer queries and
//! redraw resampling is derived on demand, never cached.

use crate::transform::{AffineMatrix, TransformError};

/// Wheel-step zoom-in factor.
pub const ZOOM_IN_FACTOR: f64 = 1.25;

/// Wheel-step zoom-out factor. Near-reciprocal of [`ZOOM_IN_FACTOR`]
/// so alternating in/out gestures roughly cancel.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Wheel-step rotation in degrees.
pub const ROTATE_STEP_DEGREES: f64 = 5.0;

/// The image→device transform for one open image.
///
/// Created per image, reset to a fit-to-window transform on load and on
/// the reset gesture, mutated by every pan/zoom/rotate. The surface
/// extent is passed in at call time rather than cached, so window
/// resizes between events need no invalidation hook.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    mat_affine: AffineMatrix,
}

impl Viewport {
    /// Create a viewport with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the transform to identity.
    pub fn reset(&mut self) {
        self.mat_affine = AffineMatrix::IDENTITY;
    }

    /// Pan by `(dx, dy)` device pixels.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.compose(AffineMatrix::translation(dx, dy));
    }

    /// Zoom by `factor` about the device origin.
    ///
    /// Non-finite or non-positive factors would collapse the transform;
    /// they are dropped and logged instead of applied.
    pub fn scale_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("Ignoring degenerate zoom factor {}", factor);
            return;
        }
        self.compose(AffineMatrix::scaling(factor));
    }

    /// Zoom by `factor` keeping the device point `(cx, cy)` fixed.
    pub fn scale_at(&mut self, factor: f64, cx: f64, cy: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("Ignoring degenerate zoom factor {}", factor);
            return;
        }
        self.translate(-cx, -cy);
        self.scale_by(factor);
        self.translate(cx, cy);
    }

    /// Rotate by `degrees` about the device origin.
    pub fn rotate_by(&mut self, degrees: f64) {
        self.compose(AffineMatrix::rotation_degrees(degrees));
    }

    /// Rotate by `degrees` keeping the device point `(cx, cy)` fixed.
    pub fn rotate_at(&mut self, degrees: f64, cx: f64, cy: f64) {
        self.translate(-cx, -cy);
        self.rotate_by(degrees);
        self.translate(cx, cy);
    }

    /// Reset to the transform that fits the whole image inside the
    /// surface, preserving aspect ratio and centering on the slack axis.
    ///
    /// A zero-area image or surface (e.g. a window that has not been
    /// realized yet) leaves the transform unchanged. The aspect
    /// comparison cross-multiplies to avoid dividing by a zero extent.
    pub fn fit_to_window(
        &mut self,
        image_width: f64,
        image_height: f64,
        surface_width: f64,
        surface_height: f64,
    ) {
        let image_area = image_width * image_height;
        let surface_area = surface_width * surface_height;
        if !image_area.is_finite()
            || !surface_area.is_finite()
            || image_area <= 0.0
            || surface_area <= 0.0
        {
            log::debug!(
                "Skipping fit: degenerate geometry (image {}x{}, surface {}x{})",
                image_width,
                image_height,
                surface_width,
                surface_height
            );
            return;
        }

        self.reset();

        let scale;
        let mut offset_x = 0.0;
        let mut offset_y = 0.0;

        if surface_width * image_height > image_width * surface_height {
            // Surface is relatively wider: fit by height, center horizontally.
            scale = surface_height / image_height;
            offset_x = (surface_width - image_width * scale) / 2.0;
        } else {
            // Surface is relatively taller: fit by width, center vertically.
            scale = surface_width / image_width;
            offset_y = (surface_height - image_height * scale) / 2.0;
        }

        self.scale_by(scale);
        self.translate(offset_x, offset_y);
        log::debug!(
            "Fit {}x{} image into {}x{} surface: scale {:.4}, offset ({:.1}, {:.1})",
            image_width,
            image_height,
            surface_width,
            surface_height,
            scale,
            offset_x,
            offset_y
        );
    }

    /// The current image→device matrix.
    pub fn matrix(&self) -> &AffineMatrix {
        &self.mat_affine
    }

    /// The device→image matrix, computed on demand.
    ///
    /// Surfaces [`TransformError::SingularMatrix`] when the accumulated
    /// transform is degenerate; callers skip the dependent query for
    /// the frame rather than aborting the session.
    pub fn inverse(&self) -> Result<AffineMatrix, TransformError> {
        self.mat_affine.invert()
    }

    fn compose(&mut self, delta: AffineMatrix) {
        // New deltas act in the pre-transform frame: M_new = Δ · M.
        self.mat_affine = delta.multiply(&self.mat_affine);
    }
}
