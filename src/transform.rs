//! Homogeneous 2D affine transform matrix.
//!
//! The 3×3 matrix type underlying the viewport. All viewport gestures
//! (pan, zoom, rotate) are folded into a single accumulated matrix of
//! this type, and the device→image mapping is its inverse.

use thiserror::Error;

/// Determinant magnitude below which a matrix is treated as singular.
const MIN_DETERMINANT: f64 = 1e-12;

/// Errors from transform matrix operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// The matrix collapses a dimension and has no inverse.
    ///
    /// Recoverable: callers skip the dependent query for the frame and
    /// the session continues.
    #[error("matrix is singular (determinant {determinant:e}), cannot invert")]
    SingularMatrix {
        /// Determinant of the linear part at the time of the failure.
        determinant: f64,
    },
}

/// A 2D affine transform as a 3×3 homogeneous matrix.
///
/// Row-major storage; the bottom row is always `(0, 0, 1)` — every
/// constructor and every product of two affine matrices preserves it.
/// Value type: operations return new matrices rather than mutating,
/// so snapshots handed to a render path can never alias viewer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    m: [[f64; 3]; 3],
}

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Create the identity transform.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a pure translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][2] = dx;
        m[1][2] = dy;
        Self { m }
    }

    /// Create a uniform scale by `factor` on both axes.
    pub fn scaling(factor: f64) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][0] = factor;
        m[1][1] = factor;
        Self { m }
    }

    /// Create a rotation by `degrees`.
    ///
    /// With the device Y axis pointing down (the usual raster
    /// convention), positive degrees rotate clockwise on screen. Hosts
    /// rendering with a math-up Y axis should negate the angle.
    pub fn rotation_degrees(degrees: f64) -> Self {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let mut m = Self::IDENTITY.m;
        m[0][0] = cos;
        m[1][0] = sin;
        m[0][1] = -sin;
        m[1][1] = cos;
        Self { m }
    }

    /// Matrix product `self · rhs`.
    ///
    /// Used as `delta.multiply(&current)`: the delta acts in the frame
    /// *before* the already-accumulated transform, which is what makes
    /// repeated anchored scales and rotations behave correctly.
    pub fn multiply(&self, rhs: &AffineMatrix) -> AffineMatrix {
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[row][k] * rhs.m[k][col]).sum();
            }
        }
        AffineMatrix { m: out }
    }

    /// Invert the matrix.
    ///
    /// Exploits the affine structure: for `M = [A t; 0 1]` the inverse
    /// is `[A⁻¹ -A⁻¹t; 0 1]`. Fails when the 2×2 linear part is
    /// (numerically) singular, e.g. after a scale of zero.
    pub fn invert(&self) -> Result<AffineMatrix, TransformError> {
        let [[a, b, tx], [c, d, ty], _] = self.m;
        let det = a * d - b * c;
        if !det.is_finite() || det.abs() < MIN_DETERMINANT {
            return Err(TransformError::SingularMatrix { determinant: det });
        }

        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(AffineMatrix {
            m: [
                [ia, ib, -(ia * tx + ib * ty)],
                [ic, id, -(ic * tx + id * ty)],
                [0.0, 0.0, 1.0],
            ],
        })
    }

    /// Apply the transform to the point `(x, y)`.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m[0][0] * x + self.m[0][1] * y + self.m[0][2],
            self.m[1][0] * x + self.m[1][1] * y + self.m[1][2],
        )
    }

    /// The six affine coefficients `(a, b, c, d, e, f)` in row-major
    /// order, as consumed by raster resamplers that map output pixels
    /// back into source space.
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.m[0][0],
            self.m[0][1],
            self.m[0][2],
            self.m[1][0],
            self.m[1][1],
            self.m[1][2],
        ]
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
