//! 2D affine matrices.

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Affine 2x3 matrix stored column-major as `[a, b, c, d, e, f]`:
///
/// ```text
/// | a c e |
/// | b d f |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x3 {
    mat: [f64; 6],
}

impl Matrix2x3 {
    pub const IDENTITY: Matrix2x3 = Matrix2x3 {
        mat: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(offset: Vector) -> Self {
        Self {
            mat: [1.0, 0.0, 0.0, 1.0, offset.x, offset.y],
        }
    }

    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            mat: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    pub fn scaling(factor: Vector) -> Self {
        Self {
            mat: [factor.x, 0.0, 0.0, factor.y, 0.0, 0.0],
        }
    }

    /// Matrix product `self * other` (apply `other` first).
    pub fn then(&self, other: &Matrix2x3) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.mat;
        let [a2, b2, c2, d2, e2, f2] = other.mat;
        Self {
            mat: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    /// Apply the matrix to a point.
    pub fn mul(&self, p: Vector) -> Vector {
        let [a, b, c, d, e, f] = self.mat;
        Vector::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Inverse, or `None` when the matrix is singular (e.g. zero scale).
    pub fn inverse(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.mat;
        let det = a * d - b * c;
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            mat: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * f - d * e) * inv,
                (b * e - a * f) * inv,
            ],
        })
    }
}

impl Default for Matrix2x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
