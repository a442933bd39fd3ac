//! Placement of an axis-aligned box: position, size, rotation and scale.

use serde::{Deserialize, Serialize};

use super::matrix::Matrix2x3;
use super::vector::Vector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pos: Vector,
    size: Vector,
    /// Rotation in radians.
    #[serde(default)]
    angle: f64,
    #[serde(default = "unit_scale")]
    scale: Vector,
}

fn unit_scale() -> Vector {
    Vector::new(1.0, 1.0)
}

impl Transform {
    pub fn new(pos: Vector, size: Vector) -> Self {
        Self {
            pos,
            size,
            angle: 0.0,
            scale: unit_scale(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vector) {
        self.pos = pos;
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn set_size(&mut self, size: Vector) {
        self.size = size;
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    pub fn scale(&self) -> Vector {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vector) {
        self.scale = scale;
    }

    /// Local-to-parent matrix: translate, then rotate, then scale.
    pub fn matrix(&self) -> Matrix2x3 {
        Matrix2x3::translation(self.pos)
            .then(&Matrix2x3::rotation(self.angle))
            .then(&Matrix2x3::scaling(self.scale))
    }

    pub fn inverse_matrix(&self) -> Option<Matrix2x3> {
        self.matrix().inverse()
    }

    /// Whether a parent-space point lies inside (or on) the box.
    pub fn contains(&self, p: Vector) -> bool {
        let Some(inv) = self.inverse_matrix() else {
            return false;
        };
        let local = inv.mul(p);
        local.x.abs() <= self.size.x / 2.0 && local.y.abs() <= self.size.y / 2.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vector::ZERO, Vector::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::v;

    #[test]
    fn test_default_is_identity_placement() {
        let t = Transform::default();
        assert_eq!(t.matrix(), Matrix2x3::IDENTITY);
        assert_eq!(t.size(), Vector::ZERO);
    }

    #[test]
    fn test_contains_respects_position() {
        let t = Transform::new(v(100.0, 0.0), v(50.0, 20.0));
        assert!(t.contains(v(120.0, 5.0)));
        assert!(!t.contains(v(0.0, 0.0)));
    }
}
