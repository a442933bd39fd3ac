//! Geometry primitives shared by the object model and the IC builder.

pub mod matrix;
pub mod rect;
pub mod transform;
pub mod vector;

pub use matrix::Matrix2x3;
pub use rect::{clamp, is_on_rect_perimeter, nearest_point_on_rect};
pub use transform::Transform;
pub use vector::{v, Vector};
