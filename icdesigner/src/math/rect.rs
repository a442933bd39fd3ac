//! Rectangle helpers used when snapping ports to a box outline.

use super::vector::Vector;

pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

/// Nearest point on the outline of the axis-aligned rectangle spanned by
/// `bl` (bottom-left) and `tr` (top-right).
///
/// Points outside the rectangle are clamped onto it; points inside are pushed
/// to the closest edge so the result always lies on the perimeter.
pub fn nearest_point_on_rect(bl: Vector, tr: Vector, pos: Vector) -> Vector {
    if pos.x < bl.x {
        return Vector::new(bl.x, clamp(pos.y, bl.y, tr.y));
    }
    if pos.x > tr.x {
        return Vector::new(tr.x, clamp(pos.y, bl.y, tr.y));
    }
    if pos.y < bl.y {
        return Vector::new(clamp(pos.x, bl.x, tr.x), bl.y);
    }
    if pos.y > tr.y {
        return Vector::new(clamp(pos.x, bl.x, tr.x), tr.y);
    }

    // Inside
    let to_left = pos.x - bl.x;
    let to_right = tr.x - pos.x;
    let to_bottom = pos.y - bl.y;
    let to_top = tr.y - pos.y;
    let nearest = to_left.min(to_right).min(to_bottom).min(to_top);
    if nearest == to_left {
        Vector::new(bl.x, pos.y)
    } else if nearest == to_right {
        Vector::new(tr.x, pos.y)
    } else if nearest == to_bottom {
        Vector::new(pos.x, bl.y)
    } else {
        Vector::new(pos.x, tr.y)
    }
}

/// Whether `p` lies on the outline of the rectangle, within `epsilon`.
pub fn is_on_rect_perimeter(bl: Vector, tr: Vector, p: Vector, epsilon: f64) -> bool {
    let within_x = p.x >= bl.x - epsilon && p.x <= tr.x + epsilon;
    let within_y = p.y >= bl.y - epsilon && p.y <= tr.y + epsilon;
    let on_vertical = (p.x - bl.x).abs() <= epsilon || (p.x - tr.x).abs() <= epsilon;
    let on_horizontal = (p.y - bl.y).abs() <= epsilon || (p.y - tr.y).abs() <= epsilon;
    (on_vertical && within_y) || (on_horizontal && within_x)
}
