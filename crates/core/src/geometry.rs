//! Geometry module - axis-aligned rectangle intersection.

use crate::types::Rect;

/// Check whether two rectangles overlap.
///
/// Inequalities are strict: rectangles that only share an edge or a corner
/// do not intersect.
///
/// # Examples
///
/// ```
/// use tui_racer_core::intersects;
/// use tui_racer_types::Rect;
///
/// let a = Rect::new(0, 0, 10, 10);
/// assert!(intersects(&a, &Rect::new(5, 5, 15, 15)));
/// assert!(!intersects(&a, &Rect::new(10, 0, 20, 10)));
/// ```
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x_max > b.x_min && a.x_min < b.x_max && a.y_min < b.y_max && a.y_max > b.y_min
}

/// Check whether `inner` lies within the horizontal span `[left, right]`.
#[inline]
pub fn within_x(inner: &Rect, left: i32, right: i32) -> bool {
    inner.x_min >= left && inner.x_max <= right
}

/// Check whether `inner` lies within the vertical span `[top, bottom]`.
#[inline]
pub fn within_y(inner: &Rect, top: i32, bottom: i32) -> bool {
    inner.y_min >= top && inner.y_max <= bottom
}
