//! Axis-aligned rectangles and the pairwise predicates over them.

/// An axis-aligned rectangle with its origin at the top-left corner.
///
/// `y` grows downward, matching floor plan coordinates: the "top" edge
/// of a rectangle is `y` and the "bottom" edge is `y + h`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Center point `(cx, cy)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// The same rectangle turned by 90 degrees around its origin
    /// (width and height swapped).
    pub fn rotated(&self) -> Self {
        Self {
            w: self.h,
            h: self.w,
            ..*self
        }
    }

    /// Grows the rectangle by `margin` on every side, keeping the origin
    /// non-negative. Width and height grow by the full `2 * margin` even
    /// when the origin is clamped.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: (self.x - margin).max(0.0),
            y: (self.y - margin).max(0.0),
            w: self.w + margin * 2.0,
            h: self.h + margin * 2.0,
        }
    }
}

/// Returns `true` if `a` and `b` overlap once each trailing edge is pushed
/// out by `spacing`.
///
/// Uses the separating-axis short-circuit: the rectangles are disjoint as
/// soon as one side is fully clear of the other. Touching edges with
/// `spacing == 0` do not collide. The test is symmetric in `a` and `b`, and
/// `spacing` counts once per pair.
///
/// # Examples
///
/// ```
/// use u_layout::geometry::{collides, Rect};
///
/// let a = Rect::new(0.0, 0.0, 4.0, 2.0);
/// let b = Rect::new(5.0, 0.0, 4.0, 2.0);
/// assert!(!collides(&a, &b, 0.0));
/// assert!(collides(&a, &b, 2.0));
/// ```
pub fn collides(a: &Rect, b: &Rect, spacing: f64) -> bool {
    !(a.x + a.w + spacing <= b.x
        || b.x + b.w + spacing <= a.x
        || a.y + a.h + spacing <= b.y
        || b.y + b.h + spacing <= a.y)
}

/// Euclidean distance between the centers of two rectangles.
pub fn distance(a: &Rect, b: &Rect) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}
