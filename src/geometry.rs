//! Rectangles, the bounding field, and overlap measures.
//!
//! Corner convention: `(x1, y1)` is the top-left corner and `(x2, y2)` the
//! bottom-right corner, with y growing upward. A well-formed rectangle
//! therefore has `x1 <= x2` and `y2 <= y1`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle in integer field units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x1: i64,
    /// Top edge.
    pub y1: i64,
    /// Right edge.
    pub x2: i64,
    /// Bottom edge.
    pub y2: i64,
}

impl Rect {
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent. Saturates for corners further apart than `i64` spans.
    pub fn width(&self) -> i64 {
        self.x2.saturating_sub(self.x1)
    }

    /// Vertical extent. Saturates like [`Rect::width`].
    pub fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y2)
    }

    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// Whether the corners follow the top-left / bottom-right convention.
    pub fn is_normalized(&self) -> bool {
        self.x1 <= self.x2 && self.y2 <= self.y1
    }

    /// Returns a copy shifted by `(dx, dy)`. Both corners move together.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// Whether the rectangle's size alone fits in the field, wherever it
    /// currently sits.
    pub fn fits_within(&self, field: &Field) -> bool {
        self.width() <= field.width && self.height() <= field.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// The bounding box `[0, width] x [0, height]` rectangles must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Extent along the x-axis.
    pub width: i64,
    /// Extent along the y-axis.
    pub height: i64,
}

impl Field {
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Whether `rect` lies fully inside the field.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x1 >= 0
            && rect.x2 <= self.width
            && rect.y2 >= 0
            && rect.y1 <= self.height
            && rect.is_normalized()
    }
}

/// Area shared by two rectangles. Zero when they are disjoint on either
/// axis, including when they only touch along an edge.
pub fn overlap_area(a: &Rect, b: &Rect) -> i64 {
    let x_overlap = (a.x2.min(b.x2) - a.x1.max(b.x1)).max(0);
    let y_overlap = (a.y1.min(b.y1) - a.y2.max(b.y2)).max(0);
    x_overlap * y_overlap
}

/// Sum of [`overlap_area`] over all unordered pairs. O(k^2).
pub fn total_intersection_area(rects: &[Rect]) -> i64 {
    let mut total = 0;
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            total += overlap_area(a, b);
        }
    }
    total
}
