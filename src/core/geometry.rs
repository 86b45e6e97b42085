//! Frame measurement and axis-aligned collision boxes.
//!
//! All boxes use half-open intervals: a box occupies rows
//! `[top, top + height)` and columns `[left, left + width)`. Two boxes that
//! merely touch along an edge do not overlap.

/// Measure a multi-line frame: (rows, cols).
///
/// Rows is the line count, cols the widest line in characters. Trailing
/// newlines do not add a row; an empty frame measures (0, 0).
pub fn measure(frame: &str) -> (u16, u16) {
    let mut rows: u16 = 0;
    let mut cols: u16 = 0;
    for line in frame.lines() {
        rows += 1;
        cols = cols.max(line.chars().count() as u16);
    }
    (rows, cols)
}

/// Axis-aligned box in playfield coordinates (fractional rows allowed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(top: f64, left: f64, height: f64, width: f64) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// Whether a point falls inside the box (half-open on both axes).
    pub fn contains(&self, row: f64, col: f64) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }

    /// Whether two boxes overlap in both axes (half-open on both axes).
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.top < other.top + other.height
            && other.top < self.top + self.height
            && self.left < other.left + other.width
            && other.left < self.left + self.width
    }

    pub fn center(&self) -> (f64, f64) {
        (self.top + self.height / 2.0, self.left + self.width / 2.0)
    }
}
