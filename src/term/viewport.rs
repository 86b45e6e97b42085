//! Screen regions.
//!
//! A viewport is a rectangle of the shared canvas. Tasks draw in coordinates
//! relative to their viewport's top-left corner; the box border occupies the
//! outermost row and column on each side, so the usable interior starts at
//! (1, 1).

/// A rectangular region of the canvas, in absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top: u16,
    left: u16,
    height: u16,
    width: u16,
}

impl Viewport {
    pub fn new(top: u16, left: u16, height: u16, width: u16) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// The whole screen as one viewport.
    pub fn screen(width: u16, height: u16) -> Self {
        Self::new(0, 0, height, width)
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Largest row index inside the viewport.
    pub fn row_max(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Largest column index inside the viewport.
    pub fn col_max(&self) -> u16 {
        self.width.saturating_sub(1)
    }

    /// Split off a full-width bar of `rows` from the bottom.
    ///
    /// Returns (rest, bar). The bar is clamped to the available height.
    pub fn split_bottom(&self, rows: u16) -> (Viewport, Viewport) {
        let rows = rows.min(self.height);
        let rest = Viewport::new(self.top, self.left, self.height - rows, self.width);
        let bar = Viewport::new(self.top + self.height - rows, self.left, rows, self.width);
        (rest, bar)
    }

    /// Translate viewport-relative coordinates to absolute canvas cells.
    ///
    /// `None` when the point lies outside the viewport.
    pub fn to_absolute(&self, row: i32, col: i32) -> Option<(u16, u16)> {
        if row < 0 || col < 0 || row >= i32::from(self.height) || col >= i32::from(self.width) {
            return None;
        }
        Some((self.top + row as u16, self.left + col as u16))
    }
}
