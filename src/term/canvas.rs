//! Persistent character canvas shared by all animation tasks.
//!
//! Unlike an immediate-mode framebuffer, cells keep whatever was last drawn
//! into them; tasks erase their own frames before moving. The renderer diffs
//! the canvas against its previous flush, so a cell untouched between ticks
//! costs nothing on the wire.

use crate::term::viewport::Viewport;
use crate::types::Weight;

/// A single canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub weight: Weight,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            weight: Weight::Normal,
        }
    }
}

/// 2D grid of cells plus a pending sound cue.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    bell: bool,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            bell: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    /// Read a cell at absolute coordinates.
    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Read a cell at viewport-relative coordinates.
    pub fn cell_at(&self, vp: Viewport, row: i32, col: i32) -> Option<Cell> {
        let (abs_row, abs_col) = vp.to_absolute(row, col)?;
        self.get(abs_row, abs_col)
    }

    fn set(&mut self, row: u16, col: u16, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Write one glyph at viewport-relative coordinates; out-of-viewport
    /// writes are clipped, never wrapped.
    pub fn put(&mut self, vp: Viewport, row: i32, col: i32, ch: char, weight: Weight) {
        if let Some((abs_row, abs_col)) = vp.to_absolute(row, col) {
            self.set(abs_row, abs_col, Cell { ch, weight });
        }
    }

    /// Draw a multi-line frame with its top-left corner at (row, col).
    ///
    /// Fractional coordinates round to the nearest cell. Blank characters in
    /// the frame are transparent: the cells under them keep their content.
    pub fn draw_frame(&mut self, vp: Viewport, row: f64, col: f64, frame: &str) {
        self.blit(vp, row, col, frame, false);
    }

    /// Erase a previously drawn frame: every non-blank frame character blanks
    /// the cell under it. Blanks stay transparent here too, so overlapping
    /// neighbours are not wiped.
    pub fn erase_frame(&mut self, vp: Viewport, row: f64, col: f64, frame: &str) {
        self.blit(vp, row, col, frame, true);
    }

    fn blit(&mut self, vp: Viewport, row: f64, col: f64, frame: &str, erase: bool) {
        let start_row = row.round() as i32;
        let start_col = col.round() as i32;
        for (dy, line) in frame.lines().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let cell = if erase {
                    Cell::default()
                } else {
                    Cell {
                        ch,
                        weight: Weight::Normal,
                    }
                };
                if let Some((abs_row, abs_col)) =
                    vp.to_absolute(start_row + dy as i32, start_col + dx as i32)
                {
                    self.set(abs_row, abs_col, cell);
                }
            }
        }
    }

    /// Draw a box border on the outermost cells of the viewport.
    pub fn border(&mut self, vp: Viewport) {
        let w = vp.width();
        let h = vp.height();
        if w < 2 || h < 2 {
            return;
        }
        let weight = Weight::Normal;
        let row_max = i32::from(h - 1);
        let col_max = i32::from(w - 1);

        self.put(vp, 0, 0, '┌', weight);
        self.put(vp, 0, col_max, '┐', weight);
        self.put(vp, row_max, 0, '└', weight);
        self.put(vp, row_max, col_max, '┘', weight);

        for col in 1..col_max {
            self.put(vp, 0, col, '─', weight);
            self.put(vp, row_max, col, '─', weight);
        }
        for row in 1..row_max {
            self.put(vp, row, 0, '│', weight);
            self.put(vp, row, col_max, '│', weight);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Queue the terminal bell for the next flush.
    pub fn request_bell(&mut self) {
        self.bell = true;
    }

    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}
