//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Frame timing: one scheduler cycle per tick
pub const TICK_MS: u64 = 100;

/// Playfield framing (cells reserved for the box border on each edge)
pub const BORDER: u16 = 1;
pub const INFO_BAR_ROWS: u16 = 3;

/// Minimum terminal size the driver accepts at startup
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Star field
pub const STAR_COUNT: usize = 50;
pub const STAR_GLYPHS: &[char] = &['+', '*', '.', ':'];

/// Star blink phase lengths (ticks)
pub const BLINK_DIM_TICKS: u32 = 20;
pub const BLINK_NORMAL_TICKS: u32 = 3;
pub const BLINK_BOLD_TICKS: u32 = 10;

/// Ticks between era advances on the info bar
pub const ERA_TICKS: u32 = 15;

/// Movement model
pub const SPEED_DAMPING: f64 = 0.8;
pub const SPEED_LIMIT: f64 = 2.0;

/// Vertical speeds (rows per tick; negative is upward)
pub const DEBRIS_FALL_SPEED: f64 = 0.5;
pub const SHOT_ROW_SPEED: f64 = -0.3;

/// Rendering weight of a canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// One tick's worth of player input, snapshotted by the driver.
///
/// Deltas are directions (-1, 0, 1), not accumulated distances; holding a key
/// across several events within one tick still yields a single step of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub row_delta: i8,
    pub col_delta: i8,
    pub fire: bool,
    pub quit: bool,
    pub resized: bool,
}

impl Controls {
    pub fn is_idle(&self) -> bool {
        *self == Controls::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_controls_are_idle() {
        assert!(Controls::default().is_idle());
        let moved = Controls {
            col_delta: 1,
            ..Controls::default()
        };
        assert!(!moved.is_idle());
    }

    #[test]
    fn default_weight_is_normal() {
        assert_eq!(Weight::default(), Weight::Normal);
    }
}
