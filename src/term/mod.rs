//! Terminal rendering layer.
//!
//! This is a small, game-oriented rendering stack: tasks draw into a
//! persistent character canvas through viewport regions, and once per tick
//! the driver flushes the canvas to the terminal backend.
//!
//! Goals:
//! - Keep `core` and the task state machines free of terminal I/O
//! - Persist cells between ticks so tasks only erase what they drew
//! - Flush diffs, not frames, to keep slow terminals responsive

pub mod canvas;
pub mod renderer;
pub mod viewport;

pub use canvas::{Canvas, Cell};
pub use renderer::TerminalRenderer;
pub use viewport::Viewport;
