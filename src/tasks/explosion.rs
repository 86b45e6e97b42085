//! Explosion effect at a struck hazard's center.

use crate::core::geometry::measure;
use crate::core::world::World;
use crate::sched::{Step, Task};
use crate::term::{Canvas, Viewport};

/// Burst animation, one frame per tick. All frames share one footprint.
pub const EXPLOSION_FRAMES: [&str; 4] = [
    "     \n  *  \n     ",
    "  .  \n (*) \n  .  ",
    " ' ` \n( * )\n . , ",
    "'   `\n     \n,   .",
];

pub struct ExplosionTask {
    vp: Viewport,
    row: f64,
    col: f64,
    index: usize,
    shown: Option<&'static str>,
}

impl ExplosionTask {
    /// The burst is centered on the given point; the stored position is the
    /// frame's top-left corner.
    pub fn new(vp: Viewport, center_row: f64, center_col: f64) -> Self {
        let (height, width) = measure(EXPLOSION_FRAMES[0]);
        Self {
            vp,
            row: center_row - f64::from(height) / 2.0,
            col: center_col - f64::from(width) / 2.0,
            index: 0,
            shown: None,
        }
    }
}

impl Task for ExplosionTask {
    fn resume(&mut self, _world: &mut World, canvas: &mut Canvas) -> Step {
        if let Some(prev) = self.shown.take() {
            canvas.erase_frame(self.vp, self.row, self.col, prev);
        }
        let Some(frame) = EXPLOSION_FRAMES.get(self.index) else {
            return Step::Done;
        };
        if self.index == 0 {
            canvas.request_bell();
        }
        canvas.draw_frame(self.vp, self.row, self.col, frame);
        self.shown = Some(frame);
        self.index += 1;
        Step::Yield
    }
}
