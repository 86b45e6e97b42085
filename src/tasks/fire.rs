//! Projectile task.
//!
//! Three beats: a muzzle spark, a flash, then free flight at fixed velocity.
//! In flight the shot probes the registry at its exact position each tick;
//! the first hit posts a notice for the struck hazard and ends the shot in
//! the same cycle, before anything more is drawn.

use crate::core::world::World;
use crate::sched::{Step, Task};
use crate::term::{Canvas, Viewport};
use crate::types::{Weight, SHOT_ROW_SPEED};

enum Phase {
    Spark,
    Flash,
    Flight,
}

pub struct FireTask {
    vp: Viewport,
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    phase: Phase,
    belled: bool,
}

impl FireTask {
    /// Standard upward shot from the player's nose.
    pub fn new(vp: Viewport, row: f64, col: f64) -> Self {
        Self::with_velocity(vp, row, col, SHOT_ROW_SPEED, 0.0)
    }

    pub fn with_velocity(vp: Viewport, row: f64, col: f64, row_speed: f64, col_speed: f64) -> Self {
        Self {
            vp,
            row,
            col,
            row_speed,
            col_speed,
            phase: Phase::Spark,
            belled: false,
        }
    }

    fn glyph(&self) -> char {
        if self.col_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn put(&self, canvas: &mut Canvas, ch: char) {
        let row = self.row.round() as i32;
        let col = self.col.round() as i32;
        canvas.put(self.vp, row, col, ch, Weight::Normal);
    }

    fn in_flight_bounds(&self) -> bool {
        self.row > 1.0
            && self.row < f64::from(self.vp.row_max())
            && self.col > 0.0
            && self.col < f64::from(self.vp.col_max())
    }
}

impl Task for FireTask {
    fn resume(&mut self, world: &mut World, canvas: &mut Canvas) -> Step {
        match self.phase {
            Phase::Spark => {
                self.put(canvas, '*');
                self.phase = Phase::Flash;
                Step::Yield
            }
            Phase::Flash => {
                // Overwrites the spark in place.
                self.put(canvas, 'O');
                self.phase = Phase::Flight;
                Step::Yield
            }
            Phase::Flight => {
                self.put(canvas, ' ');
                if !self.belled {
                    canvas.request_bell();
                    self.belled = true;
                }
                self.row += self.row_speed;
                self.col += self.col_speed;
                if !self.in_flight_bounds() {
                    return Step::Done;
                }
                if let Some(id) = world.debris.query_point(self.row, self.col).next() {
                    world.notices.post(id);
                    return Step::Done;
                }
                self.put(canvas, self.glyph());
                Step::Yield
            }
        }
    }
}
