//! Hazard spawning and the falling-hazard lifecycle.
//!
//! The spawner consults the era rate table each cycle; while hazards are
//! locked it idles one tick at a time. Each spawned hazard owns one registry
//! entry from its first resume until it leaves, keeping the registry in step
//! with the set of live hazard tasks on every exit path, fault included.

use std::rc::Rc;

use crate::core::geometry::measure;
use crate::core::obstacles::{Debris, DebrisId};
use crate::core::world::World;
use crate::scenario;
use crate::sched::{Sleep, Step, Task};
use crate::tasks::explosion::ExplosionTask;
use crate::term::{Canvas, Viewport};
use crate::types::{BORDER, DEBRIS_FALL_SPEED};

pub struct DebrisSpawner {
    vp: Viewport,
    frames: Vec<Rc<str>>,
    sleep: Sleep,
}

impl DebrisSpawner {
    pub fn new(vp: Viewport, frames: Vec<Rc<str>>) -> Self {
        Self {
            vp,
            frames,
            sleep: Sleep::new(),
        }
    }
}

impl Task for DebrisSpawner {
    fn resume(&mut self, world: &mut World, _canvas: &mut Canvas) -> Step {
        if self.sleep.pending() {
            return Step::Yield;
        }
        let Some(delay) = scenario::hazard_delay(world.era) else {
            // Hazards not unlocked in this era; ask again next tick.
            self.sleep.arm(1);
            return Step::Yield;
        };
        if let Some(frame) = world.rng.pick(&self.frames) {
            let frame = Rc::clone(frame);
            let (_, width) = measure(&frame);
            // Random column such that the frame fits inside the border.
            let col_hi = i32::from(self.vp.col_max()) - i32::from(width);
            let col = world.rng.range_inclusive(i32::from(BORDER), col_hi);
            world.spawn(FallingDebris::new(self.vp, col, frame));
        }
        self.sleep.arm(delay);
        Step::Yield
    }
}

/// One hazard falling from the top of the viewport at fixed speed.
pub struct FallingDebris {
    vp: Viewport,
    frame: Rc<str>,
    row: f64,
    col: i32,
    height: u16,
    width: u16,
    id: Option<DebrisId>,
}

impl FallingDebris {
    pub fn new(vp: Viewport, col: i32, frame: Rc<str>) -> Self {
        let (height, width) = measure(&frame);
        let col = col.clamp(0, i32::from(vp.col_max()));
        Self {
            vp,
            frame,
            row: 0.0,
            col,
            height,
            width,
            id: None,
        }
    }

    fn release(&mut self, world: &mut World) {
        if let Some(id) = self.id.take() {
            world.debris.unregister(id);
            world.notices.take(id);
        }
    }
}

impl Task for FallingDebris {
    fn resume(&mut self, world: &mut World, canvas: &mut Canvas) -> Step {
        let id = match self.id {
            None => {
                // First resume: claim a registry entry, then show up.
                let id = world.debris.register(Debris::new(
                    self.row,
                    self.col,
                    self.height,
                    self.width,
                ));
                self.id = Some(id);
                canvas.draw_frame(self.vp, self.row, f64::from(self.col), &self.frame);
                return Step::Yield;
            }
            Some(id) => id,
        };

        canvas.erase_frame(self.vp, self.row, f64::from(self.col), &self.frame);
        self.row += DEBRIS_FALL_SPEED;
        if let Some(entry) = world.debris.get_mut(id) {
            entry.top = self.row;
        }

        if world.notices.take(id) {
            self.id = None;
            if let Some(entry) = world.debris.unregister(id) {
                let (center_row, center_col) = entry.center();
                world.spawn(ExplosionTask::new(self.vp, center_row, center_col));
            }
            return Step::Done;
        }

        if self.row >= f64::from(self.vp.height()) {
            self.release(world);
            return Step::Done;
        }

        canvas.draw_frame(self.vp, self.row, f64::from(self.col), &self.frame);
        Step::Yield
    }

    fn abort(&mut self, world: &mut World) {
        self.release(world);
    }
}
