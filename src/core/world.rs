//! Shared state visible to every task.
//!
//! The scheduler hands each task `&mut World` during its resume, so all
//! cross-task traffic (obstacle footprints, hit notices, the player frame
//! snapshot, input) flows through here without locking. Tasks spawned during
//! a sweep collect in a pending buffer that the scheduler drains at the end
//! of the cycle.

use std::rc::Rc;

use crate::core::obstacles::{DebrisRegistry, NoticeBoard};
use crate::core::rng::SimpleRng;
use crate::scenario;
use crate::sched::Task;
use crate::types::Controls;

pub struct World {
    /// Footprints of every live falling hazard.
    pub debris: DebrisRegistry,
    /// Hit notices flowing from shots to the hazards they struck.
    pub notices: NoticeBoard,
    /// Current era on the info bar; only the era ticker advances it.
    pub era: u32,
    /// Input snapshot for this tick, written by the driver before the sweep.
    pub controls: Controls,
    /// Player frame published by the idle-cycle task, read by the mover.
    pub ship_frame: Option<Rc<str>>,
    pub rng: SimpleRng,
    ticks: u64,
    spawned: Vec<Box<dyn Task>>,
}

impl World {
    pub fn new(seed: u32) -> Self {
        Self {
            debris: DebrisRegistry::new(),
            notices: NoticeBoard::new(),
            era: scenario::FIRST_ERA,
            controls: Controls::default(),
            ship_frame: None,
            rng: SimpleRng::new(seed),
            ticks: 0,
            spawned: Vec::new(),
        }
    }

    /// Completed scheduling cycles since startup.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queue a task for the pool. It joins after the current sweep finishes
    /// and is first resumed on the following tick.
    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.spawned.push(Box::new(task));
    }

    pub(crate) fn take_spawned(&mut self) -> Vec<Box<dyn Task>> {
        std::mem::take(&mut self.spawned)
    }

    pub(crate) fn advance_tick(&mut self) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::Step;
    use crate::term::canvas::Canvas;

    struct Noop;

    impl Task for Noop {
        fn resume(&mut self, _world: &mut World, _canvas: &mut Canvas) -> Step {
            Step::Done
        }
    }

    #[test]
    fn new_world_starts_at_first_era() {
        let world = World::new(7);
        assert_eq!(world.era, scenario::FIRST_ERA);
        assert_eq!(world.ticks(), 0);
        assert!(world.debris.is_empty());
        assert!(world.notices.is_empty());
        assert!(world.ship_frame.is_none());
    }

    #[test]
    fn spawned_tasks_buffer_until_drained() {
        let mut world = World::new(7);
        world.spawn(Noop);
        world.spawn(Noop);

        assert_eq!(world.take_spawned().len(), 2);
        assert!(world.take_spawned().is_empty());
    }
}
