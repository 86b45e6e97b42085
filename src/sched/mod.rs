//! Cooperative tick scheduler.
//!
//! Tasks are explicit state machines advanced by [`Task::resume`]; one resume
//! runs until the task's next suspension point and must not block. Each
//! scheduler tick resumes every live task exactly once, drops completed ones,
//! then admits tasks spawned during the sweep so they start on the next tick.
//!
//! A panicking task is contained: the scheduler logs the fault, gives the
//! task a chance to release shared state through [`Task::abort`], and drops
//! it while everything else keeps running.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::world::World;
use crate::term::canvas::Canvas;

/// Outcome of one resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Suspended; resume again next tick.
    Yield,
    /// Finished; remove from the pool.
    Done,
}

/// A suspendable unit of animation work.
pub trait Task {
    /// Run until the next suspension point.
    fn resume(&mut self, world: &mut World, canvas: &mut Canvas) -> Step;

    /// Release shared state after a fault. Called only when `resume` panicked,
    /// right before the task is dropped.
    fn abort(&mut self, world: &mut World) {
        let _ = world;
    }
}

/// Multi-tick suspension counter.
///
/// `arm(n)` followed by an immediate yield suspends for `n` ticks in total:
/// the yield right after arming counts as the first, and `pending()` absorbs
/// the remaining `n - 1` resumes. `arm(0)` behaves like `arm(1)` - the task
/// still gives up the rest of the current tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sleep {
    remaining: u32,
}

impl Sleep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a suspension of `ticks` ticks. Callers yield right after.
    pub fn arm(&mut self, ticks: u32) {
        self.remaining = ticks.saturating_sub(1);
    }

    /// True while the suspension is still running down; callers yield on true.
    pub fn pending(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// The task pool and its sweep loop.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
    }

    /// Run one scheduling cycle: resume every live task once, drop finished
    /// and faulted ones, then admit tasks spawned during the sweep.
    pub fn tick(&mut self, world: &mut World, canvas: &mut Canvas) {
        self.tasks.retain_mut(|task| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| task.resume(world, canvas)));
            match outcome {
                Ok(Step::Yield) => true,
                Ok(Step::Done) => false,
                Err(payload) => {
                    log::error!("task faulted: {}; dropping it", payload_text(&payload));
                    task.abort(world);
                    false
                }
            }
        });

        self.tasks.append(&mut world.take_spawned());
        world.advance_tick();
    }
}

pub(crate) fn payload_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        ticks_left: u32,
        resumed: u32,
    }

    impl Task for Countdown {
        fn resume(&mut self, _world: &mut World, _canvas: &mut Canvas) -> Step {
            self.resumed += 1;
            if self.ticks_left == 0 {
                return Step::Done;
            }
            self.ticks_left -= 1;
            Step::Yield
        }
    }

    fn fixture() -> (World, Canvas) {
        (World::new(1), Canvas::new(10, 10))
    }

    #[test]
    fn done_tasks_leave_the_pool() {
        let (mut world, mut canvas) = fixture();
        let mut sched = Scheduler::new();
        sched.spawn(Countdown {
            ticks_left: 2,
            resumed: 0,
        });

        sched.tick(&mut world, &mut canvas);
        assert_eq!(sched.len(), 1);
        sched.tick(&mut world, &mut canvas);
        assert_eq!(sched.len(), 1);
        sched.tick(&mut world, &mut canvas);
        assert!(sched.is_empty());
    }

    #[test]
    fn tick_counter_advances_once_per_cycle() {
        let (mut world, mut canvas) = fixture();
        let mut sched = Scheduler::new();
        assert_eq!(world.ticks(), 0);
        sched.tick(&mut world, &mut canvas);
        sched.tick(&mut world, &mut canvas);
        assert_eq!(world.ticks(), 2);
    }

    #[test]
    fn sleep_absorbs_exactly_n_ticks() {
        let mut sleep = Sleep::new();
        sleep.arm(3);
        // The caller yields once on arming, then pending() covers the rest.
        assert!(sleep.pending());
        assert!(sleep.pending());
        assert!(!sleep.pending());
    }

    #[test]
    fn sleep_zero_still_forces_one_yield() {
        let mut sleep = Sleep::new();
        sleep.arm(0);
        // Arming counted as the whole suspension; next resume does work again.
        assert!(!sleep.pending());

        sleep.arm(1);
        assert!(!sleep.pending());
    }

    #[test]
    fn sleep_pattern_resumes_work_on_schedule() {
        use std::cell::RefCell;
        use std::rc::Rc;

        // A task that works every 4th tick: work, arm(4), then 3 pending ticks.
        struct Periodic {
            sleep: Sleep,
            work_ticks: Rc<RefCell<Vec<u64>>>,
        }

        impl Task for Periodic {
            fn resume(&mut self, world: &mut World, _canvas: &mut Canvas) -> Step {
                if self.sleep.pending() {
                    return Step::Yield;
                }
                self.work_ticks.borrow_mut().push(world.ticks());
                self.sleep.arm(4);
                Step::Yield
            }
        }

        let (mut world, mut canvas) = fixture();
        let mut sched = Scheduler::new();
        let work_ticks = Rc::new(RefCell::new(Vec::new()));
        sched.spawn(Periodic {
            sleep: Sleep::new(),
            work_ticks: Rc::clone(&work_ticks),
        });

        for _ in 0..12 {
            sched.tick(&mut world, &mut canvas);
        }
        assert_eq!(*work_ticks.borrow(), vec![0, 4, 8]);
    }
}
