//! Background star blinkers.
//!
//! Each star runs a four-phase cycle forever: dim, normal, bold, normal,
//! with a fixed tick count per phase. Stars never touch shared state; they
//! only restyle their own cell when the phase turns.

use crate::core::rng::SimpleRng;
use crate::core::world::World;
use crate::sched::{Sleep, Step, Task};
use crate::term::{Canvas, Viewport};
use crate::types::{
    Weight, BLINK_BOLD_TICKS, BLINK_DIM_TICKS, BLINK_NORMAL_TICKS, BORDER, STAR_GLYPHS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dim,
    Waxing,
    Bold,
    Waning,
}

impl Phase {
    const COUNT: u32 = 4;

    fn from_index(index: u32) -> Phase {
        match index % Self::COUNT {
            0 => Phase::Dim,
            1 => Phase::Waxing,
            2 => Phase::Bold,
            _ => Phase::Waning,
        }
    }

    fn weight(self) -> Weight {
        match self {
            Phase::Dim => Weight::Dim,
            Phase::Bold => Weight::Bold,
            Phase::Waxing | Phase::Waning => Weight::Normal,
        }
    }

    fn ticks(self) -> u32 {
        match self {
            Phase::Dim => BLINK_DIM_TICKS,
            Phase::Bold => BLINK_BOLD_TICKS,
            Phase::Waxing | Phase::Waning => BLINK_NORMAL_TICKS,
        }
    }

    fn next(self) -> Phase {
        match self {
            Phase::Dim => Phase::Waxing,
            Phase::Waxing => Phase::Bold,
            Phase::Bold => Phase::Waning,
            Phase::Waning => Phase::Dim,
        }
    }
}

pub struct StarTask {
    vp: Viewport,
    row: i32,
    col: i32,
    glyph: char,
    phase: Phase,
    sleep: Sleep,
}

impl StarTask {
    /// `phase_index` staggers the cycle start so a field of stars twinkles
    /// out of step.
    pub fn new(vp: Viewport, row: i32, col: i32, glyph: char, phase_index: u32) -> Self {
        Self {
            vp,
            row,
            col,
            glyph,
            phase: Phase::from_index(phase_index),
            sleep: Sleep::new(),
        }
    }
}

impl Task for StarTask {
    fn resume(&mut self, _world: &mut World, canvas: &mut Canvas) -> Step {
        if self.sleep.pending() {
            return Step::Yield;
        }
        canvas.put(self.vp, self.row, self.col, self.glyph, self.phase.weight());
        self.sleep.arm(self.phase.ticks());
        self.phase = self.phase.next();
        Step::Yield
    }
}

/// Build a random star field over the viewport interior.
pub fn star_field(vp: Viewport, count: usize, rng: &mut SimpleRng) -> Vec<StarTask> {
    let row_hi = i32::from(vp.row_max().saturating_sub(BORDER));
    let col_hi = i32::from(vp.col_max().saturating_sub(BORDER));
    (0..count)
        .map(|_| {
            let row = rng.range_inclusive(i32::from(BORDER), row_hi);
            let col = rng.range_inclusive(i32::from(BORDER), col_hi);
            let glyph = rng.pick(STAR_GLYPHS).copied().unwrap_or('*');
            let phase = rng.next_range(Phase::COUNT);
            StarTask::new(vp, row, col, glyph, phase)
        })
        .collect()
}
