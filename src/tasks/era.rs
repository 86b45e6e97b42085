//! Era ticker on the info bar.
//!
//! Every interval: erase the previous caption, advance the era, draw the new
//! caption centered on the bar. The era counter in the world only ever moves
//! forward, and only from here.

use crate::core::geometry::measure;
use crate::core::world::World;
use crate::scenario;
use crate::sched::{Sleep, Step, Task};
use crate::term::{Canvas, Viewport};
use crate::types::ERA_TICKS;

pub struct EraTicker {
    vp: Viewport,
    sleep: Sleep,
    shown: Option<(String, f64, f64)>,
}

impl EraTicker {
    pub fn new(vp: Viewport) -> Self {
        Self {
            vp,
            sleep: Sleep::new(),
            shown: None,
        }
    }
}

impl Task for EraTicker {
    fn resume(&mut self, world: &mut World, canvas: &mut Canvas) -> Step {
        if self.sleep.pending() {
            return Step::Yield;
        }
        if let Some((caption, row, col)) = self.shown.take() {
            canvas.erase_frame(self.vp, row, col, &caption);
            world.era += 1;
        }

        let caption = scenario::caption(world.era);
        let (height, width) = measure(&caption);
        let row = f64::from(self.vp.row_max()) - f64::from(height);
        let col = f64::from(self.vp.col_max()) / 2.0 - f64::from(width) / 2.0;
        canvas.draw_frame(self.vp, row, col, &caption);
        self.shown = Some((caption, row, col));

        self.sleep.arm(ERA_TICKS);
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_text(canvas: &Canvas, vp: Viewport, row: i32) -> String {
        (0..i32::from(vp.width()))
            .filter_map(|col| canvas.cell_at(vp, row, col))
            .map(|cell| cell.ch)
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn first_era_shows_immediately_without_advancing() {
        let vp = Viewport::new(21, 0, 3, 60);
        let mut canvas = Canvas::new(60, 24);
        let mut world = World::new(1);
        let mut ticker = EraTicker::new(vp);

        ticker.resume(&mut world, &mut canvas);
        assert_eq!(world.era, scenario::FIRST_ERA);
        assert_eq!(bar_text(&canvas, vp, 1), "1957 First Sputnik");
    }

    #[test]
    fn era_advances_every_interval() {
        let vp = Viewport::new(21, 0, 3, 60);
        let mut canvas = Canvas::new(60, 24);
        let mut world = World::new(1);
        let mut ticker = EraTicker::new(vp);

        for _ in 0..ERA_TICKS {
            ticker.resume(&mut world, &mut canvas);
        }
        assert_eq!(world.era, scenario::FIRST_ERA);

        // One more resume rolls the caption over.
        ticker.resume(&mut world, &mut canvas);
        assert_eq!(world.era, scenario::FIRST_ERA + 1);
        assert_eq!(bar_text(&canvas, vp, 1), "1958");

        for _ in 0..ERA_TICKS {
            ticker.resume(&mut world, &mut canvas);
        }
        assert_eq!(world.era, scenario::FIRST_ERA + 2);
    }

    #[test]
    fn old_caption_is_fully_erased() {
        let vp = Viewport::new(21, 0, 3, 60);
        let mut canvas = Canvas::new(60, 24);
        let mut world = World::new(1);
        let mut ticker = EraTicker::new(vp);

        // Run through several rollovers; a leftover glyph from the longer
        // 1957 caption would survive trimming on the shorter ones.
        for _ in 0..(ERA_TICKS * 3 + 1) {
            ticker.resume(&mut world, &mut canvas);
        }
        assert_eq!(world.era, 1960);
        assert_eq!(bar_text(&canvas, vp, 1), "1960");
    }
}
