//! Player ship: idle animation, movement and the game-over banner.
//!
//! Two tasks cooperate on the ship. The idle cycle publishes the current
//! frame into the world once per tick; the mover reads it, so thrust and
//! animation stay independent. When the mover's box overlaps any hazard it
//! erases itself and falls into the banner task, which never returns -
//! player control ends but the scheduler keeps running.

use std::rc::Rc;

use crate::core::geometry::{measure, BoundingBox};
use crate::core::physics;
use crate::core::world::World;
use crate::scenario;
use crate::sched::{Step, Task};
use crate::tasks::fire::FireTask;
use crate::term::{Canvas, Viewport};
use crate::types::BORDER;

/// Publishes the next player frame each tick, looping forever.
pub struct IdleCycle {
    frames: Vec<Rc<str>>,
    index: usize,
}

impl IdleCycle {
    pub fn new(frames: Vec<Rc<str>>) -> Self {
        debug_assert!(!frames.is_empty());
        Self { frames, index: 0 }
    }
}

impl Task for IdleCycle {
    fn resume(&mut self, world: &mut World, _canvas: &mut Canvas) -> Step {
        if self.frames.is_empty() {
            return Step::Done;
        }
        world.ship_frame = Some(Rc::clone(&self.frames[self.index]));
        self.index = (self.index + 1) % self.frames.len();
        Step::Yield
    }
}

/// Permanent end-of-run display. Draws the banner every tick so it stays on
/// top of whatever else still animates underneath.
pub struct GameOverBanner {
    vp: Viewport,
    banner: Rc<str>,
}

impl GameOverBanner {
    pub fn new(vp: Viewport, banner: Rc<str>) -> Self {
        Self { vp, banner }
    }
}

impl Task for GameOverBanner {
    fn resume(&mut self, _world: &mut World, canvas: &mut Canvas) -> Step {
        let (height, width) = measure(&self.banner);
        let row = f64::from(self.vp.row_max()) / 2.0 - f64::from(height) / 2.0;
        let col = f64::from(self.vp.col_max()) / 2.0 - f64::from(width) / 2.0;
        canvas.draw_frame(self.vp, row, col, &self.banner);
        Step::Yield
    }
}

enum ShipPhase {
    Flying,
    Wrecked(GameOverBanner),
}

pub struct ShipTask {
    vp: Viewport,
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    height: u16,
    width: u16,
    banner: Rc<str>,
    phase: ShipPhase,
    drawn: Option<(Rc<str>, f64, f64)>,
}

impl ShipTask {
    /// `size_frame` fixes the collision box; all idle frames share its shape.
    pub fn new(vp: Viewport, size_frame: &str, banner: Rc<str>) -> Self {
        let (height, width) = measure(size_frame);
        let row = f64::from(vp.row_max()) - f64::from(height) / 2.0;
        let col = f64::from(vp.col_max()) / 2.0 - f64::from(width) / 2.0;
        Self {
            vp,
            row,
            col,
            row_speed: 0.0,
            col_speed: 0.0,
            height,
            width,
            banner,
            phase: ShipPhase::Flying,
            drawn: None,
        }
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.row,
            self.col,
            f64::from(self.height),
            f64::from(self.width),
        )
    }

    /// Clamp the ship fully inside the border.
    fn clamp_position(&mut self) {
        let row_hi = f64::from(self.vp.row_max()) - f64::from(self.height);
        let col_hi = f64::from(self.vp.col_max()) - f64::from(self.width);
        self.row = self.row.min(row_hi).max(f64::from(BORDER));
        self.col = self.col.min(col_hi).max(f64::from(BORDER));
    }
}

impl Task for ShipTask {
    fn resume(&mut self, world: &mut World, canvas: &mut Canvas) -> Step {
        if let ShipPhase::Wrecked(banner) = &mut self.phase {
            return banner.resume(world, canvas);
        }

        if let Some((frame, row, col)) = self.drawn.take() {
            canvas.erase_frame(self.vp, row, col, &frame);
        }

        if world.debris.query_box(self.bounds()).next().is_some() {
            // Frame already erased above; control ends here for good.
            let mut banner = GameOverBanner::new(self.vp, Rc::clone(&self.banner));
            let step = banner.resume(world, canvas);
            self.phase = ShipPhase::Wrecked(banner);
            return step;
        }

        let controls = world.controls;
        if controls.fire && world.era >= scenario::WEAPON_ERA {
            let nose_col = self.col + f64::from(self.width) / 2.0;
            world.spawn(FireTask::new(self.vp, self.row, nose_col));
        }

        let (row_speed, col_speed) = physics::update_speed(
            self.row_speed,
            self.col_speed,
            controls.row_delta,
            controls.col_delta,
        );
        self.row_speed = row_speed;
        self.col_speed = col_speed;
        self.row += row_speed;
        self.col += col_speed;
        self.clamp_position();

        if let Some(frame) = world.ship_frame.clone() {
            canvas.draw_frame(self.vp, self.row, self.col, &frame);
            self.drawn = Some((frame, self.row, self.col));
        }
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obstacles::Debris;
    use crate::types::Controls;

    const SHIP: &str = " A \n^H^";
    const BANNER: &str = "GAME OVER";

    fn fixture() -> (World, Canvas, Viewport) {
        let mut world = World::new(5);
        world.ship_frame = Some(Rc::from(SHIP));
        (world, Canvas::new(30, 12), Viewport::screen(30, 12))
    }

    fn ship(vp: Viewport) -> ShipTask {
        ShipTask::new(vp, SHIP, Rc::from(BANNER))
    }

    #[test]
    fn idle_cycle_publishes_frames_in_turn() {
        let (mut world, mut canvas, _) = fixture();
        let frames: Vec<Rc<str>> = vec![Rc::from("1"), Rc::from("2")];
        let mut idle = IdleCycle::new(frames);

        idle.resume(&mut world, &mut canvas);
        assert_eq!(world.ship_frame.as_deref(), Some("1"));
        idle.resume(&mut world, &mut canvas);
        assert_eq!(world.ship_frame.as_deref(), Some("2"));
        idle.resume(&mut world, &mut canvas);
        assert_eq!(world.ship_frame.as_deref(), Some("1"));
    }

    #[test]
    fn idle_ship_settles_then_stays_put() {
        let (mut world, mut canvas, vp) = fixture();
        let mut ship = ship(vp);

        // First resume may clamp the spawn position into the interior.
        ship.resume(&mut world, &mut canvas);
        let settled = (ship.row, ship.col);
        assert!(ship.drawn.is_some());

        ship.resume(&mut world, &mut canvas);
        assert_eq!((ship.row, ship.col), settled);
    }

    #[test]
    fn thrust_builds_speed_and_moves() {
        let (mut world, mut canvas, vp) = fixture();
        let mut ship = ship(vp);
        let start_col = ship.col;

        world.controls = Controls {
            col_delta: 1,
            ..Controls::default()
        };
        for _ in 0..3 {
            ship.resume(&mut world, &mut canvas);
        }
        assert!(ship.col > start_col);
        assert!(ship.col_speed > 0.0);

        // Released input: speed damps away, position settles.
        world.controls = Controls::default();
        for _ in 0..50 {
            ship.resume(&mut world, &mut canvas);
        }
        assert!(ship.col_speed.abs() < 1e-3);
    }

    #[test]
    fn position_clamps_to_viewport_interior() {
        let (mut world, mut canvas, vp) = fixture();
        let mut ship = ship(vp);

        world.controls = Controls {
            row_delta: -1,
            col_delta: -1,
            ..Controls::default()
        };
        for _ in 0..100 {
            ship.resume(&mut world, &mut canvas);
        }
        assert_eq!(ship.row, f64::from(BORDER));
        assert_eq!(ship.col, f64::from(BORDER));

        world.controls = Controls {
            row_delta: 1,
            col_delta: 1,
            ..Controls::default()
        };
        for _ in 0..100 {
            ship.resume(&mut world, &mut canvas);
        }
        // Fully inside: the far edge never crosses the border.
        assert_eq!(ship.row, f64::from(vp.row_max()) - 2.0);
        assert_eq!(ship.col, f64::from(vp.col_max()) - 3.0);
    }

    #[test]
    fn fire_only_spawns_once_weapons_unlock() {
        let (mut world, mut canvas, vp) = fixture();
        let mut ship = ship(vp);
        world.controls = Controls {
            fire: true,
            ..Controls::default()
        };

        ship.resume(&mut world, &mut canvas);
        assert!(world.take_spawned().is_empty());

        world.era = scenario::WEAPON_ERA;
        ship.resume(&mut world, &mut canvas);
        assert_eq!(world.take_spawned().len(), 1);
    }

    #[test]
    fn collision_wrecks_the_ship_for_good() {
        let (mut world, mut canvas, vp) = fixture();
        let mut ship = ship(vp);
        ship.resume(&mut world, &mut canvas);
        let (row, col) = (ship.row, ship.col);

        // Drop a hazard right on top of the ship.
        world.debris
            .register(Debris::new(ship.row, ship.col as i32, 2, 3));
        ship.resume(&mut world, &mut canvas);
        assert!(matches!(ship.phase, ShipPhase::Wrecked(_)));

        // Banner is up, centered on the viewport.
        let mid_row = vp.row_max() / 2;
        let has_banner = (0..vp.width())
            .filter_map(|c| canvas.get(mid_row, c))
            .any(|cell| cell.ch == 'G');
        assert!(has_banner);

        // Movement input no longer does anything.
        world.controls = Controls {
            col_delta: 1,
            fire: true,
            ..Controls::default()
        };
        world.era = scenario::WEAPON_ERA;
        for _ in 0..10 {
            assert_eq!(ship.resume(&mut world, &mut canvas), Step::Yield);
        }
        assert_eq!((ship.row, ship.col), (row, col));
        assert!(world.take_spawned().is_empty());
    }
}
