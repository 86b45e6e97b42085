//! Orbit defense runner (default binary).
//!
//! Owns everything the tasks must not: the real clock, the keyboard, and the
//! terminal. Each cycle it snapshots input into the world, sweeps the task
//! pool once, pushes the canvas diff to the screen, then pumps input for
//! whatever remains of the tick window.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use tui_orbit::assets::{FrameKind, FrameStore};
use tui_orbit::core::World;
use tui_orbit::input::InputPump;
use tui_orbit::logging;
use tui_orbit::sched::Scheduler;
use tui_orbit::tasks::{star_field, DebrisSpawner, EraTicker, IdleCycle, ShipTask};
use tui_orbit::term::{Canvas, TerminalRenderer, Viewport};
use tui_orbit::types::{INFO_BAR_ROWS, MIN_COLS, MIN_ROWS, STAR_COUNT, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    seed: Option<u32>,
    frames_dir: Option<PathBuf>,
    log_dir: PathBuf,
    stars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frames_dir: None,
            log_dir: PathBuf::from("logs"),
            stars: STAR_COUNT,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                config.seed = Some(seed);
            }
            "--frames-dir" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --frames-dir"))?;
                config.frames_dir = Some(PathBuf::from(v));
            }
            "--log-dir" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-dir"))?;
                config.log_dir = PathBuf::from(v);
            }
            "--stars" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --stars"))?;
                config.stars = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --stars value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    // Keep the handle alive for the whole run; dropping it stops logging.
    let _logger = logging::init(&config.log_dir)?;

    let store = FrameStore::load(config.frames_dir.as_deref())?;
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    log::info!("starting: seed={} stars={}", seed, config.stars);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &store, seed, config.stars);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(err) = &result {
        log::error!("exited with error: {err:#}");
    }
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.as_nanos() as u32)
}

fn run(term: &mut TerminalRenderer, store: &FrameStore, seed: u32, stars: usize) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    if cols < MIN_COLS || rows < MIN_ROWS {
        bail!("terminal too small: {cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS}");
    }

    let mut canvas = Canvas::new(cols, rows);
    let (sky, info_bar) = Viewport::screen(cols, rows).split_bottom(INFO_BAR_ROWS);

    let ship_frames = store.frames(FrameKind::Ship).to_vec();
    let first_ship = ship_frames
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("no ship frames loaded"))?;

    let mut world = World::new(seed);
    let mut scheduler = Scheduler::new();

    for star in star_field(sky, stars, &mut world.rng) {
        scheduler.spawn(star);
    }
    // The cycle must run before the ship within a tick so the published
    // frame is never stale.
    scheduler.spawn(IdleCycle::new(ship_frames));
    scheduler.spawn(ShipTask::new(sky, &first_ship, store.game_over()));
    scheduler.spawn(DebrisSpawner::new(
        sky,
        store.frames(FrameKind::Hazard).to_vec(),
    ));
    scheduler.spawn(EraTicker::new(info_bar));

    let mut pump = InputPump::new();
    let tick = Duration::from_millis(TICK_MS);

    loop {
        let cycle_start = Instant::now();

        let controls = pump.take();
        if controls.quit {
            log::info!("quit at tick {}", world.ticks());
            return Ok(());
        }
        if controls.resized {
            term.invalidate();
        }
        world.controls = controls;

        scheduler.tick(&mut world, &mut canvas);

        canvas.border(sky);
        canvas.border(info_bar);
        term.draw(&mut canvas)?;

        // Sleep out the tick by pumping input, so keys wake us early but
        // never shorten the cycle.
        while let Some(left) = tick.checked_sub(cycle_start.elapsed()) {
            if left.is_zero() {
                break;
            }
            pump.pump(left)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_uses_defaults() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stars, STAR_COUNT);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn parse_args_reads_all_flags() {
        let config = parse_args(&args(&[
            "--seed",
            "42",
            "--frames-dir",
            "art",
            "--log-dir",
            "/tmp/orbit-logs",
            "--stars",
            "12",
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frames_dir, Some(PathBuf::from("art")));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/orbit-logs"));
        assert_eq!(config.stars, 12);
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "many"])).is_err());
        assert!(parse_args(&args(&["--warp", "9"])).is_err());
    }
}
