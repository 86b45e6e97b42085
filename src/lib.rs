//! A cooperatively scheduled terminal animation engine, shipped as a small
//! space game: dodge the orbital debris, and from 2020 on, shoot it down.
//!
//! Everything on screen is an independent [`sched::Task`]: a resumable state
//! machine that does one tick of work per resume and yields. A fixed-period
//! scheduler sweeps the task pool once per tick, the tasks paint into an
//! off-screen [`term::Canvas`], and a diff renderer pushes only the changed
//! cells to the terminal. No task ever touches the terminal directly.
//!
//! # Module Structure
//!
//! - [`sched`]: the task trait, tick scheduler, and multi-tick sleep counter
//! - [`core`]: world state, debris registry, collision geometry, movement
//! - [`term`]: canvas, viewports, and the crossterm diff renderer
//! - [`tasks`]: the animations themselves (stars, ship, debris, shots, eras)
//! - [`scenario`]: the year timeline driving debris cadence and the gun
//! - [`assets`]: built-in and on-disk ASCII frame art
//! - [`input`]: key mapping and the between-ticks event pump
//!
//! # Determinism
//!
//! All randomness flows through one seeded [`core::SimpleRng`] owned by the
//! world, so a given seed replays the same skies. Wall-clock time never
//! reaches game logic; tasks count ticks.

pub mod assets;
pub mod core;
pub mod input;
pub mod logging;
pub mod scenario;
pub mod sched;
pub mod tasks;
pub mod term;
pub mod types;
