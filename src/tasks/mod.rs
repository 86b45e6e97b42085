//! The animation task set.
//!
//! Each submodule is one suspend/resume state machine from the game: star
//! blinkers, the hazard spawner and fallers, the player ship trio, shots,
//! explosions and the era ticker. They share state only through the world
//! passed into every resume.

pub mod debris;
pub mod era;
pub mod explosion;
pub mod fire;
pub mod ship;
pub mod stars;

pub use debris::{DebrisSpawner, FallingDebris};
pub use era::EraTicker;
pub use explosion::ExplosionTask;
pub use fire::FireTask;
pub use ship::{GameOverBanner, IdleCycle, ShipTask};
pub use stars::{star_field, StarTask};
