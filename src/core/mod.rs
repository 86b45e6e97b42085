//! Core module - pure game state with no terminal dependencies
//!
//! Geometry, the movement model, the obstacle registry and the shared world
//! live here. Nothing in this module performs I/O, which keeps the collision
//! and physics rules unit-testable.

pub mod geometry;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod world;

// Re-export commonly used types
pub use geometry::{measure, BoundingBox};
pub use obstacles::{Debris, DebrisId, DebrisRegistry, NoticeBoard};
pub use rng::SimpleRng;
pub use world::World;
