//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step per tick only
//! - Seeded RNG only
//! - Stable iteration order (obstacle queue sorted by x)
//! - No rendering or platform dependencies

pub mod camera;
pub mod geometry;
pub mod pacing;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use geometry::{Aabb, overlaps};
pub use pacing::{FramePacer, Pacing};
pub use physics::{PhysicsEvents, resolve_player};
pub use spawner::{ObstacleSpawner, prune};
pub use state::{Obstacle, Player, SimulationState};
pub use tick::{TickInput, TickReport, tick};
