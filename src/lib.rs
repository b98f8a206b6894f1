//! Side Scroller - A minimal side-scrolling platformer kernel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, camera, spawning)
//! - `input`: Key-state map and the action bitset sampled each tick
//! - `renderer`: Draw-list adapter for external rendering backends
//! - `config`: Startup configuration with validation

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use input::{Actions, KeyState};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (world units == pixels)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 450.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.7;
    pub const WALK_SPEED: f32 = 2.2;
    pub const RUN_SPEED: f32 = 4.2;
    /// Magnitude of the upward velocity applied on jump
    pub const JUMP_IMPULSE: f32 = 12.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_START_X: f32 = 100.0;

    /// Obstacle generator
    pub const SPAWN_INTERVAL_TICKS: u32 = 120; // frames between spawns
    pub const OBSTACLE_MIN_HEIGHT: u32 = 20;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 60;
    pub const OBSTACLE_MIN_WIDTH: u32 = 30;
    pub const OBSTACLE_MAX_WIDTH: u32 = 70;
    /// Extra elevation for raised obstacles, drawn from [0, MAX_HOP]
    pub const OBSTACLE_MAX_HOP: u32 = 40;
    /// Forward offset past the viewport's right edge, drawn from [0, SPAWN_LEAD]
    pub const OBSTACLE_SPAWN_LEAD: u32 = 80;

    /// Default run seed for headless sessions
    pub const DEFAULT_SEED: u64 = 0x5eed_5c01;
}
