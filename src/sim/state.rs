//! Simulation state and core entity types
//!
//! Everything the tick mutates lives in `SimulationState`; the host owns it
//! and hands it to `tick` by mutable reference.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::geometry::Aabb;
use super::spawner::ObstacleSpawner;
use crate::config::SimConfig;

/// The controllable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Grounded (true) or airborne (false)
    pub on_ground: bool,
}

impl Player {
    /// Player standing on the ground at the configured start x
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_start_x, config.ground_line()),
            vel: Vec2::ZERO,
            size: Vec2::new(config.player_width, config.player_height),
            on_ground: true,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A static block; never changes after it is spawned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Hand-placed obstacles present at the start of every run
/// (x, depth above floor, width, height)
const INITIAL_COURSE: [(f32, f32, f32, f32); 3] = [
    (350.0, 24.0, 40.0, 24.0),
    (520.0, 56.0, 40.0, 56.0),
    (700.0, 12.0, 32.0, 36.0),
];

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Tunables, fixed for the lifetime of the run
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Live obstacles, sorted by ascending x (push at tail, pop at head)
    pub obstacles: VecDeque<Obstacle>,
    pub camera: Camera,
    pub spawner: ObstacleSpawner,
}

impl SimulationState {
    /// Create a new run with the starting course laid out
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut state = Self::empty(config, seed);
        let floor = state.config.floor_y();
        state.obstacles.extend(
            INITIAL_COURSE
                .iter()
                .map(|&(x, depth, w, h)| Obstacle::new(x, floor - depth, w, h)),
        );
        state
    }

    /// Create a run with no obstacles
    pub fn empty(config: SimConfig, seed: u64) -> Self {
        Self {
            player: Player::spawn(&config),
            camera: Camera::new(config.viewport_width),
            spawner: ObstacleSpawner::new(seed),
            obstacles: VecDeque::new(),
            time_ticks: 0,
            seed,
            config,
        }
    }

    /// Whether the obstacle queue is sorted by x
    pub fn obstacles_sorted(&self) -> bool {
        self.obstacles
            .iter()
            .zip(self.obstacles.iter().skip(1))
            .all(|(a, b)| a.pos.x <= b.pos.x)
    }
}
