//! Procedural obstacle generation and pruning
//!
//! A frame counter drives spawning: once it passes the configured interval a
//! single obstacle appears just beyond the right edge of the viewport. Pruning
//! pops obstacles off the head of the queue once they have scrolled fully past
//! the camera's left edge.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::config::{SimConfig, SpanRange};

/// Spawn timer plus the seeded RNG that shapes new obstacles
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    /// Ticks since the last spawn
    pub timer: u32,
    /// Total obstacles spawned this run
    pub spawned: u64,
    rng: Pcg32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            timer: 0,
            spawned: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn roll(&mut self, range: SpanRange) -> f32 {
        self.rng.random_range(range.min..=range.max) as f32
    }

    /// Shape a new obstacle for the given camera position
    ///
    /// `min_x` keeps the queue sorted: the new obstacle never starts left of it.
    /// Callers pass the tail's right edge plus a player-wide gap.
    pub fn generate(&mut self, camera_x: f32, min_x: f32, config: &SimConfig) -> Obstacle {
        let height = self.roll(config.obstacle_height);
        let width = self.roll(config.obstacle_width);

        // Either sitting on the floor or raised so it has to be jumped onto
        let floor = config.floor_y();
        let raised = self.rng.random_bool(0.5);
        let y = if raised {
            floor - height - self.roll(SpanRange::new(0, config.max_hop))
        } else {
            floor - height
        };

        let lead = self.roll(SpanRange::new(0, config.spawn_lead));
        let x = (camera_x + config.viewport_width + lead).max(min_x);

        Obstacle::new(x, y, width, height)
    }

    /// Advance the spawn timer and prune; returns true if an obstacle spawned
    pub fn advance(
        &mut self,
        obstacles: &mut VecDeque<Obstacle>,
        camera_x: f32,
        config: &SimConfig,
    ) -> bool {
        self.timer = self.timer.saturating_add(1);
        let mut spawned = false;
        if self.timer > config.spawn_interval {
            self.timer = 0;
            // Leave room for the player between neighbours
            let min_x = obstacles
                .back()
                .map(|o| o.right() + config.player_width)
                .unwrap_or(f32::MIN);
            let obstacle = self.generate(camera_x, min_x, config);
            log::debug!(
                "Spawned obstacle #{} at ({}, {}) size {}x{}",
                self.spawned,
                obstacle.pos.x,
                obstacle.pos.y,
                obstacle.size.x,
                obstacle.size.y
            );
            obstacles.push_back(obstacle);
            self.spawned += 1;
            spawned = true;
        }

        let pruned = prune(obstacles, camera_x);
        if pruned > 0 {
            log::debug!("Pruned {} obstacles behind camera x={}", pruned, camera_x);
        }

        spawned
    }
}

/// Drop obstacles from the head whose right edge is left of `camera_x`
pub fn prune(obstacles: &mut VecDeque<Obstacle>, camera_x: f32) -> usize {
    let mut removed = 0;
    while obstacles.front().is_some_and(|o| o.right() < camera_x) {
        obstacles.pop_front();
        removed += 1;
    }
    removed
}
