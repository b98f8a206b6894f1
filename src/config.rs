//! Simulation configuration
//!
//! Loaded once at process start; the simulation never mutates it afterwards.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inclusive integer range used for random obstacle dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRange {
    pub min: u32,
    pub max: u32,
}

impl SpanRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// All tunables for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_height: f32,

    // === Player motion ===
    pub gravity: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_impulse: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,

    // === Obstacle generator ===
    /// Ticks between spawns (spawn happens once the counter exceeds this)
    pub spawn_interval: u32,
    pub obstacle_height: SpanRange,
    pub obstacle_width: SpanRange,
    pub max_hop: u32,
    pub spawn_lead: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_height: GROUND_HEIGHT,

            gravity: GRAVITY,
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,

            spawn_interval: SPAWN_INTERVAL_TICKS,
            obstacle_height: SpanRange::new(OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT),
            obstacle_width: SpanRange::new(OBSTACLE_MIN_WIDTH, OBSTACLE_MAX_WIDTH),
            max_hop: OBSTACLE_MAX_HOP,
            spawn_lead: OBSTACLE_SPAWN_LEAD,
        }
    }
}

/// Errors raised while loading a configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

fn check_positive(value: f32, name: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
    }
}

fn check_non_negative(value: f32, name: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be non-negative, got {}", name, value)))
    }
}

impl SimConfig {
    /// Parse a JSON document; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would produce an unplayable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.viewport_width, "viewport_width")?;
        check_positive(self.viewport_height, "viewport_height")?;
        check_non_negative(self.ground_height, "ground_height")?;
        check_non_negative(self.gravity, "gravity")?;
        check_non_negative(self.walk_speed, "walk_speed")?;
        check_non_negative(self.run_speed, "run_speed")?;
        check_non_negative(self.jump_impulse, "jump_impulse")?;
        check_positive(self.player_width, "player_width")?;
        check_positive(self.player_height, "player_height")?;
        check_non_negative(self.player_start_x, "player_start_x")?;

        if self.ground_height + self.player_height > self.viewport_height {
            return Err(ConfigError::Invalid(format!(
                "player ({}) does not fit above the ground ({}) in a {} high viewport",
                self.player_height, self.ground_height, self.viewport_height
            )));
        }
        if !self.obstacle_height.is_valid() || self.obstacle_height.min == 0 {
            return Err(ConfigError::Invalid(format!(
                "obstacle_height range {:?} is empty or zero",
                self.obstacle_height
            )));
        }
        if !self.obstacle_width.is_valid() || self.obstacle_width.min == 0 {
            return Err(ConfigError::Invalid(format!(
                "obstacle_width range {:?} is empty or zero",
                self.obstacle_width
            )));
        }
        Ok(())
    }

    /// Top edge of the ground strip
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.viewport_height - self.ground_height
    }

    /// Player resting y when standing on the ground
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.floor_y() - self.player_height
    }
}
