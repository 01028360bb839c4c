//! Session configuration.
//!
//! [`GameConfig::default`] reproduces the classic arcade tuning; front ends
//! override individual fields and call [`GameConfig::validate`] before use.

use std::fmt;

use crate::types::{MAX_OBSTACLES, PLAYER_STEP_X, PLAYER_STEP_Y, TICK_DELTA, TICK_MS};

/// Vertical movement policy for the player car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalBounds {
    /// Forward/backward moves are never rejected; the car may leave the view.
    #[default]
    Unbounded,
    /// Forward/backward moves are rejected if the car would leave the track.
    Track,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Track scroll distance per step
    pub tick_delta: i32,
    /// Delay the scheduler waits between steps
    pub tick_interval_ms: u32,
    /// Live obstacle limit (1..=4)
    pub max_obstacles: usize,
    pub player_step_x: i32,
    pub player_step_y: i32,
    pub vertical_bounds: VerticalBounds,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_delta: TICK_DELTA,
            tick_interval_ms: TICK_MS,
            max_obstacles: MAX_OBSTACLES,
            player_step_x: PLAYER_STEP_X,
            player_step_y: PLAYER_STEP_Y,
            vertical_bounds: VerticalBounds::Unbounded,
        }
    }
}

impl GameConfig {
    pub fn with_tick_interval_ms(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    pub fn with_vertical_bounds(mut self, bounds: VerticalBounds) -> Self {
        self.vertical_bounds = bounds;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_delta <= 0 {
            return Err(ConfigError::NonPositiveTickDelta);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_obstacles == 0 || self.max_obstacles > MAX_OBSTACLES {
            return Err(ConfigError::ObstacleLimitOutOfRange);
        }
        if self.player_step_x <= 0 || self.player_step_y <= 0 {
            return Err(ConfigError::NonPositivePlayerStep);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveTickDelta,
    ZeroTickInterval,
    ObstacleLimitOutOfRange,
    NonPositivePlayerStep,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::NonPositiveTickDelta => "tick_delta",
            ConfigError::ZeroTickInterval => "tick_interval",
            ConfigError::ObstacleLimitOutOfRange => "max_obstacles",
            ConfigError::NonPositivePlayerStep => "player_step",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::NonPositiveTickDelta => "tick delta must be positive",
            ConfigError::ZeroTickInterval => "tick interval must be at least 1ms",
            ConfigError::ObstacleLimitOutOfRange => "obstacle limit must be between 1 and 4",
            ConfigError::NonPositivePlayerStep => "player step sizes must be positive",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config ({}): {}", self.code(), self.message())
    }
}

impl std::error::Error for ConfigError {}
