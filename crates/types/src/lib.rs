//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, headless replays).
//!
//! # World Coordinates
//!
//! The simulation runs in integer world units with the origin at the top-left
//! corner of the visible track and `y` growing downwards:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TRACK_WIDTH` | 400 | Visible track width |
//! | `TRACK_HEIGHT` | 600 | Visible track height |
//! | `ROAD_LEFT` | 50 | Left edge of the drivable road |
//! | `ROAD_RIGHT` | 350 | Right edge of the drivable road |
//! | `LANE_X` | 200 | Lane divider position |
//!
//! # Timing
//!
//! - **Tick interval**: 80ms between simulation steps
//! - **Track scroll**: 10 units per tick
//! - **Obstacle speed**: 12-18 units per tick, fixed per obstacle at spawn
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{GameAction, ObstacleColor, Rect, PLAYER_HEIGHT, PLAYER_WIDTH};
//!
//! let car = Rect::from_origin(170, 500, PLAYER_WIDTH, PLAYER_HEIGHT);
//! assert_eq!(car, Rect::new(170, 500, 230, 550));
//!
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//! assert_eq!(ObstacleColor::PALETTE.len(), 4);
//! ```

/// Visible track width in world units
pub const TRACK_WIDTH: i32 = 400;

/// Visible track height in world units
pub const TRACK_HEIGHT: i32 = 600;

/// Left edge of the road (player car cannot cross it)
pub const ROAD_LEFT: i32 = 50;

/// Right edge of the road (player car cannot cross it)
pub const ROAD_RIGHT: i32 = 350;

/// Horizontal position of the dashed lane divider
pub const LANE_X: i32 = 200;

/// Length of a single lane dash
pub const LANE_DASH_LEN: i32 = 20;

/// Vertical period of lane dashes
pub const LANE_DASH_SPACING: i32 = 40;

/// Top edge of the first lane dash
pub const LANE_DASH_START: i32 = 10;

pub const PLAYER_WIDTH: i32 = 60;
pub const PLAYER_HEIGHT: i32 = 50;

/// Player spawn position (top-left corner)
pub const PLAYER_START_X: i32 = 170;
pub const PLAYER_START_Y: i32 = 500;

pub const OBSTACLE_WIDTH: i32 = 40;
pub const OBSTACLE_HEIGHT: i32 = 30;

/// Slowest obstacle speed (units per tick, inclusive)
pub const OBSTACLE_SPEED_MIN: i32 = 12;

/// Fastest obstacle speed (units per tick, inclusive)
pub const OBSTACLE_SPEED_MAX: i32 = 18;

/// Upper bound on live obstacles after any spawn decision
pub const MAX_OBSTACLES: usize = 4;

/// Track scroll distance per tick
pub const TICK_DELTA: i32 = 10;

/// Delay between simulation steps in milliseconds
pub const TICK_MS: u32 = 80;

/// Horizontal player step per command
pub const PLAYER_STEP_X: i32 = 20;

/// Vertical player step per command
pub const PLAYER_STEP_Y: i32 = 10;

/// Message carried by the terminal game-over event
pub const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Axis-aligned rectangle in world units
///
/// Edges are stored directly (`x_min`, `y_min`, `x_max`, `y_max`), matching
/// how collisions and clamping reason about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Build a rectangle from its top-left corner and size
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Return a copy moved by `(dx, dy)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_racer_types::Rect;
    ///
    /// let r = Rect::new(0, 0, 10, 10).translated(5, -5);
    /// assert_eq!(r, Rect::new(5, -5, 15, 5));
    /// ```
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x_min + dx,
            self.y_min + dy,
            self.x_max + dx,
            self.y_max + dy,
        )
    }

    /// Move in place by `(dx, dy)`
    pub fn translate(&mut self, dx: i32, dy: i32) {
        *self = self.translated(dx, dy);
    }
}

/// Obstacle car paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl ObstacleColor {
    /// Fixed palette the spawner draws from
    pub const PALETTE: [ObstacleColor; 4] = [
        ObstacleColor::Red,
        ObstacleColor::Yellow,
        ObstacleColor::Green,
        ObstacleColor::Blue,
    ];

    /// Lowercase name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleColor::Red => "red",
            ObstacleColor::Yellow => "yellow",
            ObstacleColor::Green => "green",
            ObstacleColor::Blue => "blue",
        }
    }
}

/// Player commands
///
/// Produced by the input layer (keyboard or scripted replay) and applied to
/// the game state between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Steer one step towards the left road edge
    MoveLeft,
    /// Steer one step towards the right road edge
    MoveRight,
    /// Drive one step up the screen
    MoveForward,
    /// Drop one step down the screen
    MoveBackward,
    /// Toggle pause state
    Pause,
    /// Start a fresh session with the same seed
    Restart,
}

impl GameAction {
    /// camelCase name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Notifications emitted by the core for the rendering collaborator.
///
/// Queued during a tick and drained by the front end after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was recycled; carries the new score
    ScoreChanged(u32),
    /// Terminal event; no further ticks will run this session
    GameOver { message: &'static str },
}

/// Result of one simulation step, telling the scheduler whether to re-arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Stopped,
}

impl TickStatus {
    pub fn is_continue(self) -> bool {
        matches!(self, TickStatus::Continue)
    }
}
