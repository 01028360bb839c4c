//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation of the car-dodging game: track
//! scrolling, obstacle spawning, collision detection, and scoring.
//! It has no dependencies on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is exercised without a renderer
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`geometry`]: axis-aligned rectangle intersection
//! - [`track`]: two tiled road segments and wrapping lane dashes
//! - [`spawner`]: randomized obstacle creation with a hard live limit
//! - [`config`]: tunable session parameters and validation
//! - [`game_state`]: player car, obstacles, score, and the tick
//! - [`snapshot`]: copy-out view for renderers
//!
//! # Game Rules
//!
//! - The road scrolls 10 units per tick; obstacles fall at their own
//!   speed (12-18 units per tick) chosen at spawn
//! - Touching edges is not a collision; any overlap ends the game
//! - Every obstacle that leaves the bottom edge scores one point and
//!   triggers a new spawn decision (1 or 2 cars, never more than 4 live)
//! - The player steers 20 units sideways within the road, and 10 units
//!   forward/backward
//!
//! # Example
//!
//! ```
//! use tui_racer_core::GameState;
//! use tui_racer_types::{GameAction, TickStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! assert_eq!(game.player().body.x_min, 150);
//!
//! let status = game.step();
//! assert_eq!(status, TickStatus::Continue);
//! ```
//!
//! # Timing
//!
//! The core has no clock. Call [`GameState::step`](game_state::GameState::step)
//! once per tick interval (80ms by default) until it returns
//! [`TickStatus::Stopped`](types::TickStatus::Stopped).

pub mod config;
pub mod game_state;
pub mod geometry;
pub mod snapshot;
pub mod spawner;
pub mod track;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig, VerticalBounds};
pub use game_state::{GameState, ObstacleList, PlayerCar};
pub use geometry::intersects;
pub use snapshot::GameSnapshot;
pub use spawner::{Obstacle, ObstacleSpawner};
pub use track::{ScrollingTrack, LANE_MARKER_COUNT};
