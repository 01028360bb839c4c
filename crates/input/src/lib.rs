//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events: it maps them into [`crate::types::GameAction`] values and detects
//! quit chords. Held keys rely on terminal auto-repeat.

pub mod map;

pub use tui_racer_types as types;

pub use map::{accepts, handle_key_event, is_steering, should_quit};
