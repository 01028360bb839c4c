//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout toolkits and instead renders into a simple framebuffer that
//! is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Read only `GameSnapshot`s; never mutate game state
//! - Map world units onto terminal cells with an explicit scale

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, CellRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
