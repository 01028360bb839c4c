//! TUI Racer (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_racer::{core,engine,input,term,types}`
//! namespace; the implementation lives in dedicated crates under `crates/`.

pub use tui_racer_core as core;
pub use tui_racer_engine as engine;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;
