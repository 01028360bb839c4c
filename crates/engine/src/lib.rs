//! Engine module - drives the core from outside.
//!
//! The core never schedules itself. This crate provides the explicit loop
//! pieces a front end needs: a re-arming [`TickScheduler`] and headless
//! drivers for scripted runs, benchmarks, and tests.

pub mod headless;
pub mod scheduler;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use headless::{run_paced, run_script, run_ticks, RunSummary, ScriptedAction};
pub use scheduler::TickScheduler;
