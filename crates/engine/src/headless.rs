//! Headless drivers: run the core without a terminal.

use std::thread;
use std::time::Instant;

use tracing::debug;

use crate::core::GameState;
use crate::scheduler::TickScheduler;
use crate::types::{GameAction, GameEvent, TickStatus};

/// Outcome of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps that actually ran (a paused step still counts)
    pub ticks: u64,
    pub score: u32,
    pub game_over: bool,
}

impl RunSummary {
    fn of(state: &GameState, ticks: u64) -> Self {
        Self {
            ticks,
            score: state.score(),
            game_over: state.game_over(),
        }
    }
}

/// An action applied just before the step with the given index (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedAction {
    pub before_tick: u64,
    pub action: GameAction,
}

impl ScriptedAction {
    pub fn new(before_tick: u64, action: GameAction) -> Self {
        Self {
            before_tick,
            action,
        }
    }
}

/// Step until game over or `max_ticks` steps have run.
pub fn run_ticks(state: &mut GameState, max_ticks: u64) -> RunSummary {
    run_script(state, &[], max_ticks)
}

/// Step with scripted input until game over or `max_ticks` steps have run.
///
/// `script` must be sorted by `before_tick`; entries for ticks that are never
/// reached are ignored.
pub fn run_script(state: &mut GameState, script: &[ScriptedAction], max_ticks: u64) -> RunSummary {
    let mut next = 0usize;
    let mut ticks = 0u64;

    while ticks < max_ticks {
        while let Some(entry) = script.get(next) {
            if entry.before_tick > ticks {
                break;
            }
            state.apply_action(entry.action);
            next += 1;
        }

        let status = state.step();
        ticks += 1;
        if status == TickStatus::Stopped {
            break;
        }
    }

    let summary = RunSummary::of(state, ticks);
    debug!(?summary, "headless run finished");
    summary
}

/// Real-time loop: step, report, sleep until the next tick, repeat.
///
/// `on_tick` sees the state and the events of every step. The loop ends when
/// the game is over or `on_tick` returns `false`.
pub fn run_paced<F>(state: &mut GameState, scheduler: &mut TickScheduler, mut on_tick: F) -> RunSummary
where
    F: FnMut(&GameState, &[GameEvent]) -> bool,
{
    let mut ticks = 0u64;

    while scheduler.is_armed() {
        thread::sleep(scheduler.timeout(Instant::now()));

        let status = state.step();
        ticks += 1;
        scheduler.complete(status, Instant::now());

        if !on_tick(&*state, state.events()) {
            break;
        }
    }

    RunSummary::of(state, ticks)
}
