use std::time::{Duration, Instant};

use tui_racer::core::{GameState, Obstacle};
use tui_racer::engine::{run_script, run_ticks, ScriptedAction, TickScheduler};
use tui_racer::types::{GameAction, ObstacleColor, TickStatus};

#[test]
fn scheduler_stops_rearming_after_game_over() {
    let t0 = Instant::now();
    let mut state = GameState::new(1);
    state.insert_obstacle(Obstacle::new(170, ObstacleColor::Red, 18));
    let mut sched = TickScheduler::from_millis(80, t0);

    let mut now = t0;
    let mut steps = 0;
    while sched.is_armed() {
        now += sched.timeout(now);
        assert!(sched.due(now));
        let status = state.step();
        sched.complete(status, now);
        steps += 1;
    }

    assert!(state.game_over());
    assert_eq!(steps, state.tick_count());
    assert_eq!(now - t0, Duration::from_millis(80 * steps));
}

#[test]
fn same_seed_and_script_replay_identically() {
    let script = [
        ScriptedAction::new(3, GameAction::MoveLeft),
        ScriptedAction::new(10, GameAction::MoveRight),
        ScriptedAction::new(10, GameAction::MoveRight),
        ScriptedAction::new(25, GameAction::MoveForward),
    ];

    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.start();
    b.start();

    let sa = run_script(&mut a, &script, 400);
    let sb = run_script(&mut b, &script, 400);

    assert_eq!(sa, sb);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn run_ticks_on_finished_game_runs_one_noop_step() {
    let mut state = GameState::new(1);
    state.insert_obstacle(Obstacle::new(170, ObstacleColor::Red, 18));
    let first = run_ticks(&mut state, 1000);
    assert!(first.game_over);

    let before = state.snapshot();
    let second = run_ticks(&mut state, 1000);
    assert_eq!(second.ticks, 1);
    assert_eq!(state.snapshot(), before);
    assert_eq!(state.step(), TickStatus::Stopped);
}
