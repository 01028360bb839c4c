//! Terminal racer (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`. The
//! tick loop is explicit: poll input until the next tick is due, step, re-arm.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_racer::core::{GameConfig, GameSnapshot, GameState, VerticalBounds};
use tui_racer::engine::TickScheduler;
use tui_racer::input::{accepts, handle_key_event, should_quit};
use tui_racer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_racer::types::{GameAction, GameEvent, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-racer")]
#[command(about = "Dodge the traffic on an endless two-lane road")]
#[command(version)]
struct Cli {
    /// Seed for obstacle spawning (time-based when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Keep the car inside the visible track when moving forward/backward
    #[arg(long)]
    clamp_vertical: bool,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let bounds = if cli.clamp_vertical {
        VerticalBounds::Track
    } else {
        VerticalBounds::Unbounded
    };
    let config = GameConfig::default()
        .with_tick_interval_ms(cli.tick_ms)
        .with_vertical_bounds(bounds);
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(time_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u64) -> Result<()> {
    let mut game = GameState::with_config(config, seed);
    game.start();
    info!(seed, tick_ms = config.tick_interval_ms, "session started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut scheduler = TickScheduler::from_millis(config.tick_interval_ms, Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        if event::poll(scheduler.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        if accepts(key.kind, action) && game.apply_action(action) {
                            debug!(action = action.as_str(), "action applied");
                            if action == GameAction::Restart {
                                scheduler.rearm(Instant::now());
                                info!(episode_id = game.episode_id(), "restarted");
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if scheduler.due(Instant::now()) {
            let status = game.step();
            scheduler.complete(status, Instant::now());

            for ev in game.take_events() {
                match ev {
                    GameEvent::ScoreChanged(score) => debug!(score, "score"),
                    GameEvent::GameOver { message } => {
                        info!(score = game.score(), ticks = game.tick_count(), reason = message, "game over")
                    }
                }
            }
        }
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
