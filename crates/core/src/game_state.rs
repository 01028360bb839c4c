//! Game state module - manages the complete game state
//!
//! This module ties together all core components: track, spawner, and
//! collision. It owns the player car, the live obstacles and the score, and
//! advances everything one discrete tick at a time via [`GameState::step`].

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::{GameConfig, VerticalBounds};
use crate::geometry::{intersects, within_x, within_y};
use crate::snapshot::GameSnapshot;
use crate::spawner::{Obstacle, ObstacleSpawner};
use crate::track::ScrollingTrack;
use crate::types::*;

/// Live obstacles, in spawn order.
pub type ObstacleList = ArrayVec<Obstacle, MAX_OBSTACLES>;

/// Events one step can emit: a score update per recycled obstacle plus game over.
pub const EVENT_CAPACITY: usize = MAX_OBSTACLES + 1;

/// Player-controlled car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerCar {
    pub body: Rect,
}

impl PlayerCar {
    /// Create the car at its starting position
    pub fn new() -> Self {
        Self {
            body: Rect::from_origin(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

impl Default for PlayerCar {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    track: ScrollingTrack,
    player: PlayerCar,
    obstacles: ObstacleList,
    spawner: ObstacleSpawner,
    /// Events produced by the most recent step (consumed by the front end).
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
    score: u32,
    /// Number of steps that advanced the simulation.
    tick: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the default configuration and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new game with an explicit configuration
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            track: ScrollingTrack::new(),
            player: PlayerCar::new(),
            obstacles: ObstacleList::new(),
            spawner: ObstacleSpawner::new(seed, config.max_obstacles),
            events: ArrayVec::new(),
            score: 0,
            tick: 0,
            episode_id: 0,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the opening wave of obstacles.
    ///
    /// `step` does not require a started game, so scripted sessions can skip
    /// this and place their own obstacles with [`GameState::insert_obstacle`].
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let batch = self.spawner.maybe_spawn(self.obstacles.len());
        self.obstacles.extend(batch);
        debug!(
            episode_id = self.episode_id,
            seed = self.spawner.seed(),
            obstacles = self.obstacles.len(),
            "game started"
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerCar {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn track(&self) -> &ScrollingTrack {
        &self.track
    }

    /// Events emitted by the most recent step
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the events of the most recent step.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Place an obstacle explicitly (scripted scenarios, replays).
    ///
    /// Returns `false` when the obstacle limit is already reached or the game
    /// is over.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) -> bool {
        if self.game_over || self.obstacles.len() >= self.spawner.max_obstacles() {
            return false;
        }
        self.obstacles.push(obstacle);
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player = self.player.body;
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().copied());
        out.segments = *self.track.segments();
        out.lane_markers = *self.track.lane_markers();
        out.score = self.score;
        out.tick = self.tick;
        out.episode_id = self.episode_id;
        out.seed = self.spawner.seed();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by one tick.
    ///
    /// Order: scroll the track, then move each obstacle by its own speed and
    /// test it against the player. The first hit latches game over and leaves
    /// the remaining obstacles untouched. Obstacles that scrolled past the
    /// bottom edge are dropped, each scoring a point and triggering one spawn
    /// decision.
    ///
    /// Returns [`TickStatus::Continue`] while the scheduler should keep
    /// re-arming the tick.
    pub fn step(&mut self) -> TickStatus {
        if self.game_over {
            return TickStatus::Stopped;
        }
        if self.paused {
            return TickStatus::Continue;
        }

        self.events.clear();
        self.tick = self.tick.wrapping_add(1);
        self.track.advance(self.config.tick_delta);

        // Retained obstacles go into a fresh list; the old one is consumed.
        let current = std::mem::take(&mut self.obstacles);
        let mut retained = ObstacleList::new();
        let mut recycled = 0usize;
        let mut pending = current.into_iter();

        while let Some(mut obstacle) = pending.next() {
            obstacle.advance();

            if intersects(&self.player.body, &obstacle.body) {
                retained.push(obstacle);
                retained.extend(pending);
                self.obstacles = retained;
                // Cars that already left the track this tick still get replaced.
                self.spawn_replacements(recycled);
                self.finish_game_over(obstacle);
                return TickStatus::Stopped;
            }

            if obstacle.is_past(TRACK_HEIGHT) {
                recycled += 1;
                self.score = self.score.saturating_add(1);
                let _ = self.events.try_push(GameEvent::ScoreChanged(self.score));
                debug!(score = self.score, speed = obstacle.speed, "obstacle recycled");
                continue;
            }

            retained.push(obstacle);
        }

        self.obstacles = retained;
        self.spawn_replacements(recycled);

        TickStatus::Continue
    }

    /// One spawn decision per recycled obstacle.
    fn spawn_replacements(&mut self, recycled: usize) {
        for _ in 0..recycled {
            let batch = self.spawner.maybe_spawn(self.obstacles.len());
            self.obstacles.extend(batch);
        }
    }

    fn finish_game_over(&mut self, hit: Obstacle) {
        self.game_over = true;
        let _ = self.events.try_push(GameEvent::GameOver {
            message: GAME_OVER_MESSAGE,
        });
        debug!(
            score = self.score,
            tick = self.tick,
            player = ?self.player.body,
            obstacle = ?hit.body,
            "collision, game over"
        );
    }

    /// Steer one step left; rejected at the left road edge.
    pub fn move_left(&mut self) -> bool {
        self.try_move(-self.config.player_step_x, 0)
    }

    /// Steer one step right; rejected at the right road edge.
    pub fn move_right(&mut self) -> bool {
        self.try_move(self.config.player_step_x, 0)
    }

    pub fn move_forward(&mut self) -> bool {
        self.try_move(0, -self.config.player_step_y)
    }

    pub fn move_backward(&mut self) -> bool {
        self.try_move(0, self.config.player_step_y)
    }

    /// Try to move the player car
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over || self.paused {
            return false;
        }

        let target = self.player.body.translated(dx, dy);

        if dx != 0 && !within_x(&target, ROAD_LEFT, ROAD_RIGHT) {
            return false;
        }

        if dy != 0
            && self.config.vertical_bounds == VerticalBounds::Track
            && !within_y(&target, 0, TRACK_HEIGHT)
        {
            return false;
        }

        self.player.body = target;
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveForward => self.move_forward(),
            GameAction::MoveBackward => self.move_backward(),
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                let seed = self.spawner.seed();
                let next_episode = self.episode_id.wrapping_add(1);
                *self = Self::with_config(self.config, seed);
                self.episode_id = next_episode;
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle_at(x: i32, y: i32, speed: i32) -> Obstacle {
        let mut o = Obstacle::new(x, ObstacleColor::Red, speed);
        o.body = Rect::from_origin(x, y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        o
    }

    #[test]
    fn new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick, 0);
        assert_eq!(state.episode_id, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.body, Rect::new(170, 500, 230, 550));
    }

    #[test]
    fn start_spawns_opening_wave() {
        let mut state = GameState::new(12345);
        state.start();

        assert!(state.started);
        assert!((1..=2).contains(&state.obstacles.len()));

        // Starting twice does not spawn again.
        let count = state.obstacles.len();
        state.start();
        assert_eq!(state.obstacles.len(), count);
    }

    #[test]
    fn step_scrolls_track_and_obstacles() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 0, 13));

        assert_eq!(state.step(), TickStatus::Continue);
        assert_eq!(state.tick, 1);
        assert_eq!(state.track.segments()[0].y_min, 10);
        // Obstacles move by their own speed, not by the track delta.
        assert_eq!(state.obstacles[0].body.y_min, 13);
    }

    #[test]
    fn collision_latches_game_over() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(170, 0, 15));

        for _ in 0..31 {
            assert_eq!(state.step(), TickStatus::Continue);
        }
        assert!(!state.game_over);

        // Tick 32: obstacle spans y 480..510, overlapping the car at 500..550.
        assert_eq!(state.step(), TickStatus::Stopped);
        assert!(state.game_over);
        assert_eq!(state.obstacles[0].body.y_min, 480);
        assert_eq!(
            state.events(),
            &[GameEvent::GameOver {
                message: GAME_OVER_MESSAGE
            }]
        );
    }

    #[test]
    fn collision_stops_processing_remaining_obstacles() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(180, 470, 15));
        state.obstacles.push(obstacle_at(0, 100, 12));

        assert_eq!(state.step(), TickStatus::Stopped);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].body.y_min, 485);
        // Second obstacle was never advanced.
        assert_eq!(state.obstacles[1].body.y_min, 100);
    }

    #[test]
    fn game_over_step_is_noop() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(170, 480, 15));
        assert_eq!(state.step(), TickStatus::Stopped);

        let before = state.snapshot();
        for _ in 0..10 {
            assert_eq!(state.step(), TickStatus::Stopped);
        }
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn recycle_scores_and_spawns() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 590, 15));

        assert_eq!(state.step(), TickStatus::Continue);
        assert_eq!(state.score, 1);
        assert_eq!(state.events(), &[GameEvent::ScoreChanged(1)]);

        // The recycled obstacle is gone; the spawner replaced it with 1 or 2
        // fresh ones that start at the top edge.
        assert!((1..=2).contains(&state.obstacles.len()));
        for o in state.obstacles.iter() {
            assert_eq!(o.body.y_min, 0);
        }
    }

    #[test]
    fn recycle_before_collision_still_spawns() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 595, 12));
        state.obstacles.push(obstacle_at(180, 460, 12));

        assert_eq!(state.step(), TickStatus::Stopped);
        assert!(state.game_over);
        assert_eq!(state.score, 1);
        assert_eq!(
            state.events(),
            &[
                GameEvent::ScoreChanged(1),
                GameEvent::GameOver {
                    message: GAME_OVER_MESSAGE
                }
            ]
        );

        // The car that hit stays first; the replacement spawned at the top.
        assert_eq!(state.obstacles[0].body.y_min, 472);
        assert!((2..=3).contains(&state.obstacles.len()));
        assert!(state.obstacles[1..].iter().all(|o| o.body.y_min == 0));
    }

    #[test]
    fn obstacle_on_bottom_edge_is_not_recycled() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 588, 12));

        state.step();
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles[0].body.y_min, 600);
    }

    #[test]
    fn multiple_recycles_in_one_tick() {
        let mut state = GameState::new(9);
        state.obstacles.push(obstacle_at(0, 595, 12));
        state.obstacles.push(obstacle_at(300, 595, 18));
        state.obstacles.push(obstacle_at(360, 100, 12));

        state.step();
        assert_eq!(state.score, 2);
        assert_eq!(
            state.events(),
            &[GameEvent::ScoreChanged(1), GameEvent::ScoreChanged(2)]
        );
        assert!(state.obstacles.len() <= MAX_OBSTACLES);
        assert_eq!(state.obstacles[0].body.y_min, 112);
    }

    #[test]
    fn obstacle_limit_holds_over_long_run() {
        let mut state = GameState::new(77);
        state.start();
        // Park the car off the road's vertical span so nothing can hit it.
        state.player.body = Rect::new(170, 2000, 230, 2050);

        let mut last_score = 0;
        for _ in 0..5000 {
            state.step();
            assert!(state.obstacles.len() <= MAX_OBSTACLES);
            assert!(state.score >= last_score);
            last_score = state.score;
        }
        assert!(!state.game_over);
        assert!(state.score > 0);
    }

    #[test]
    fn move_left_clamps_at_road_edge() {
        let mut state = GameState::new(1);

        for _ in 0..6 {
            assert!(state.move_left());
        }
        assert_eq!(state.player.body.x_min, ROAD_LEFT);

        for _ in 0..10 {
            assert!(!state.move_left());
        }
        assert_eq!(state.player.body.x_min, ROAD_LEFT);
    }

    #[test]
    fn move_right_clamps_at_road_edge() {
        let mut state = GameState::new(1);

        for _ in 0..6 {
            assert!(state.move_right());
        }
        assert_eq!(state.player.body.x_max, ROAD_RIGHT);
        assert!(!state.move_right());
        assert_eq!(state.player.body.x_max, ROAD_RIGHT);
    }

    #[test]
    fn vertical_moves_unbounded_by_default() {
        let mut state = GameState::new(1);

        for _ in 0..100 {
            assert!(state.move_forward());
        }
        assert_eq!(state.player.body.y_min, 500 - 1000);

        for _ in 0..200 {
            assert!(state.move_backward());
        }
        assert_eq!(state.player.body.y_min, 500 + 1000);
    }

    #[test]
    fn vertical_moves_clamped_to_track_when_configured() {
        let cfg = GameConfig::default().with_vertical_bounds(VerticalBounds::Track);
        let mut state = GameState::with_config(cfg, 1);

        for _ in 0..5 {
            assert!(state.move_backward());
        }
        assert_eq!(state.player.body.y_max, TRACK_HEIGHT);
        assert!(!state.move_backward());

        while state.move_forward() {}
        assert_eq!(state.player.body.y_min, 0);
    }

    #[test]
    fn moves_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.game_over = true;
        let before = state.player;

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(!state.apply_action(GameAction::MoveForward));
        assert!(!state.apply_action(GameAction::MoveBackward));
        assert!(!state.apply_action(GameAction::Pause));
        assert_eq!(state.player, before);
    }

    #[test]
    fn pause_freezes_simulation() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 0, 12));

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused);

        let before = state.snapshot();
        for _ in 0..10 {
            assert_eq!(state.step(), TickStatus::Continue);
        }
        assert!(!state.move_left());
        assert_eq!(state.snapshot(), before);

        state.apply_action(GameAction::Pause);
        assert!(!state.paused);
        state.step();
        assert_eq!(state.obstacles[0].body.y_min, 12);
    }

    #[test]
    fn restart_increments_episode_and_keeps_seed() {
        let mut state = GameState::new(4242);
        state.start();
        state.obstacles.clear();
        state.obstacles.push(obstacle_at(170, 480, 15));
        state.step();
        assert!(state.game_over);

        assert!(state.apply_action(GameAction::Restart));
        assert!(!state.game_over);
        assert!(state.started);
        assert_eq!(state.score, 0);
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.seed(), 4242);

        let mut fresh = GameState::new(4242);
        fresh.start();
        assert_eq!(state.obstacles, fresh.obstacles);
    }

    #[test]
    fn insert_obstacle_respects_limit() {
        let mut state = GameState::new(1);
        for i in 0..MAX_OBSTACLES {
            assert!(state.insert_obstacle(obstacle_at(i as i32 * 50, 0, 12)));
        }
        assert!(!state.insert_obstacle(obstacle_at(0, 0, 12)));
        assert_eq!(state.obstacles.len(), MAX_OBSTACLES);
    }

    #[test]
    fn take_events_drains() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(0, 595, 12));
        state.step();

        let events = state.take_events();
        assert_eq!(events.as_slice(), &[GameEvent::ScoreChanged(1)]);
        assert!(state.events().is_empty());
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = GameState::new(2024);
        let mut b = GameState::new(2024);
        a.start();
        b.start();

        for i in 0..300 {
            if i % 7 == 0 {
                a.move_left();
                b.move_left();
            }
            if i % 11 == 0 {
                a.move_right();
                b.move_right();
            }
            assert_eq!(a.step(), b.step());
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn default_game_state() {
        let state = GameState::default();
        assert!(!state.started);
        assert_eq!(state.seed(), 1);
        assert_eq!(state.score, 0);
    }
}
