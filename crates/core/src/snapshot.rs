use arrayvec::ArrayVec;

use crate::spawner::Obstacle;
use crate::track::LANE_MARKER_COUNT;
use crate::types::{Rect, MAX_OBSTACLES};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player: Rect,
    pub obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    pub segments: [Rect; 2],
    pub lane_markers: [Rect; LANE_MARKER_COUNT],
    pub score: u32,
    pub tick: u64,
    pub episode_id: u32,
    pub seed: u64,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.player = Rect::default();
        self.obstacles.clear();
        self.segments = [Rect::default(); 2];
        self.lane_markers = [Rect::default(); LANE_MARKER_COUNT];
        self.score = 0;
        self.tick = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player: Rect::default(),
            obstacles: ArrayVec::new(),
            segments: [Rect::default(); 2],
            lane_markers: [Rect::default(); LANE_MARKER_COUNT],
            score: 0,
            tick: 0,
            episode_id: 0,
            seed: 0,
            paused: false,
            game_over: false,
        }
    }
}
