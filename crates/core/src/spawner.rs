//! Obstacle spawner - decides when and how many enemy cars enter the track.
//!
//! Spawning is driven by a seeded [`StdRng`] so a session is fully
//! reproducible from its seed.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{
    ObstacleColor, Rect, MAX_OBSTACLES, OBSTACLE_HEIGHT, OBSTACLE_SPEED_MAX, OBSTACLE_SPEED_MIN,
    OBSTACLE_WIDTH, TRACK_WIDTH,
};

/// Batch returned by a single spawn decision.
pub type SpawnBatch = ArrayVec<Obstacle, MAX_OBSTACLES>;

/// Enemy car scrolling down the track at its own fixed speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub body: Rect,
    pub color: ObstacleColor,
    /// Units per tick, set once at spawn
    pub speed: i32,
}

impl Obstacle {
    /// Create an obstacle with its top edge at `y = 0`
    pub fn new(x: i32, color: ObstacleColor, speed: i32) -> Self {
        Self {
            body: Rect::from_origin(x, 0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            color,
            speed,
        }
    }

    /// Move down by this obstacle's speed
    pub fn advance(&mut self) {
        self.body.translate(0, self.speed);
    }

    /// Whether the top edge has scrolled past the bottom of the track
    pub fn is_past(&self, track_height: i32) -> bool {
        self.body.y_min > track_height
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    rng: StdRng,
    seed: u64,
    max_obstacles: usize,
}

impl ObstacleSpawner {
    /// Create a spawner with the given seed.
    ///
    /// `max_obstacles` is capped at [`MAX_OBSTACLES`].
    pub fn new(seed: u64, max_obstacles: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            max_obstacles: max_obstacles.min(MAX_OBSTACLES),
        }
    }

    /// Seed this spawner was created with (used to restart a session)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_obstacles(&self) -> usize {
        self.max_obstacles
    }

    /// Decide whether to spawn, and build the new obstacles.
    ///
    /// Returns an empty batch when `current_count` is already at the limit.
    /// Otherwise one or two obstacles are created (uniform choice), truncated
    /// so that `current_count + batch.len()` never exceeds the limit.
    pub fn maybe_spawn(&mut self, current_count: usize) -> SpawnBatch {
        let mut batch = SpawnBatch::new();
        if current_count >= self.max_obstacles {
            return batch;
        }

        let wanted: usize = self.rng.gen_range(1..=2);
        let room = self.max_obstacles - current_count;
        for _ in 0..wanted.min(room) {
            let obstacle = self.spawn_one();
            debug!(
                x = obstacle.body.x_min,
                color = obstacle.color.as_str(),
                speed = obstacle.speed,
                "obstacle spawned"
            );
            batch.push(obstacle);
        }

        debug!(
            current_count,
            wanted,
            spawned = batch.len(),
            "spawn decision"
        );
        batch
    }

    /// Build one obstacle with randomized position, color, and speed.
    pub fn spawn_one(&mut self) -> Obstacle {
        let x = self.rng.gen_range(0..=TRACK_WIDTH - OBSTACLE_WIDTH);
        let color = *ObstacleColor::PALETTE
            .choose(&mut self.rng)
            .unwrap_or(&ObstacleColor::Red);
        let speed = self.rng.gen_range(OBSTACLE_SPEED_MIN..=OBSTACLE_SPEED_MAX);
        Obstacle::new(x, color, speed)
    }
}

impl Default for ObstacleSpawner {
    fn default() -> Self {
        Self::new(1, MAX_OBSTACLES)
    }
}
