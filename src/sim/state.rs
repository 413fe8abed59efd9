//! Game state and core simulation types
//!
//! Everything a session needs to advance one frame lives here. The RNG is
//! deliberately not part of the state; callers inject it into `tick`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::Variant;
use crate::tuning::Tuning;

/// Something that happened during a tick, for the shell to present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a side wall
    WallBounce,
    /// Ball reflected off the ceiling
    CeilingBounce,
    /// Paddle caught the ball; carries the new score
    Caught { score: u32 },
    /// Score (or catch count) hit a multiple of the milestone interval
    Milestone { score: u32 },
    /// A bonus star started falling
    StarSpawned,
    /// Paddle caught the bonus star; carries the new score
    StarCaught { score: u32 },
    /// Bonus star fell off the bottom uncaught
    StarLost,
    /// Ball left the bottom edge; the session was reset in place
    GameOver { final_score: u32 },
}

/// The falling ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Move to a random column at the top edge, keeping the ball fully on screen
    pub fn respawn_at_top<R: Rng>(&mut self, width: f32, rng: &mut R) {
        self.pos = Vec2::new(rng.random_range(self.radius..width - self.radius), 0.0);
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle. Only `x` moves; it is recomputed from the pointer
/// every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.width / 2.0 - tuning.paddle_width / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    /// Center the paddle under the pointer (no clamping to the canvas)
    #[inline]
    pub fn follow(&mut self, pointer_x: f32) {
        self.x = pointer_x - self.width / 2.0;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Bonus star (drop variant only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub active: bool,
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed, pixels per frame
    pub speed: f32,
}

impl Star {
    pub fn new(radius: f32) -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            radius,
            speed: 0.0,
        }
    }

    /// Drop a star from a random column; it always outruns the ball
    pub fn spawn<R: Rng>(&mut self, ball_speed: f32, tuning: &Tuning, rng: &mut R) {
        self.pos = Vec2::new(
            rng.random_range(self.radius..tuning.width - self.radius),
            0.0,
        );
        self.speed = (ball_speed + tuning.star_speed_lead).max(tuning.star_min_speed);
        self.active = true;
    }
}

/// Complete session state (deterministic given the injected RNG)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub variant: Variant,
    pub tuning: Tuning,
    pub ball: Ball,
    pub paddle: Paddle,
    pub star: Star,
    pub score: u32,
    /// Balls caught this game (drop variant milestones count these, not points)
    pub balls_caught: u32,
    /// Frames advanced since the session started
    pub frame: u64,
}

impl GameState {
    /// Create a fresh session with a newly spawned ball
    pub fn new<R: Rng>(tuning: Tuning, variant: Variant, rng: &mut R) -> Self {
        let mut state = Self {
            variant,
            tuning,
            ball: Ball::new(tuning.ball_radius),
            paddle: Paddle::new(&tuning),
            star: Star::new(tuning.star_radius),
            score: 0,
            balls_caught: 0,
            frame: 0,
        };
        state.launch_ball(rng);
        state
    }

    /// Put the ball back at the top with its starting velocity.
    ///
    /// Bounce: random drift in `[-spawn_vx_max, spawn_vx_max)` and the restart
    /// fall speed. Drop: straight down at the restart speed.
    pub fn launch_ball<R: Rng>(&mut self, rng: &mut R) {
        let t = self.tuning;
        self.ball.radius = t.ball_radius;
        let vx = match self.variant {
            Variant::Bounce => rng.random_range(-t.spawn_vx_max..t.spawn_vx_max),
            Variant::Drop { .. } => 0.0,
        };
        self.ball.vel = Vec2::new(vx, t.restart_speed);
        self.ball.respawn_at_top(t.width, rng);
    }

    /// End the current game in place: score cleared, star gone, ball relaunched
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.balls_caught = 0;
        self.star.active = false;
        self.launch_ball(rng);
    }
}
