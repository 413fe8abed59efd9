//! Catch the Ball - a single-screen paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle collision, scoring)
//! - `renderer`: Drawing-surface abstraction and the per-frame draw pass
//! - `game`: Session wrapper (seeded RNG, coalesced pointer, frame driver)
//! - `autopilot`: Demo controller that plays the game by itself
//! - `settings` / `tuning`: Data-driven presentation and game balance

pub mod autopilot;
pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use error::ConfigError;
pub use game::{Game, PointerSource, SessionStats};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels, origin top-left)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Fall speed a fresh ball starts with (pixels/frame)
    pub const BALL_RESTART_SPEED: f32 = 3.0;
    /// Horizontal spawn speed is drawn from [-max, max)
    pub const BALL_SPAWN_VX_MAX: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the canvas bottom to the paddle top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;

    /// Vertical speed multiplier applied on every catch
    pub const CATCH_VY_BOOST: f32 = 1.05;
    /// Horizontal speed multiplier applied on every catch
    pub const CATCH_VX_BOOST: f32 = 1.02;
    /// Gap left between ball and paddle after a catch (prevents re-triggering)
    pub const CATCH_LIFT: f32 = 1.0;

    /// Every Nth point is a milestone
    pub const MILESTONE_EVERY: u32 = 5;
    /// Extra vertical speed added at a milestone (bounce variant)
    pub const MILESTONE_VY_BONUS: f32 = 0.5;
    /// Fall speed added at a milestone (drop variant)
    pub const DROP_SPEED_STEP: f32 = 0.5;

    /// Bonus star defaults (drop variant)
    pub const STAR_RADIUS: f32 = 14.0;
    pub const STAR_MIN_SPEED: f32 = 5.0;
    /// Star always falls at least this much faster than the ball
    pub const STAR_SPEED_LEAD: f32 = 2.0;
    pub const STAR_POINTS: u32 = 5;
    pub const STAR_SPIKES: usize = 5;
}
