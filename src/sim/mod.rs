//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per displayed frame, velocities in pixels per frame
//! - Randomness only from the RNG handed to `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, falling_catch};
pub use state::{Ball, GameEvent, GameState, Paddle, Star};
pub use tick::{TickInput, tick};
