//! Demo controller that plays by itself
//!
//! Drives the pointer for the headless runner and attract mode. It reads the
//! same state a player sees and produces a pointer x; it never touches the
//! simulation directly.

use crate::game::PointerSource;
use crate::settings::Variant;
use crate::sim::GameState;

/// Pointer-steering AI
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Horizontal offset from the tracked object (0 = dead center)
    pub offset: f32,
}

impl Autopilot {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }

    /// Where the pointer should be for the next frame
    pub fn target_x(&self, state: &GameState) -> f32 {
        let ball = &state.ball;
        match state.variant {
            // The ball moves before the paddle does, so lead it by one frame
            Variant::Bounce => ball.pos.x + ball.vel.x + self.offset,
            Variant::Drop { .. } => {
                // Chase whichever falling object is closer to the paddle
                let star = &state.star;
                if star.active && star.pos.y > ball.pos.y {
                    star.pos.x + self.offset
                } else {
                    ball.pos.x + self.offset
                }
            }
        }
    }
}

impl PointerSource for Autopilot {
    fn pointer_x(&mut self, state: &GameState) -> Option<f32> {
        Some(self.target_x(state))
    }
}
