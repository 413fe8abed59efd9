//! Per-frame simulation step
//!
//! One call to [`tick`] is one displayed frame. Velocities are in pixels per
//! frame, so there is no `dt`.

use rand::Rng;

use super::collision::{circle_rect_overlap, falling_catch, outside_side_walls};
use super::state::{GameEvent, GameState};
use crate::settings::Variant;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x relative to the canvas left edge (coalesced)
    pub pointer_x: f32,
}

impl TickInput {
    pub fn new(pointer_x: f32) -> Self {
        Self { pointer_x }
    }
}

/// Advance the game state by one frame and report what happened.
///
/// Randomness is only consumed when a ball or star (re)spawns.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    match state.variant {
        Variant::Bounce => tick_bounce(state, input, rng, &mut events),
        Variant::Drop { bonus_star } => tick_drop(state, input, bonus_star, rng, &mut events),
    }

    events
}

/// Drifting ball with wall, ceiling and paddle reflection. Step order matters.
fn tick_bounce<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let t = state.tuning;

    // 1. Integrate
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // 2. Side walls: flip only, a one-frame overshoot is left alone
    if outside_side_walls(ball.pos, ball.radius, t.width) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    // 3. Ceiling: clamp back inside and flip
    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    // 4. Paddle follows pointer
    state.paddle.follow(input.pointer_x);

    // 5. Catch (descending only)
    let ball = &mut state.ball;
    if ball.vel.y > 0.0 && circle_rect_overlap(ball.pos, ball.radius, &state.paddle.rect()) {
        state.score += 1;

        let mut vy = -ball.vel.y.abs() * t.catch_vy_boost;
        ball.vel.x *= t.catch_vx_boost;
        ball.pos.y = state.paddle.y - ball.radius - t.catch_lift;

        events.push(GameEvent::Caught { score: state.score });
        if state.score % t.milestone_every == 0 {
            vy += vy.signum() * t.milestone_vy_bonus;
            events.push(GameEvent::Milestone { score: state.score });
        }
        ball.vel.y = vy;

        log::debug!(
            "Catch #{} (vel {:.2}, {:.2})",
            state.score,
            ball.vel.x,
            ball.vel.y
        );
    }

    // 6. Missed: bottom edge crossed
    if state.ball.bottom() > t.height {
        game_over(state, rng, events);
    }
}

/// Straight fall with respawn-on-catch and the optional bonus star
fn tick_drop<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    bonus_star: bool,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let t = state.tuning;

    state.ball.pos.y += state.ball.vel.y;
    state.paddle.follow(input.pointer_x);
    let paddle = state.paddle.rect();

    if falling_catch(state.ball.pos, state.ball.radius, &paddle) {
        state.score += 1;
        state.balls_caught += 1;
        state.ball.respawn_at_top(t.width, rng);
        events.push(GameEvent::Caught { score: state.score });

        if state.balls_caught % t.milestone_every == 0 {
            state.ball.vel.y += t.drop_speed_step;
            events.push(GameEvent::Milestone { score: state.score });
            log::debug!("Drop speed now {:.1}", state.ball.vel.y);

            if bonus_star {
                state.star.spawn(state.ball.vel.y, &t, rng);
                events.push(GameEvent::StarSpawned);
                log::debug!("Star spawned at x={:.0}", state.star.pos.x);
            }
        }
    }

    if state.star.active {
        let star = &mut state.star;
        star.pos.y += star.speed;

        if falling_catch(star.pos, star.radius, &paddle) {
            state.score += t.star_points;
            star.active = false;
            events.push(GameEvent::StarCaught { score: state.score });
        } else if star.pos.y > t.height {
            star.active = false;
            events.push(GameEvent::StarLost);
        }
    }

    // Drop variant ends on the center leaving the canvas, not the edge
    if state.ball.pos.y > t.height {
        game_over(state, rng, events);
    }
}

fn game_over<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    let final_score = state.score;
    log::info!("Game over! Score: {} (frame {})", final_score, state.frame);
    state.reset(rng);
    events.push(GameEvent::GameOver { final_score });
}
