//! Game session: state, seeded RNG, latest pointer input, and the frame driver
//!
//! Hosts feed pointer positions in whenever they arrive and call
//! [`Game::frame`] once per display refresh. Pointer updates between frames
//! are coalesced; only the most recent one reaches the simulation.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Supplies a pointer position before each frame (autopilot, replay, ...)
pub trait PointerSource {
    /// `None` keeps the previous pointer position
    fn pointer_x(&mut self, state: &GameState) -> Option<f32>;
}

/// Running totals across games in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub games_played: u32,
    pub best_score: u32,
    pub total_catches: u32,
}

impl SessionStats {
    fn record(&mut self, events: &[GameEvent]) {
        self.frames += 1;
        for event in events {
            match *event {
                GameEvent::Caught { score } => {
                    self.total_catches += 1;
                    self.best_score = self.best_score.max(score);
                }
                GameEvent::StarCaught { score } => {
                    self.best_score = self.best_score.max(score);
                }
                GameEvent::GameOver { final_score } => {
                    self.games_played += 1;
                    self.best_score = self.best_score.max(final_score);
                }
                _ => {}
            }
        }
    }
}

/// Game instance holding all session state
pub struct Game {
    state: GameState,
    settings: Settings,
    rng: Pcg32,
    input: TickInput,
    stats: SessionStats,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(settings.tuning, settings.variant, &mut rng);
        // Pointer starts in the middle of the canvas, matching the paddle
        let input = TickInput::new(settings.tuning.width / 2.0);

        log::info!(
            "Session started ({}, seed {})",
            settings.variant.as_str(),
            seed
        );

        Self {
            state,
            settings,
            rng,
            input,
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Record the latest pointer x; overwrites anything not yet consumed
    pub fn set_pointer_x(&mut self, x: f32) {
        self.input.pointer_x = x;
    }

    pub fn pointer_x(&self) -> f32 {
        self.input.pointer_x
    }

    /// Advance the simulation one frame
    pub fn update(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.input, &mut self.rng);
        self.stats.record(&events);

        for event in &events {
            if let GameEvent::GameOver { final_score } = event {
                log::info!(
                    "Game {} over with {} (best {})",
                    self.stats.games_played,
                    final_score,
                    self.stats.best_score
                );
            }
        }

        events
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        renderer::draw(&self.state, &self.settings, surface);
    }

    /// One display refresh: update, then render
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        let events = self.update();
        self.render(surface);
        events
    }

    /// Drive `frames` frames back to back, polling `pointer` before each one.
    ///
    /// Returns every event in order. Used by headless hosts; the browser
    /// drives `frame` from `requestAnimationFrame` instead.
    pub fn run<S, P>(&mut self, surface: &mut S, frames: u64, pointer: &mut P) -> Vec<GameEvent>
    where
        S: Surface + ?Sized,
        P: PointerSource + ?Sized,
    {
        let mut events = Vec::new();
        for _ in 0..frames {
            if let Some(x) = pointer.pointer_x(&self.state) {
                self.set_pointer_x(x);
            }
            events.extend(self.frame(surface));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandBuffer, DrawCommand};

    /// Pointer that stays put far off the left edge
    struct Away;

    impl PointerSource for Away {
        fn pointer_x(&mut self, _state: &GameState) -> Option<f32> {
            Some(-1000.0)
        }
    }

    #[test]
    fn test_pointer_updates_coalesce() {
        let mut game = Game::new(Settings::default(), 1);
        assert_eq!(game.settings(), &Settings::default());
        assert_eq!(game.pointer_x(), 200.0);

        game.set_pointer_x(10.0);
        game.set_pointer_x(50.0);
        game.set_pointer_x(300.0);
        game.update();

        assert_eq!(game.state().paddle.x, 260.0);
    }

    #[test]
    fn test_frame_updates_then_renders() {
        let mut game = Game::new(Settings::default(), 1);
        let mut buffer = CommandBuffer::new();

        game.frame(&mut buffer);

        assert_eq!(game.stats().frames, 1);
        // Rendered ball matches the already-advanced state
        match &buffer.commands[1] {
            DrawCommand::Circle { center, .. } => assert_eq!(*center, game.state().ball.pos),
            other => panic!("expected ball, got {other:?}"),
        }
    }

    #[test]
    fn test_stats_track_games() {
        let mut game = Game::new(Settings::default(), 4);
        let mut buffer = CommandBuffer::new();

        let events = game.run(&mut buffer, 1000, &mut Away);

        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count() as u32;
        assert!(game_overs >= 1);
        assert_eq!(game.stats().games_played, game_overs);
        assert_eq!(game.stats().best_score, 0);
        assert_eq!(game.stats().frames, 1000);
    }

    #[test]
    fn test_stats_record_best() {
        let mut stats = SessionStats::default();
        stats.record(&[GameEvent::Caught { score: 3 }]);
        stats.record(&[GameEvent::StarCaught { score: 8 }]);
        stats.record(&[GameEvent::GameOver { final_score: 8 }]);
        stats.record(&[GameEvent::Caught { score: 1 }]);

        assert_eq!(stats.frames, 4);
        assert_eq!(stats.best_score, 8);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.total_catches, 2);
    }
}
