//! Rendering module
//!
//! The game draws through the [`Surface`] trait: a 2D canvas-like target with
//! a top-left origin. The browser build backs it with a canvas 2D context; the
//! native runner and tests record commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::STAR_SPIKES;
use crate::settings::Settings;
use crate::sim::GameState;

/// Drawing primitives the game needs from its host
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_polygon(&mut self, points: &[Vec2], color: &str);
    /// `(x, y)` is the left end of the text baseline
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw one frame. Reads the state, never mutates it.
pub fn draw<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let t = &state.tuning;
    surface.clear_rect(0.0, 0.0, t.width, t.height);

    surface.fill_circle(state.ball.pos, state.ball.radius, &settings.ball_color);

    if state.star.active {
        let outline = shapes::star(
            state.star.pos,
            STAR_SPIKES,
            state.star.radius,
            state.star.radius * 0.5,
        );
        surface.fill_polygon(&outline, &settings.star_color);
    }

    let paddle = &state.paddle;
    surface.fill_rect(
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
        &settings.paddle_color,
    );

    let (x, y) = settings.score_pos;
    surface.fill_text(
        &format!("Score: {}", state.score),
        x,
        y,
        &settings.score_font,
        &settings.score_color,
    );
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Polygon {
        points: Vec<Vec2>,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Surface that records commands instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandBuffer {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
