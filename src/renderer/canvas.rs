//! Canvas 2D backend for the browser build

#![allow(deprecated)]

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// Draws straight onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
