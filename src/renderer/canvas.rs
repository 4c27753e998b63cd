//! HTML canvas 2D backend

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// `Surface` over a browser canvas 2D context
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

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.ctx.translate(x as f64, y as f64).ok();
    }

    fn rotate(&mut self, angle: f32) {
        self.ctx.rotate(angle as f64).ok();
    }
}
