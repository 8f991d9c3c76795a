use glam::Vec2;
use std::f64::consts::TAU;
use trails_core::{Rgb, Surface};
use web_sys as web;

/// `Surface` over a canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, color: Rgb) {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        // rejects negative radii only, which the engine never produces
        _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radius as f64,
            radius as f64,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgb) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}
