use crate::style::css_rgba;
use glam::{Vec2, Vec4};
use warp_core::Surface2d;
use web_sys as web;

/// `Surface2d` over a 2D canvas context, in backing-store pixels.
pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        ctx.set_line_cap("round");
        Self { ctx }
    }
}

impl Surface2d for CanvasSurface<'_> {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&css_rgba(color));
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
