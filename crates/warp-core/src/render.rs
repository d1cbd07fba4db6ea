use crate::config::Palette;
use crate::projection::{Sprite, Viewport};
use glam::{Vec2, Vec4};

/// Immediate-mode 2D drawing surface. Coordinates are pixels with the origin
/// at the top-left; colors are straight (non-premultiplied) RGBA.
pub trait Surface2d {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4);
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4);
}

/// Paint one frame: translucent background, stars, then the flash overlay.
pub fn draw_frame<S: Surface2d + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    palette: &Palette,
    sprites: &[Sprite],
    flash: f32,
) {
    if viewport.is_degenerate() {
        return;
    }
    let size = Vec2::new(viewport.width, viewport.height);
    surface.fill_rect(Vec2::ZERO, size, palette.background);

    for sprite in sprites {
        let alpha = sprite.alpha();
        if alpha <= 0.0 {
            continue;
        }
        let color = palette.star.extend(alpha);
        match *sprite {
            Sprite::Dot { center, radius, .. } => surface.fill_circle(center, radius, color),
            Sprite::Streak {
                head, tail, width, ..
            } => surface.draw_line(tail, head, width, color),
        }
    }

    let flash = flash.clamp(0.0, 1.0);
    if flash > 0.0 {
        surface.fill_rect(Vec2::ZERO, size, palette.flash.extend(flash));
    }
}
