use crate::config::LensConfig;
use crate::field::Star;
use glam::Vec2;

/// Render target size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative or non-finite extents; nothing useful can be drawn.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn half_extents(&self) -> Vec2 {
        if self.is_degenerate() {
            Vec2::ZERO
        } else {
            self.center()
        }
    }
}

/// Per-frame projection inputs.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct View {
    pub center: Vec2,
    pub shake: Vec2,
    pub speed: f32,
    pub warp: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sprite {
    Dot {
        center: Vec2,
        radius: f32,
        alpha: f32,
    },
    Streak {
        head: Vec2,
        tail: Vec2,
        width: f32,
        alpha: f32,
    },
}

impl Sprite {
    pub fn is_streak(&self) -> bool {
        matches!(self, Sprite::Streak { .. })
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Sprite::Dot { alpha, .. } | Sprite::Streak { alpha, .. } => alpha,
        }
    }
}

/// Perspective-divide projection of stars onto the screen plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Lens {
    pub config: LensConfig,
    pub z_max: f32,
}

impl Lens {
    pub fn new(config: LensConfig, z_max: f32) -> Self {
        Self { config, z_max }
    }

    #[inline]
    pub fn scale(&self, depth: f32) -> f32 {
        self.config.focal_length / depth
    }

    #[inline]
    pub fn to_screen(&self, view: &View, lateral: Vec2, depth: f32) -> Vec2 {
        view.center + view.shake + lateral * self.scale(depth)
    }

    pub fn project(&self, star: &Star, view: &View) -> Sprite {
        let c = &self.config;
        let scale = self.scale(star.depth);
        let head = self.to_screen(view, star.lateral, star.depth);
        if view.warp > c.streak_threshold {
            let trail = (view.speed * view.warp * c.trail_gain).max(c.min_trail);
            let tail = self.to_screen(view, star.lateral, star.depth + trail);
            Sprite::Streak {
                head,
                tail,
                width: scale * (1.0 + view.warp) * c.streak_width_gain,
                alpha: (scale * c.streak_alpha_gain * view.warp).min(1.0),
            }
        } else {
            Sprite::Dot {
                center: head,
                radius: (scale * star.size).max(c.min_dot_radius),
                alpha: (1.0 - star.depth / self.z_max).clamp(0.0, 1.0),
            }
        }
    }
}

/// Projection-center offset for a pointer at `uv` (0..1 on both axes).
///
/// The center moves against the pointer so near stars appear to swing
/// toward it.
#[inline]
pub fn parallax_offset(uv: [f32; 2], strength_px: f32) -> Vec2 {
    let u = uv[0].clamp(0.0, 1.0) - 0.5;
    let v = uv[1].clamp(0.0, 1.0) - 0.5;
    Vec2::new(-u, -v) * strength_px
}
