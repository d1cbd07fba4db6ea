//! Fixed pool of stars flying toward the viewer.

use crate::error::{ensure_positive, ensure_star_count, ConfigError};
use crate::projection::{Lens, Sprite, View, Viewport};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Position on the plane perpendicular to the view axis.
    pub lateral: Vec2,
    /// Distance from the viewer, always in `(0, z_max]`.
    pub depth: f32,
    /// Per-star radius multiplier in \[0, 1\], fixed at creation.
    pub size: f32,
}

pub struct StarField {
    stars: Vec<Star>,
    z_max: f32,
    viewport: Viewport,
    half_extents: Vec2,
    rng: StdRng,
    recycled: u64,
}

impl StarField {
    /// Seed `count` stars. Fails for an empty or oversized pool and for a
    /// far plane that is not finite and positive.
    pub fn new(
        count: usize,
        z_max: f32,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        ensure_star_count(count)?;
        ensure_positive("z_max", z_max as f64)?;
        let mut field = Self {
            stars: Vec::with_capacity(count),
            z_max,
            viewport,
            half_extents: viewport.half_extents(),
            rng: StdRng::seed_from_u64(seed),
            recycled: 0,
        };
        field.populate(count);
        Ok(field)
    }

    fn populate(&mut self, count: usize) {
        self.stars.clear();
        for _ in 0..count {
            let lateral = self.sample_lateral();
            // (0, 1] keeps the initial depth strictly positive
            let depth = self.z_max * (1.0 - self.rng.gen::<f32>());
            let size = self.rng.gen::<f32>();
            self.stars.push(Star {
                lateral,
                depth,
                size,
            });
        }
    }

    fn sample_lateral(&mut self) -> Vec2 {
        let h = self.half_extents;
        let x = if h.x > 0.0 {
            self.rng.gen_range(-h.x..=h.x)
        } else {
            0.0
        };
        let y = if h.y > 0.0 {
            self.rng.gen_range(-h.y..=h.y)
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    /// Rebuild the pool for a new viewport. The star count is unchanged.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() {
            log::warn!(
                "[field] degenerate viewport {}x{}; stars parked on axis",
                viewport.width,
                viewport.height
            );
        } else {
            log::debug!("[field] resize {}x{}", viewport.width, viewport.height);
        }
        self.viewport = viewport;
        self.half_extents = viewport.half_extents();
        let count = self.stars.len();
        self.populate(count);
    }

    /// Move every star `speed` units toward the viewer, recycling the ones
    /// that pass it back to the far plane.
    pub fn advance(&mut self, speed: f32) {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        for i in 0..self.stars.len() {
            let depth = self.stars[i].depth - speed;
            if depth <= 0.0 {
                let lateral = self.sample_lateral();
                let star = &mut self.stars[i];
                star.depth = self.z_max;
                star.lateral = lateral;
                self.recycled += 1;
            } else {
                self.stars[i].depth = depth;
            }
        }
    }

    pub fn project_into(&self, lens: &Lens, view: &View, out: &mut Vec<Sprite>) {
        out.clear();
        if self.viewport.is_degenerate() {
            return;
        }
        out.extend(self.stars.iter().map(|s| lens.project(s, view)));
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn z_max(&self) -> f32 {
        self.z_max
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Lateral sampling bounds (half width, half height).
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Total recycles since creation.
    pub fn recycled(&self) -> u64 {
        self.recycled
    }
}
