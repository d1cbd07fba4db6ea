//! Scenes the native viewer can show, all driven from the winit loop.

use glam::{Vec2, Vec3, Vec4};
use std::cell::Cell;
use std::rc::Rc;
use warp_core::constants::{CAMERA_FOVY_RADIANS, PARALLAX_STRENGTH_PX};
use warp_core::{
    parallax_offset, Animator, AnimatorConfig, Camera, CameraRig, Playback, Portal, RigConfig,
    Surface2d, Viewport, Wormhole,
};

// Spiral scene tuning
const BLOCK_HALF_EXTENT: f32 = 1.2; // world units
const BLOCK_RGB: Vec3 = Vec3::new(0.55, 0.75, 1.0);
const BLOCK_MAX_ALPHA: f32 = 0.85;
const WHEEL_LINE_STEP: f32 = 0.02; // scroll fraction per wheel notch
const WHEEL_PIXEL_SPAN: f32 = 4000.0; // trackpad pixels for a full scroll

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    /// Wormhole intro: drift, accelerate, peak, flash, coast
    Warp,
    /// Portal transition: warp, slowmo, exit
    Portal,
    /// Scroll-driven helix of content blocks over a coasting field
    Spiral,
}

#[derive(Clone, Debug)]
pub struct SceneOptions {
    pub kind: SceneKind,
    pub skip: bool,
    pub stars: Option<usize>,
    pub seed: u64,
    pub blocks: usize,
}

enum Body {
    Warp(Animator<Wormhole>),
    Portal(Animator<Portal>),
    Spiral(Spiral),
}

pub struct Scene {
    body: Body,
    revealed: Rc<Cell<bool>>,
    announced: bool,
}

impl Scene {
    pub fn new(opts: &SceneOptions, viewport: Viewport) -> anyhow::Result<Self> {
        let playback = if opts.skip {
            Playback::Skip
        } else {
            Playback::Play
        };
        let revealed = Rc::new(Cell::new(opts.skip));
        let on_complete = {
            let revealed = Rc::clone(&revealed);
            Box::new(move || {
                log::info!("[intro] complete; revealing content");
                revealed.set(true);
            })
        };

        let body = match opts.kind {
            SceneKind::Warp => {
                let mut cfg = AnimatorConfig::wormhole();
                cfg.star_count = opts.stars.unwrap_or(cfg.star_count);
                let mut anim = Animator::wormhole(&cfg, viewport, opts.seed, playback)?;
                anim.on_complete(on_complete);
                Body::Warp(anim)
            }
            SceneKind::Portal => {
                let mut cfg = AnimatorConfig::portal();
                cfg.star_count = opts.stars.unwrap_or(cfg.star_count);
                let mut anim = Animator::portal(&cfg, viewport, opts.seed, playback)?;
                anim.on_complete(on_complete);
                Body::Portal(anim)
            }
            SceneKind::Spiral => {
                revealed.set(true);
                Body::Spiral(Spiral::new(opts, viewport)?)
            }
        };
        log::info!("[scene] {:?} ({}x{})", opts.kind, viewport.width, viewport.height);
        Ok(Self {
            body,
            revealed,
            announced: false,
        })
    }

    pub fn frame(&mut self, now_ms: f64, dt_sec: f32) {
        match &mut self.body {
            Body::Warp(a) => {
                a.frame(now_ms);
            }
            Body::Portal(a) => {
                a.frame(now_ms);
            }
            Body::Spiral(s) => s.frame(now_ms, dt_sec),
        }
    }

    pub fn draw<T: Surface2d + ?Sized>(&mut self, surface: &mut T) {
        match &mut self.body {
            Body::Warp(a) => a.draw(surface),
            Body::Portal(a) => a.draw(surface),
            Body::Spiral(s) => s.draw(surface),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        match &mut self.body {
            Body::Warp(a) => a.resize(viewport),
            Body::Portal(a) => a.resize(viewport),
            Body::Spiral(s) => s.resize(viewport),
        }
    }

    /// Jump the intro to its terminal phase and reveal content. Completion
    /// does not fire.
    pub fn skip(&mut self) {
        match &mut self.body {
            Body::Warp(a) => a.skip(),
            Body::Portal(a) => a.skip(),
            Body::Spiral(_) => return,
        }
        if !self.revealed.get() {
            log::info!("[intro] skipped; revealing content");
        }
        self.revealed.set(true);
    }

    /// Pointer position normalized to the window (0..1 on both axes).
    pub fn pointer(&mut self, uv: [f32; 2]) {
        let offset = parallax_offset(uv, PARALLAX_STRENGTH_PX);
        match &mut self.body {
            Body::Warp(a) => a.set_parallax(offset),
            Body::Portal(a) => a.set_parallax(offset),
            Body::Spiral(s) => s.backdrop.set_parallax(offset),
        }
    }

    /// Wheel input in notches (line deltas) or pixels (trackpads).
    pub fn wheel(&mut self, lines: f32, pixels: f32) {
        if let Body::Spiral(s) = &mut self.body {
            s.scroll_by(-lines * WHEEL_LINE_STEP - pixels / WHEEL_PIXEL_SPAN);
        }
    }

    /// True exactly once, on the first frame after content is revealed.
    pub fn take_reveal(&mut self) -> bool {
        if self.announced || !self.revealed.get() {
            return false;
        }
        self.announced = true;
        true
    }
}

struct ProjectedBlock {
    center: Vec2,
    half: f32,
    depth: f32,
    alpha: f32,
}

/// Helix of content blocks in front of a slowly coasting star field.
pub struct Spiral {
    rig: CameraRig,
    backdrop: Animator<Wormhole>,
    scroll: f32,
    viewport: Viewport,
    visibilities: Vec<f32>,
    projected: Vec<ProjectedBlock>,
}

impl Spiral {
    fn new(opts: &SceneOptions, viewport: Viewport) -> anyhow::Result<Self> {
        let rig = CameraRig::new(RigConfig::spiral(opts.blocks))?;
        let mut cfg = AnimatorConfig::wormhole();
        cfg.star_count = opts.stars.unwrap_or(cfg.star_count / 4);
        let backdrop = Animator::wormhole(&cfg, viewport, opts.seed, Playback::Skip)?;
        Ok(Self {
            rig,
            backdrop,
            scroll: 0.0,
            viewport,
            visibilities: Vec::with_capacity(opts.blocks),
            projected: Vec::with_capacity(opts.blocks),
        })
    }

    fn scroll_by(&mut self, delta: f32) {
        if delta.is_finite() {
            self.scroll = (self.scroll + delta).clamp(0.0, 1.0);
        }
    }

    fn frame(&mut self, now_ms: f64, dt_sec: f32) {
        self.backdrop.frame(now_ms);
        self.rig.update(self.scroll, dt_sec);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.backdrop.resize(viewport);
    }

    fn draw<T: Surface2d + ?Sized>(&mut self, surface: &mut T) {
        self.backdrop.draw(surface);
        if self.viewport.is_degenerate() {
            return;
        }
        let size = Vec2::new(self.viewport.width, self.viewport.height);
        let camera = Camera::from_pose(&self.rig.pose(), size.x / size.y);
        // pixels per world unit at depth 1
        let focal_px = size.y * 0.5 / (CAMERA_FOVY_RADIANS * 0.5).tan();

        self.rig.visibilities_into(&mut self.visibilities);
        self.projected.clear();
        for (i, &alpha) in self.visibilities.iter().enumerate() {
            if alpha <= 0.0 {
                continue;
            }
            let Some(anchor) = self.rig.mapper().path.block_anchor(i) else {
                continue;
            };
            if let Some((center, depth)) = camera.world_to_screen(anchor, size) {
                self.projected.push(ProjectedBlock {
                    center,
                    half: BLOCK_HALF_EXTENT * focal_px / depth,
                    depth,
                    alpha,
                });
            }
        }
        // painter's order
        self.projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        for block in &self.projected {
            let half = Vec2::splat(block.half);
            let color: Vec4 = BLOCK_RGB.extend(block.alpha * BLOCK_MAX_ALPHA);
            surface.fill_rect(block.center - half, half * 2.0, color);
        }
    }
}
