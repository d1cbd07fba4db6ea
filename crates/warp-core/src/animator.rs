//! Phase-driven star field animator.
//!
//! One instance drives one intro sequence. The host calls [`Animator::frame`]
//! once per display refresh and [`Animator::draw`] to paint the result; all
//! state transitions happen synchronously inside those calls.

use crate::config::{AnimatorConfig, Palette};
use crate::error::ConfigError;
use crate::field::StarField;
use crate::phase::{ClockTick, PhaseClock, PhaseSample, PhaseScript, Playback};
use crate::projection::{Lens, Sprite, View, Viewport};
use crate::render::{self, Surface2d};
use crate::scripts::{Portal, Wormhole};
use glam::Vec2;
use rand::prelude::*;

/// Snapshot of the animation after the most recent step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState<P> {
    pub phase: P,
    pub start_ms: Option<f64>,
    pub elapsed_ms: f64,
    pub progress: f32,
    pub speed: f32,
    pub warp: f32,
    pub shake: Vec2,
    pub flash: f32,
}

impl<P: Copy> AnimationState<P> {
    pub fn initial(sample: PhaseSample<P>) -> Self {
        Self {
            phase: sample.phase,
            start_ms: None,
            elapsed_ms: 0.0,
            progress: sample.progress,
            speed: sample.speed,
            warp: sample.warp,
            shake: Vec2::ZERO,
            flash: sample.flash,
        }
    }

    /// Fold one clock tick into the state. The only impurity is the shake
    /// jitter, drawn from the supplied RNG.
    pub fn step<R: Rng>(
        self,
        tick: &ClockTick<P>,
        start_ms: Option<f64>,
        rng: &mut R,
    ) -> Self {
        let s = &tick.sample;
        let shake = if s.shake > 0.0 {
            // uniform in the disc of radius `shake`
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let r = s.shake * rng.gen::<f32>().sqrt();
            Vec2::new(angle.cos(), angle.sin()) * r
        } else {
            Vec2::ZERO
        };
        Self {
            phase: s.phase,
            start_ms,
            elapsed_ms: tick.elapsed_ms,
            progress: s.progress.clamp(0.0, 1.0),
            speed: s.speed.max(0.0),
            warp: s.warp.clamp(0.0, 1.0),
            shake,
            flash: s.flash.clamp(0.0, 1.0),
        }
    }
}

pub struct Animator<S: PhaseScript> {
    clock: PhaseClock<S>,
    field: StarField,
    lens: Lens,
    palette: Palette,
    state: AnimationState<S::Phase>,
    parallax: Vec2,
    rng: StdRng,
    sprites: Vec<Sprite>,
}

impl Animator<Wormhole> {
    pub fn wormhole(
        config: &AnimatorConfig,
        viewport: Viewport,
        seed: u64,
        playback: Playback,
    ) -> Result<Self, ConfigError> {
        let script = Wormhole::new(config.wormhole.clone(), config.shake_max_px);
        Self::new(script, config, viewport, seed, playback)
    }
}

impl Animator<Portal> {
    pub fn portal(
        config: &AnimatorConfig,
        viewport: Viewport,
        seed: u64,
        playback: Playback,
    ) -> Result<Self, ConfigError> {
        let script = Portal::new(config.portal.clone(), config.shake_max_px);
        Self::new(script, config, viewport, seed, playback)
    }
}

impl<S: PhaseScript> Animator<S> {
    /// Build an animator around any script after validating `config`.
    pub fn new(
        script: S,
        config: &AnimatorConfig,
        viewport: Viewport,
        seed: u64,
        playback: Playback,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = StarField::new(config.star_count, config.z_max, viewport, seed)?;
        let first = match playback {
            Playback::Play => script.sample(0.0),
            Playback::Skip => script.terminal_sample(),
        };
        log::info!(
            "[animator] {} stars, z_max={}, playback={:?}, start={:?}",
            config.star_count,
            config.z_max,
            playback,
            first.phase
        );
        Ok(Self {
            clock: PhaseClock::new(script, playback),
            field,
            lens: Lens::new(config.lens.clone(), config.z_max),
            palette: config.palette.clone(),
            state: AnimationState::initial(first),
            parallax: Vec2::ZERO,
            // decorrelate shake from the field's stream
            rng: StdRng::seed_from_u64(seed.rotate_left(17) ^ 0xA5A5_5A5A_C3C3_3C3C),
            sprites: Vec::with_capacity(config.star_count),
        })
    }

    pub fn on_complete(&mut self, callback: Box<dyn FnOnce()>) {
        self.clock.on_complete(callback);
    }

    /// Advance one display frame at host time `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> &AnimationState<S::Phase> {
        let tick = self.clock.tick(now_ms);
        self.state = self.state.step(&tick, self.clock.start_ms(), &mut self.rng);
        self.field.advance(self.state.speed);
        &self.state
    }

    /// Project the current state into `self.sprites` and paint it.
    pub fn draw<T: Surface2d + ?Sized>(&mut self, surface: &mut T) {
        let viewport = self.field.viewport();
        let view = self.view();
        self.field.project_into(&self.lens, &view, &mut self.sprites);
        render::draw_frame(surface, viewport, &self.palette, &self.sprites, self.state.flash);
    }

    pub fn view(&self) -> View {
        View {
            center: self.field.viewport().center() + self.parallax,
            shake: self.state.shake,
            speed: self.state.speed,
            warp: self.state.warp,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport);
    }

    pub fn skip(&mut self) {
        self.clock.skip();
    }

    /// Offset applied to the projection center (see `parallax_offset`).
    pub fn set_parallax(&mut self, offset: Vec2) {
        self.parallax = offset;
    }

    pub fn state(&self) -> &AnimationState<S::Phase> {
        &self.state
    }

    pub fn phase(&self) -> S::Phase {
        self.state.phase
    }

    pub fn is_complete(&self) -> bool {
        self.clock.is_complete()
    }

    pub fn clock(&self) -> &PhaseClock<S> {
        &self.clock
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
