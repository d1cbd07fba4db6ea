//! Animator configuration.
//!
//! One parameterized animator serves every intro scene; each scene picks a
//! preset (or tweaks one) instead of carrying its own copy of the logic.

use crate::constants::*;
use crate::error::{
    ensure_non_negative, ensure_ordered, ensure_positive, ensure_star_count, ConfigError,
};
use glam::{Vec3, Vec4};

/// Perspective and sprite shaping parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LensConfig {
    pub focal_length: f32,
    pub streak_threshold: f32,
    pub min_trail: f32,
    pub trail_gain: f32,
    pub streak_alpha_gain: f32,
    pub streak_width_gain: f32,
    pub min_dot_radius: f32,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            focal_length: FOCAL_LENGTH,
            streak_threshold: STREAK_WARP_THRESHOLD,
            min_trail: MIN_TRAIL_LENGTH,
            trail_gain: TRAIL_SPEED_GAIN,
            streak_alpha_gain: STREAK_ALPHA_GAIN,
            streak_width_gain: STREAK_WIDTH_GAIN,
            min_dot_radius: MIN_DOT_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Painted over the whole viewport each frame; alpha < 1 leaves trails.
    pub background: Vec4,
    pub star: Vec3,
    pub flash: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Vec4::from_array(BACKGROUND_RGBA),
            star: Vec3::from_array(STAR_RGB),
            flash: Vec3::from_array(FLASH_RGB),
        }
    }
}

/// Thresholds and speeds of the drift → accelerate → peak → flash → coast intro.
#[derive(Clone, Debug, PartialEq)]
pub struct WormholeTimings {
    pub accelerate_at_ms: f64,
    /// Length of the speed ramp; accelerate progress saturates after it.
    pub ramp_ms: f64,
    pub peak_at_ms: f64,
    pub flash_at_ms: f64,
    pub flash_ms: f64,
    pub drift_speed: f32,
    pub accelerate_gain: f32,
    pub peak_speed: f32,
    pub coast_speed: f32,
}

impl Default for WormholeTimings {
    fn default() -> Self {
        Self {
            accelerate_at_ms: WORMHOLE_ACCELERATE_AT_MS,
            ramp_ms: WORMHOLE_RAMP_MS,
            peak_at_ms: WORMHOLE_PEAK_AT_MS,
            flash_at_ms: WORMHOLE_FLASH_AT_MS,
            flash_ms: WORMHOLE_FLASH_MS,
            drift_speed: DRIFT_SPEED,
            accelerate_gain: ACCELERATE_GAIN,
            peak_speed: PEAK_SPEED,
            coast_speed: COAST_SPEED,
        }
    }
}

impl WormholeTimings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("accelerate_at_ms", self.accelerate_at_ms)?;
        ensure_positive("ramp_ms", self.ramp_ms)?;
        ensure_non_negative("flash_ms", self.flash_ms)?;
        ensure_ordered(
            ("accelerate_at_ms", self.accelerate_at_ms),
            ("peak_at_ms", self.peak_at_ms),
        )?;
        ensure_ordered(("peak_at_ms", self.peak_at_ms), ("flash_at_ms", self.flash_at_ms))?;
        for (name, v) in [
            ("drift_speed", self.drift_speed),
            ("accelerate_gain", self.accelerate_gain),
            ("peak_speed", self.peak_speed),
            ("coast_speed", self.coast_speed),
        ] {
            ensure_non_negative(name, v as f64)?;
        }
        Ok(())
    }
}

/// Thresholds and speeds of the warp → slowmo → exit portal transition.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalTimings {
    pub slowmo_at_ms: f64,
    pub exit_at_ms: f64,
    pub warp_speed: f32,
    pub exit_speed: f32,
    /// Fraction of the configured shake used during the warp phase.
    pub warp_shake: f32,
}

impl Default for PortalTimings {
    fn default() -> Self {
        Self {
            slowmo_at_ms: PORTAL_SLOWMO_AT_MS,
            exit_at_ms: PORTAL_EXIT_AT_MS,
            warp_speed: PORTAL_WARP_SPEED,
            exit_speed: PORTAL_EXIT_SPEED,
            warp_shake: PORTAL_WARP_SHAKE,
        }
    }
}

impl PortalTimings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("slowmo_at_ms", self.slowmo_at_ms)?;
        ensure_ordered(
            ("slowmo_at_ms", self.slowmo_at_ms),
            ("exit_at_ms", self.exit_at_ms),
        )?;
        ensure_non_negative("warp_speed", self.warp_speed as f64)?;
        ensure_non_negative("exit_speed", self.exit_speed as f64)?;
        ensure_non_negative("warp_shake", self.warp_shake as f64)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub star_count: usize,
    pub z_max: f32,
    pub lens: LensConfig,
    pub shake_max_px: f32,
    pub palette: Palette,
    pub wormhole: WormholeTimings,
    pub portal: PortalTimings,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::wormhole()
    }
}

impl AnimatorConfig {
    pub fn wormhole() -> Self {
        Self {
            star_count: STAR_COUNT,
            z_max: Z_MAX,
            lens: LensConfig::default(),
            shake_max_px: SHAKE_MAX_PX,
            palette: Palette::default(),
            wormhole: WormholeTimings::default(),
            portal: PortalTimings::default(),
        }
    }

    pub fn portal() -> Self {
        Self {
            star_count: PORTAL_STAR_COUNT,
            ..Self::wormhole()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_star_count(self.star_count)?;
        ensure_positive("z_max", self.z_max as f64)?;
        ensure_positive("focal_length", self.lens.focal_length as f64)?;
        ensure_non_negative("min_dot_radius", self.lens.min_dot_radius as f64)?;
        ensure_non_negative("min_trail", self.lens.min_trail as f64)?;
        ensure_non_negative("shake_max_px", self.shake_max_px as f64)?;
        self.wormhole.validate()?;
        self.portal.validate()?;
        Ok(())
    }
}
