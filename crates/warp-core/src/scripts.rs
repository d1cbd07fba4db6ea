use crate::config::{PortalTimings, WormholeTimings};
use crate::easing::{lerp, progress, smoothstep};
use crate::phase::{PhaseSample, PhaseScript};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WormholePhase {
    Drift,
    Accelerate,
    Peak,
    Flash,
    Coast,
}

/// Intro that drifts, accelerates into a streaking warp, flashes white and
/// settles into a slow coast.
#[derive(Clone, Debug)]
pub struct Wormhole {
    pub timings: WormholeTimings,
    pub shake_max: f32,
}

impl Wormhole {
    pub fn new(timings: WormholeTimings, shake_max: f32) -> Self {
        Self { timings, shake_max }
    }
}

impl PhaseScript for Wormhole {
    type Phase = WormholePhase;

    fn sample(&self, e: f64) -> PhaseSample<WormholePhase> {
        let t = &self.timings;
        if e < t.accelerate_at_ms {
            PhaseSample {
                phase: WormholePhase::Drift,
                progress: progress(e, 0.0, t.accelerate_at_ms),
                speed: t.drift_speed,
                warp: 0.0,
                shake: 0.0,
                flash: 0.0,
            }
        } else if e < t.peak_at_ms {
            let p = progress(e, t.accelerate_at_ms, t.ramp_ms);
            PhaseSample {
                phase: WormholePhase::Accelerate,
                progress: p,
                speed: t.drift_speed + p * p * t.accelerate_gain,
                warp: p,
                shake: p * self.shake_max,
                flash: 0.0,
            }
        } else if e < t.flash_at_ms {
            PhaseSample {
                phase: WormholePhase::Peak,
                progress: progress(e, t.peak_at_ms, t.flash_at_ms - t.peak_at_ms),
                speed: t.peak_speed,
                warp: 1.0,
                shake: self.shake_max,
                flash: 0.0,
            }
        } else if e < t.flash_at_ms + t.flash_ms {
            let p = progress(e, t.flash_at_ms, t.flash_ms);
            PhaseSample {
                phase: WormholePhase::Flash,
                progress: p,
                speed: t.coast_speed,
                warp: 0.0,
                shake: 0.0,
                flash: 1.0 - p,
            }
        } else {
            self.terminal_sample()
        }
    }

    fn terminal_sample(&self) -> PhaseSample<WormholePhase> {
        PhaseSample::steady(WormholePhase::Coast, self.timings.coast_speed)
    }

    fn completion_phase(&self) -> WormholePhase {
        WormholePhase::Flash
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PortalPhase {
    Warp,
    Slowmo,
    Exit,
}

/// Short transition that opens at full warp and eases down into the scene.
#[derive(Clone, Debug)]
pub struct Portal {
    pub timings: PortalTimings,
    pub shake_max: f32,
}

impl Portal {
    pub fn new(timings: PortalTimings, shake_max: f32) -> Self {
        Self { timings, shake_max }
    }
}

impl PhaseScript for Portal {
    type Phase = PortalPhase;

    fn sample(&self, e: f64) -> PhaseSample<PortalPhase> {
        let t = &self.timings;
        let warp_shake = t.warp_shake * self.shake_max;
        if e < t.slowmo_at_ms {
            PhaseSample {
                phase: PortalPhase::Warp,
                progress: progress(e, 0.0, t.slowmo_at_ms),
                speed: t.warp_speed,
                warp: 1.0,
                shake: warp_shake,
                flash: 0.0,
            }
        } else if e < t.exit_at_ms {
            let p = progress(e, t.slowmo_at_ms, t.exit_at_ms - t.slowmo_at_ms);
            PhaseSample {
                phase: PortalPhase::Slowmo,
                progress: p,
                speed: lerp(t.warp_speed, t.exit_speed, smoothstep(0.0, 1.0, p)),
                warp: 1.0 - p,
                shake: warp_shake * (1.0 - p),
                flash: 0.0,
            }
        } else {
            self.terminal_sample()
        }
    }

    fn terminal_sample(&self) -> PhaseSample<PortalPhase> {
        PhaseSample::steady(PortalPhase::Exit, self.timings.exit_speed)
    }

    fn completion_phase(&self) -> PortalPhase {
        PortalPhase::Exit
    }
}
