//! Phase clock: maps elapsed time onto a scripted sequence of phases.
//!
//! A [`PhaseScript`] is a pure function from elapsed milliseconds to a
//! [`PhaseSample`]. The [`PhaseClock`] owns the playback bookkeeping around
//! it: latching the start time, keeping elapsed time (and therefore the phase)
//! monotonic, and firing the completion callback at most once.

use std::fmt;

/// Per-tick output of a phase script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample<P> {
    pub phase: P,
    /// Normalized progress within `phase`, in \[0, 1\].
    pub progress: f32,
    /// Depth decrement per step.
    pub speed: f32,
    /// Dot (0) to streak (1) blend.
    pub warp: f32,
    /// Camera shake magnitude in pixels.
    pub shake: f32,
    /// Full-screen flash overlay intensity in \[0, 1\].
    pub flash: f32,
}

impl<P> PhaseSample<P> {
    pub fn steady(phase: P, speed: f32) -> Self {
        Self {
            phase,
            progress: 1.0,
            speed,
            warp: 0.0,
            shake: 0.0,
            flash: 0.0,
        }
    }
}

pub trait PhaseScript {
    /// Closed set of phases, ordered by playback sequence.
    type Phase: Copy + Eq + Ord + fmt::Debug;

    fn sample(&self, elapsed_ms: f64) -> PhaseSample<Self::Phase>;

    /// Steady state a skipped playback starts in and never leaves.
    fn terminal_sample(&self) -> PhaseSample<Self::Phase>;

    /// Entering this phase (or any later one) fires the completion callback.
    fn completion_phase(&self) -> Self::Phase;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Play,
    /// Start in the terminal phase; completion never fires.
    Skip,
}

/// Result of a single [`PhaseClock::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockTick<P> {
    pub sample: PhaseSample<P>,
    pub elapsed_ms: f64,
    /// Phase entered on this tick, if it differs from the previous one.
    pub entered: Option<P>,
    /// True only on the tick that fired completion.
    pub completed: bool,
}

pub struct PhaseClock<S: PhaseScript> {
    script: S,
    playback: Playback,
    start_ms: Option<f64>,
    elapsed_ms: f64,
    current: Option<S::Phase>,
    completed: bool,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<S: PhaseScript> PhaseClock<S> {
    pub fn new(script: S, playback: Playback) -> Self {
        Self {
            script,
            playback,
            start_ms: None,
            elapsed_ms: 0.0,
            current: None,
            completed: false,
            on_complete: None,
        }
    }

    /// Register the completion callback. Ignored for skipped or already
    /// completed playbacks, which never fire.
    pub fn on_complete(&mut self, callback: Box<dyn FnOnce()>) {
        if self.playback == Playback::Skip || self.completed {
            log::debug!("[phase] completion callback ignored (skipped or already complete)");
            return;
        }
        self.on_complete = Some(callback);
    }

    pub fn script(&self) -> &S {
        &self.script
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn phase(&self) -> Option<S::Phase> {
        self.current
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Jump straight to the terminal phase. Completion does not fire.
    pub fn skip(&mut self) {
        if self.playback == Playback::Skip {
            return;
        }
        log::info!("[phase] skipped at {:.0} ms", self.elapsed_ms);
        self.playback = Playback::Skip;
        self.on_complete = None;
    }

    pub fn tick(&mut self, now_ms: f64) -> ClockTick<S::Phase> {
        if self.start_ms.is_none() && now_ms.is_finite() {
            self.start_ms = Some(now_ms);
        }
        if let Some(start) = self.start_ms {
            let raw = now_ms - start;
            if raw.is_finite() && raw > self.elapsed_ms {
                self.elapsed_ms = raw;
            }
        }

        let mut sample = match self.playback {
            Playback::Play => self.script.sample(self.elapsed_ms),
            Playback::Skip => self.script.terminal_sample(),
        };
        // Scripts are monotone in elapsed time; this only guards hand-written ones.
        if let Some(prev) = self.current {
            if sample.phase < prev {
                sample.phase = prev;
            }
        }

        let entered = match self.current {
            Some(prev) if prev == sample.phase => None,
            _ => Some(sample.phase),
        };
        if let Some(p) = entered {
            log::debug!("[phase] enter {:?} at {:.0} ms", p, self.elapsed_ms);
        }
        self.current = Some(sample.phase);

        let mut completed = false;
        if self.playback == Playback::Play
            && !self.completed
            && sample.phase >= self.script.completion_phase()
        {
            self.completed = true;
            completed = true;
            log::info!("[phase] sequence complete at {:.0} ms", self.elapsed_ms);
            if let Some(cb) = self.on_complete.take() {
                cb();
            }
        }

        ClockTick {
            sample,
            elapsed_ms: self.elapsed_ms,
            entered,
            completed,
        }
    }
}

impl<S: PhaseScript + fmt::Debug> fmt::Debug for PhaseClock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseClock")
            .field("script", &self.script)
            .field("playback", &self.playback)
            .field("start_ms", &self.start_ms)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("current", &self.current)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
