//! Scalar easing helpers shared by the phase scripts and camera rigs.

#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep `3t² - 2t³` of `x` remapped from `[edge0, edge1]`.
///
/// The result is clamped to \[0, 1\]. A degenerate edge pair acts as a step.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Blend factor for an exponential approach with time constant `tau_sec`.
///
/// `current += (target - current) * damp_alpha(dt, tau)` is frame-rate
/// independent. Non-positive `tau_sec` snaps (returns 1).
#[inline]
pub fn damp_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, tau_sec: f32, dt_sec: f32) -> f32 {
    lerp(current, target, damp_alpha(dt_sec, tau_sec))
}

/// Normalized progress of `value` through `[start, start + span)`, clamped.
#[inline]
pub fn progress(value: f64, start: f64, span: f64) -> f32 {
    if span <= 0.0 {
        return if value >= start { 1.0 } else { 0.0 };
    }
    clamp01(((value - start) / span) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn damp_converges_without_overshoot() {
        let mut v = 0.0;
        for _ in 0..240 {
            v = damp(v, 10.0, 0.25, 1.0 / 60.0);
            assert!(v <= 10.0);
        }
        assert!((v - 10.0).abs() < 1e-3);
    }

    #[test]
    fn progress_handles_degenerate_spans() {
        assert_eq!(progress(5.0, 0.0, f64::INFINITY), 0.0);
        assert_eq!(progress(5.0, 0.0, 0.0), 1.0);
        assert_eq!(progress(-1.0, 0.0, 0.0), 0.0);
        assert!((progress(2000.0, 0.0, 4000.0) - 0.5).abs() < 1e-6);
    }
}
