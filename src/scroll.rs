/// Fraction of the scrollable range already scrolled, in \[0, 1\].
///
/// Pages that do not scroll (`scroll_height <= client_height`) and
/// non-finite inputs report 0.
#[inline]
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    let range = scroll_height - client_height;
    if !range.is_finite() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0) as f32
}

/// Clamp a frame delta to `[0, max_sec]`; non-finite deltas become 0.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}
