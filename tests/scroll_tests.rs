// Host-side tests for scroll fraction math used by the camera rig export.

mod scroll {
    include!("../src/scroll.rs");
}

use scroll::{clamp_frame_dt, scroll_fraction};

#[test]
fn fraction_spans_scrollable_range() {
    assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
    assert!((scroll_fraction(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_fraction(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn overscroll_is_clamped() {
    // rubber-band scrolling reports values past either end
    assert_eq!(scroll_fraction(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(2100.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn non_scrolling_page_reports_zero() {
    assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn non_finite_inputs_report_zero() {
    assert_eq!(scroll_fraction(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(100.0, f64::INFINITY, 1000.0), 0.0);
    assert_eq!(scroll_fraction(100.0, 3000.0, f64::NAN), 0.0);
}

#[test]
fn frame_dt_is_clamped() {
    assert_eq!(clamp_frame_dt(0.016, 0.1), 0.016);
    assert_eq!(clamp_frame_dt(2.5, 0.1), 0.1);
    assert_eq!(clamp_frame_dt(-1.0, 0.1), 0.0);
    assert_eq!(clamp_frame_dt(f32::NAN, 0.1), 0.0);
    assert_eq!(clamp_frame_dt(f32::INFINITY, 0.1), 0.0);
}
