// Host-side tests for canvas color strings and inline style edits.

mod style {
    include!("../src/style.rs");
}

use glam::Vec4;
use style::{css_rgba, has_display_none, with_display_none, without_display_none};

#[test]
fn formats_straight_alpha() {
    assert_eq!(css_rgba(Vec4::new(1.0, 1.0, 1.0, 1.0)), "rgba(255,255,255,1.000)");
    assert_eq!(css_rgba(Vec4::new(0.0, 0.0, 0.0, 0.25)), "rgba(0,0,0,0.250)");
    assert_eq!(css_rgba(Vec4::new(0.5, 0.2, 1.0, 0.5)), "rgba(128,51,255,0.500)");
}

#[test]
fn out_of_range_channels_clamp() {
    assert_eq!(css_rgba(Vec4::new(2.0, -1.0, 0.0, 3.0)), "rgba(255,0,0,1.000)");
}

#[test]
fn non_finite_channels_become_zero() {
    assert_eq!(
        css_rgba(Vec4::new(f32::NAN, f32::INFINITY, 1.0, f32::NAN)),
        "rgba(0,0,255,0.000)"
    );
}

#[test]
fn hiding_keeps_host_inline_styles() {
    assert_eq!(with_display_none(""), "display:none");
    assert_eq!(
        with_display_none("color: red; margin:0"),
        "color: red;margin:0;display:none"
    );
    // hiding twice does not stack declarations
    assert_eq!(with_display_none("display:none"), "display:none");
}

#[test]
fn showing_removes_only_display_none() {
    let hidden = with_display_none("color: red; padding: 4px;");
    assert!(has_display_none(&hidden));
    let shown = without_display_none(&hidden);
    assert_eq!(shown, "color: red;padding: 4px");
    assert!(!has_display_none(&shown));

    assert_eq!(without_display_none("display: NONE"), "");
    assert_eq!(without_display_none("display:flex"), "display:flex");
}

#[test]
fn display_none_detection_ignores_other_properties() {
    assert!(has_display_none("opacity:1; display : none"));
    assert!(!has_display_none("visibility:none"));
    assert!(!has_display_none("display:block"));
    assert!(!has_display_none(""));
}
