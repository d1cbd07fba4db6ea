use glam::Vec4;

#[inline]
fn channel(v: f32) -> u8 {
    if v.is_finite() {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        0
    }
}

/// CSS `rgba()` string for a straight-alpha color with 0..1 components.
pub fn css_rgba(color: Vec4) -> String {
    let a = if color.w.is_finite() {
        color.w.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!(
        "rgba({},{},{},{:.3})",
        channel(color.x),
        channel(color.y),
        channel(color.z),
        a
    )
}

fn is_display_none(declaration: &str) -> bool {
    match declaration.split_once(':') {
        Some((property, value)) => {
            property.trim().eq_ignore_ascii_case("display")
                && value.trim().eq_ignore_ascii_case("none")
        }
        None => false,
    }
}

/// True if an inline `style` attribute hides its element.
pub fn has_display_none(style: &str) -> bool {
    style.split(';').any(is_display_none)
}

/// Inline style with `display: none` removed; other declarations survive.
pub fn without_display_none(style: &str) -> String {
    style
        .split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !is_display_none(d))
        .collect::<Vec<_>>()
        .join(";")
}

/// Inline style with a single `display:none` appended.
pub fn with_display_none(style: &str) -> String {
    let kept = without_display_none(style);
    if kept.is_empty() {
        "display:none".to_string()
    } else {
        format!("{kept};display:none")
    }
}
