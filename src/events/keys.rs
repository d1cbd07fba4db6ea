/// What a key press does to a mounted intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroAction {
    /// Jump to the terminal phase and reveal content without completing.
    Skip,
}

/// Map a `KeyboardEvent.key` value to an intro action.
#[inline]
pub fn intro_action_for_key(key: &str) -> Option<IntroAction> {
    match key {
        "Escape" | "Esc" | " " | "Spacebar" => Some(IntroAction::Skip),
        _ => None,
    }
}
