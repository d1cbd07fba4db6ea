// Web front-end tuning constants.
//
// The animation itself is tuned in `warp_core::constants`; these only cover
// DOM wiring and canvas sizing.

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // caps backing pixels on dense displays
pub const MIN_BACKING_PX: u32 = 1;

// DOM element ids and classes
pub const INTRO_ELEMENT_ID: &str = "warp-intro"; // wrapper hidden once content is revealed
pub const CONTENT_ELEMENT_ID: &str = "site-content";
pub const HIDDEN_CLASS: &str = "hidden";

// Pointer parallax
pub const PARALLAX_ENABLED: bool = true;
pub const POINTER_REST_UV: [f32; 2] = [0.5, 0.5]; // parallax offset is zero here

// Camera rig frame time clamp (seconds); avoids a snap after a background tab
pub const RIG_MAX_DT_SEC: f32 = 0.1;
