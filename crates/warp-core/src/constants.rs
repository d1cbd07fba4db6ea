// Shared tuning constants used by both web and native frontends.

// Star field
pub const STAR_COUNT: usize = 4000; // wormhole intro pool size
pub const Z_MAX: f32 = 2000.0; // far plane; recycled stars re-enter here
pub const PORTAL_STAR_COUNT: usize = 1500;
pub const MAX_STAR_COUNT: usize = 200_000; // upper bound accepted from config and CLI

// Projection
pub const FOCAL_LENGTH: f32 = 1000.0; // perspective scale = FOCAL_LENGTH / depth
pub const STREAK_WARP_THRESHOLD: f32 = 0.1; // above this warp, stars render as streaks
pub const MIN_TRAIL_LENGTH: f32 = 2.0;
pub const TRAIL_SPEED_GAIN: f32 = 2.0; // trail = speed * warp * gain
pub const STREAK_ALPHA_GAIN: f32 = 1.5;
pub const STREAK_WIDTH_GAIN: f32 = 2.0;
pub const MIN_DOT_RADIUS: f32 = 0.5;
pub const PARALLAX_STRENGTH_PX: f32 = 40.0; // center offset at pointer uv edge

// Camera shake
pub const SHAKE_MAX_PX: f32 = 6.0;

// Wormhole timeline (milliseconds since sequence start)
pub const WORMHOLE_ACCELERATE_AT_MS: f64 = 4000.0;
pub const WORMHOLE_RAMP_MS: f64 = 4000.0; // accelerate progress saturates after this
pub const WORMHOLE_PEAK_AT_MS: f64 = 8000.0;
pub const WORMHOLE_FLASH_AT_MS: f64 = 10200.0; // completion fires here
pub const WORMHOLE_FLASH_MS: f64 = 600.0;

// Wormhole speeds (depth units per step)
pub const DRIFT_SPEED: f32 = 0.2;
pub const ACCELERATE_GAIN: f32 = 80.0; // speed = DRIFT_SPEED + progress^2 * gain
pub const PEAK_SPEED: f32 = 100.0;
pub const COAST_SPEED: f32 = 0.4;

// Portal timeline
pub const PORTAL_SLOWMO_AT_MS: f64 = 1200.0;
pub const PORTAL_EXIT_AT_MS: f64 = 3200.0;
pub const PORTAL_WARP_SPEED: f32 = 60.0;
pub const PORTAL_EXIT_SPEED: f32 = 0.5;
pub const PORTAL_WARP_SHAKE: f32 = 0.5; // fraction of SHAKE_MAX_PX

// Camera rigs
pub const FOLLOW_TAU_SEC: f32 = 0.25; // exponential approach time constant
pub const REVEAL_RANGE: f32 = 6.0; // world units over which a block fades in
pub const HELIX_ANGLE_STEP: f32 = 0.6; // radians between consecutive blocks
pub const HELIX_BLOCK_SPACING: f32 = 4.0; // vertical world units between blocks
pub const HELIX_CAMERA_RADIUS: f32 = 9.0;
pub const HELIX_BLOCK_RADIUS: f32 = 4.0;
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Default palette (RGBA, linear 0..1)
pub const BACKGROUND_RGBA: [f32; 4] = [0.0, 0.0, 0.02, 0.35]; // translucent clear leaves trails
pub const STAR_RGB: [f32; 3] = [0.85, 0.92, 1.0];
pub const FLASH_RGB: [f32; 3] = [1.0, 1.0, 1.0];
