// Tuning constants for the trail creatures. These are visual choices, not
// derived values; `EngineParams::default()` is built from them.

// Population
pub const AGENT_COUNT: usize = 2;
pub const TRAIL_POINT_COUNT: usize = 333;
pub const RING_SAMPLES: usize = 9; // evenly spaced offsets around the anchor

// Anchor dynamics
pub const SMOOTHING: f32 = 0.05; // first-order low-pass coefficient per tick
pub const WANDER_STEP: f32 = 2.0; // idle target drift per tick (px)
pub const WANDER_SEED_MAX: f32 = 100.0;
pub const WANDER_FREQ_MIN: f32 = 0.2;
pub const WANDER_FREQ_SPAN: f32 = 0.5;
pub const WANDER_RADIUS_MAX: f32 = 5.0;

// base_radius = width / U[BASE_RADIUS_DIVISOR_MIN, +SPAN)
pub const BASE_RADIUS_DIVISOR_MIN: f32 = 150.0;
pub const BASE_RADIUS_DIVISOR_SPAN: f32 = 100.0;

// Trail point response
pub const ENGAGE_CAP: usize = 8; // max engaging points per agent per tick
pub const ENGAGE_DISTANCE_DIVISOR: f32 = 10.0; // engages when d < width / 10
pub const POINT_RADIUS_MAX: f32 = 2.0;
pub const POINT_RADIUS_DIVISOR: f32 = 5.0; // candidate = width / d / 5
pub const ENGAGED_RADIUS_BOOST: f32 = 1.5;
pub const ACTIVATION_STEP: f32 = 0.1;

// Pointer
pub const IDLE_QUIET_MS: f64 = 500.0;

// Noisy lines
pub const LINE_SEGMENTS: usize = 10;
pub const LINE_JITTER_AMPLITUDE: f32 = 5.0;
pub const LINE_JITTER_BIAS: f32 = -1.5; // jitter = (u + bias) * amplitude, u in [0, 1)
pub const LINE_WIDTH: f32 = 2.0;

// Palette
pub const BACKGROUND_RGB: [u8; 3] = [0x00, 0x00, 0x00];
pub const INK_RGB: [u8; 3] = [0xc2, 0xc2, 0xc2];
