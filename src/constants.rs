// Host-side constants for the browser front-end. Engine tuning lives in
// `trails_core::constants`.

// DOM
pub const CANVAS_ID: &str = "trail-canvas"; // full-viewport background canvas
pub const ATTR_AGENTS: &str = "data-agents"; // optional agent count override
pub const ATTR_SEED: &str = "data-seed"; // optional u64 seed override

// Limits for attribute overrides
pub const MAX_AGENTS: usize = 16;
