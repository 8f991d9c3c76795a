use crate::constants::*;
use crate::error::{EngineError, Result};

/// RGB colour used for the background fill and the ink of lines and discs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// CSS hex form, e.g. `#c2c2c2`.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Every tuning knob of the engine. Defaults reproduce the reference look.
#[derive(Clone, Debug)]
pub struct EngineParams {
    pub agent_count: usize,
    pub trail_points: usize,
    pub ring_samples: usize,
    pub smoothing: f32,
    pub wander_step: f32,
    pub engage_cap: usize,
    pub engage_distance_divisor: f32,
    pub point_radius_max: f32,
    pub point_radius_divisor: f32,
    pub engaged_radius_boost: f32,
    pub activation_step: f32,
    pub idle_quiet_ms: f64,
    pub line_segments: usize,
    pub line_jitter_amplitude: f32,
    pub line_jitter_bias: f32,
    pub line_width: f32,
    pub background: Rgb,
    pub ink: Rgb,
    pub seed: u64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            agent_count: AGENT_COUNT,
            trail_points: TRAIL_POINT_COUNT,
            ring_samples: RING_SAMPLES,
            smoothing: SMOOTHING,
            wander_step: WANDER_STEP,
            engage_cap: ENGAGE_CAP,
            engage_distance_divisor: ENGAGE_DISTANCE_DIVISOR,
            point_radius_max: POINT_RADIUS_MAX,
            point_radius_divisor: POINT_RADIUS_DIVISOR,
            engaged_radius_boost: ENGAGED_RADIUS_BOOST,
            activation_step: ACTIVATION_STEP,
            idle_quiet_ms: IDLE_QUIET_MS,
            line_segments: LINE_SEGMENTS,
            line_jitter_amplitude: LINE_JITTER_AMPLITUDE,
            line_jitter_bias: LINE_JITTER_BIAS,
            line_width: LINE_WIDTH,
            background: Rgb(BACKGROUND_RGB),
            ink: Rgb(INK_RGB),
            seed: 0,
        }
    }
}

impl EngineParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_agent_count(mut self, agent_count: usize) -> Self {
        self.agent_count = agent_count;
        self
    }

    pub fn with_trail_points(mut self, trail_points: usize) -> Self {
        self.trail_points = trail_points;
        self
    }

    /// Rejects values that would make the simulation meaningless rather than
    /// merely degenerate. Zero agents or zero trail points are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.ring_samples == 0 {
            return Err(invalid("ring_samples", "must be at least 1"));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(invalid(
                "smoothing",
                format!("{} is outside (0, 1]", self.smoothing),
            ));
        }
        if !self.wander_step.is_finite() || self.wander_step < 0.0 {
            return Err(invalid("wander_step", "must be finite and non-negative"));
        }
        if !(self.engage_distance_divisor > 0.0) || !self.engage_distance_divisor.is_finite() {
            return Err(invalid("engage_distance_divisor", "must be positive"));
        }
        if !(self.point_radius_divisor > 0.0) || !self.point_radius_divisor.is_finite() {
            return Err(invalid("point_radius_divisor", "must be positive"));
        }
        if !self.point_radius_max.is_finite() || self.point_radius_max < 0.0 {
            return Err(invalid("point_radius_max", "must be finite and non-negative"));
        }
        if !(self.activation_step > 0.0 && self.activation_step <= 1.0) {
            return Err(invalid(
                "activation_step",
                format!("{} is outside (0, 1]", self.activation_step),
            ));
        }
        if !self.idle_quiet_ms.is_finite() || self.idle_quiet_ms < 0.0 {
            return Err(invalid("idle_quiet_ms", "must be finite and non-negative"));
        }
        if self.line_segments == 0 {
            return Err(invalid("line_segments", "must be at least 1"));
        }
        if !self.line_jitter_amplitude.is_finite() || !self.line_jitter_bias.is_finite() {
            return Err(invalid("line_jitter_amplitude", "jitter must be finite"));
        }
        if !(self.line_width > 0.0) || !self.line_width.is_finite() {
            return Err(invalid("line_width", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
