use crate::config::{EngineParams, Rgb};
use crate::error::Result;
use crate::noise_line::NoiseLineRenderer;
use crate::pool::{mix_seed, AgentPool};
use crate::surface::Surface;
use rand::rngs::StdRng;

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another animation frame.
    Continue,
    /// The loop has been stopped; do not reschedule.
    Stopped,
}

/// Owns the surface and the agents and turns host animation-frame callbacks
/// into engine frames. The host schedules frames; the loop only tells it
/// whether to keep doing so.
pub struct RenderLoop<S: Surface> {
    surface: S,
    pool: AgentPool,
    pen: NoiseLineRenderer<StdRng>,
    background: Rgb,
    running: bool,
    collapsed: bool,
    frames: u64,
}

impl<S: Surface> RenderLoop<S> {
    pub fn new(surface: S, params: &EngineParams) -> Result<Self> {
        params.validate()?;
        let size = surface.size();
        let pool = AgentPool::spawn(params, size);
        let pen = NoiseLineRenderer::seeded(params, mix_seed(params.seed, u64::MAX));
        log::info!(
            "trail engine: {} agents x {} points on {}x{} (seed {})",
            pool.len(),
            params.trail_points,
            size.x,
            size.y,
            params.seed
        );
        Ok(Self {
            surface,
            pool,
            pen,
            background: params.background,
            running: true,
            collapsed: false,
            frames: 0,
        })
    }

    /// Run one frame at host time `timestamp_ms`: clear, tick every agent.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameStatus {
        if !self.running {
            return FrameStatus::Stopped;
        }
        self.surface.clear(self.background);
        let t = (timestamp_ms / 1000.0) as f32;
        let engaged = self
            .pool
            .tick(t, timestamp_ms, &mut self.surface, &mut self.pen);
        self.frames += 1;
        log::trace!("frame {} engaged {}", self.frames, engaged);
        FrameStatus::Continue
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        if self.running {
            self.pool.pointer_move(x, y, now_ms);
        }
    }

    /// Agents pick up the new width on their next tick; existing base radii
    /// are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        let collapsed = !(width > 0.0 && height > 0.0);
        if collapsed && !self.collapsed {
            log::warn!("zero-area viewport {width}x{height}; trails collapse until resized");
        } else if !collapsed {
            log::debug!("surface resized to {width}x{height}");
        }
        self.collapsed = collapsed;
        self.surface.resize(width, height);
    }

    /// Stop producing frames and drop the pending idle timer. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.pool.release();
            log::info!("trail engine stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the last resize left the surface with zero area.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pool(&self) -> &AgentPool {
        &self.pool
    }
}
