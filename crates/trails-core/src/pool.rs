use crate::agent::Agent;
use crate::config::{EngineParams, Rgb};
use crate::noise_line::NoiseLineRenderer;
use crate::pointer::{PointerState, PointerTracker};
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Derive an independent per-agent stream from the base seed.
pub(crate) fn mix_seed(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Fixed set of agents sharing one pointer tracker.
#[derive(Clone, Debug)]
pub struct AgentPool {
    agents: Vec<Agent>,
    tracker: PointerTracker,
    ink: Rgb,
}

impl AgentPool {
    pub fn spawn(params: &EngineParams, size: Vec2) -> Self {
        let agents = (0..params.agent_count)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(mix_seed(params.seed, i as u64));
                Agent::spawn(params, size, &mut rng)
            })
            .collect();
        Self {
            agents,
            tracker: PointerTracker::new(params.idle_quiet_ms),
            ink: params.ink,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Follow `(x, y)` until told otherwise. Only host pointer events
    /// (`pointer_move`) start the quiet-period countdown back to wander.
    pub fn follow(&mut self, x: f32, y: f32) {
        self.tracker.hold(x, y);
        self.retarget(x, y);
    }

    /// A host pointer-move event at `now_ms`.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.tracker.on_pointer_move(x, y, now_ms);
        self.retarget(x, y);
    }

    fn retarget(&mut self, x: f32, y: f32) {
        for agent in &mut self.agents {
            agent.follow(x, y);
        }
    }

    /// Tick every agent in list order. The pointer state is sampled once so
    /// all agents see the same mode within a frame. Returns the total number
    /// of engaged trail points.
    pub fn tick<S, R>(
        &mut self,
        t: f32,
        now_ms: f64,
        surface: &mut S,
        pen: &mut NoiseLineRenderer<R>,
    ) -> usize
    where
        S: Surface + ?Sized,
        R: RngCore,
    {
        let follow = match self.tracker.poll(now_ms) {
            PointerState::Active => Some(self.tracker.current_target()),
            PointerState::Idle => None,
        };
        let mut engaged = 0;
        for agent in &mut self.agents {
            engaged += agent.tick(t, follow, &mut *surface, &mut *pen, self.ink);
        }
        engaged
    }

    pub fn release(&mut self) {
        self.tracker.release();
    }
}
