use crate::config::{EngineParams, Rgb};
use crate::constants::*;
use crate::noise_line::NoiseLineRenderer;
use crate::surface::Surface;
use glam::Vec2;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// Fixed scatter point that lights up while its agent's anchor is near.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    /// Always within [0, 1].
    pub activation: f32,
    pub radius: f32,
    /// Whether the point counted against the engage cap on the last step.
    pub engaged: bool,
}

impl TrailPoint {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            activation: 0.0,
            radius: 0.0,
            engaged: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Tuning {
    smoothing: f32,
    wander_step: f32,
    engage_cap: usize,
    engage_distance_divisor: f32,
    point_radius_max: f32,
    point_radius_divisor: f32,
    engaged_radius_boost: f32,
    activation_step: f32,
    ring_samples: usize,
}

impl From<&EngineParams> for Tuning {
    fn from(p: &EngineParams) -> Self {
        Self {
            smoothing: p.smoothing,
            wander_step: p.wander_step,
            engage_cap: p.engage_cap,
            engage_distance_divisor: p.engage_distance_divisor,
            point_radius_max: p.point_radius_max,
            point_radius_divisor: p.point_radius_divisor,
            engaged_radius_boost: p.engaged_radius_boost,
            activation_step: p.activation_step,
            ring_samples: p.ring_samples.max(1),
        }
    }
}

/// One trail creature: a smoothed anchor that wanders on a Lissajous path or
/// chases the pointer, plus the cloud of points it lights up on the way.
#[derive(Clone, Debug)]
pub struct Agent {
    position: Vec2,
    target: Vec2,
    wander_seed: f32,
    wander_freq: Vec2,
    wander_radius: Vec2,
    base_radius: f32,
    trail: Vec<TrailPoint>,
    tuning: Tuning,
}

impl Agent {
    /// Scatter a new agent over a `size` surface. Every random draw goes
    /// through `rng`, so a seeded generator yields the same agent every time.
    pub fn spawn<R: Rng + ?Sized>(params: &EngineParams, size: Vec2, rng: &mut R) -> Self {
        let trail = (0..params.trail_points)
            .map(|_| TrailPoint::new(scatter(&mut *rng, size)))
            .collect();
        let wander_seed = rng.gen::<f32>() * WANDER_SEED_MAX;
        let target = scatter(&mut *rng, size);
        let position = scatter(&mut *rng, size);
        let wander_freq = Vec2::new(
            rng.gen::<f32>() * WANDER_FREQ_SPAN + WANDER_FREQ_MIN,
            rng.gen::<f32>() * WANDER_FREQ_SPAN + WANDER_FREQ_MIN,
        );
        let wander_radius = Vec2::new(
            rng.gen::<f32>() * WANDER_RADIUS_MAX,
            rng.gen::<f32>() * WANDER_RADIUS_MAX,
        );
        let base_radius =
            size.x / (rng.gen::<f32>() * BASE_RADIUS_DIVISOR_SPAN + BASE_RADIUS_DIVISOR_MIN);

        Self {
            position,
            target,
            wander_seed,
            wander_freq,
            wander_radius,
            base_radius,
            trail,
            tuning: Tuning::from(params),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn wander_freq(&self) -> Vec2 {
        self.wander_freq
    }

    pub fn wander_seed(&self) -> f32 {
        self.wander_seed
    }

    pub fn trail_points(&self) -> &[TrailPoint] {
        &self.trail
    }

    /// Point the agent at `(x, y)` right away.
    pub fn follow(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Unit Lissajous phase at time `t` (seconds).
    fn phase(&self, t: f32) -> Vec2 {
        Vec2::new(
            (t * self.wander_freq.x + self.wander_seed).cos(),
            (t * self.wander_freq.y + self.wander_seed).sin(),
        )
    }

    /// Advance the simulation by one tick.
    ///
    /// `follow` carries the pointer target while the pointer is active and is
    /// `None` when idle. `width` is the surface width right now. Returns how
    /// many trail points engaged on this tick.
    pub fn step(&mut self, t: f32, follow: Option<Vec2>, width: f32) -> usize {
        let phase = self.phase(t);
        match follow {
            Some(pointer) => self.target = pointer,
            None => self.target += phase * self.tuning.wander_step,
        }

        let desired = self.target + phase * self.wander_radius;
        self.position += (desired - self.position) * self.tuning.smoothing;

        let reach = width / self.tuning.engage_distance_divisor;
        let mut engaged = 0;
        for point in &mut self.trail {
            let d = point.position.distance(self.position);
            let mut radius = candidate_radius(&self.tuning, width, d);
            // first come first served: later points lose once the cap is hit
            let engaging = d < reach && engaged < self.tuning.engage_cap;
            let delta = if engaging {
                engaged += 1;
                radius *= self.tuning.engaged_radius_boost;
                self.tuning.activation_step
            } else {
                -self.tuning.activation_step
            };
            point.radius = radius;
            point.engaged = engaging;
            point.activation = (point.activation + delta).clamp(0.0, 1.0);
        }
        engaged
    }

    /// Draw the current state: a noisy line from the anchor's ring toward
    /// every active point, then every point as a disc.
    pub fn paint<S, R>(&self, surface: &mut S, pen: &mut NoiseLineRenderer<R>, ink: Rgb)
    where
        S: Surface + ?Sized,
        R: RngCore,
    {
        for (i, point) in self.trail.iter().enumerate() {
            if point.activation > 0.0 {
                let ring = self.position
                    + ring_offset(i, self.tuning.ring_samples) * self.base_radius;
                let reach = point.activation * point.activation;
                pen.draw_noisy_line(surface, ring.lerp(point.position, reach), ring);
            }
            surface.fill_disc(point.position, point.radius, ink);
        }
    }

    pub fn tick<S, R>(
        &mut self,
        t: f32,
        follow: Option<Vec2>,
        surface: &mut S,
        pen: &mut NoiseLineRenderer<R>,
        ink: Rgb,
    ) -> usize
    where
        S: Surface + ?Sized,
        R: RngCore,
    {
        let engaged = self.step(t, follow, surface.width());
        self.paint(surface, pen, ink);
        engaged
    }
}

/// Uniform point on a `size` surface. Never panics on an empty surface.
fn scatter<R: Rng + ?Sized>(rng: &mut R, size: Vec2) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y)
}

/// `min(max, width / d / divisor)`, collapsing to 0 on a zero-width surface
/// and to `max` when the anchor sits exactly on the point.
fn candidate_radius(tuning: &Tuning, width: f32, d: f32) -> f32 {
    if !(width > 0.0) {
        return 0.0;
    }
    let r = width / d / tuning.point_radius_divisor;
    if r.is_finite() {
        r.min(tuning.point_radius_max)
    } else {
        tuning.point_radius_max
    }
}

/// Unit offset `index` of `samples` evenly spaced around a circle.
pub fn ring_offset(index: usize, samples: usize) -> Vec2 {
    let samples = samples.max(1);
    let angle = (index % samples) as f32 / samples as f32 * TAU;
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn(seed: u64, size: Vec2) -> Agent {
        let params = EngineParams::default();
        Agent::spawn(&params, size, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn spawn_scatters_inside_surface() {
        let agent = spawn(1, Vec2::new(800.0, 600.0));
        assert_eq!(agent.trail_points().len(), TRAIL_POINT_COUNT);
        for p in agent.trail_points() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert_eq!(p.activation, 0.0);
        }
        let k = agent.wander_freq();
        assert!(k.x >= WANDER_FREQ_MIN && k.x < WANDER_FREQ_MIN + WANDER_FREQ_SPAN);
        assert!(k.y >= WANDER_FREQ_MIN && k.y < WANDER_FREQ_MIN + WANDER_FREQ_SPAN);
        assert!(agent.base_radius() >= 800.0 / 250.0 && agent.base_radius() <= 800.0 / 150.0);
    }

    #[test]
    fn activation_stays_clamped() {
        let mut agent = spawn(2, Vec2::new(300.0, 300.0));
        for i in 0..400 {
            let t = i as f32 * 0.016;
            let follow = (i % 50 < 25).then(|| Vec2::new(150.0, 150.0));
            agent.step(t, follow, 300.0);
            for p in agent.trail_points() {
                assert!((0.0..=1.0).contains(&p.activation), "activation {}", p.activation);
            }
        }
    }

    #[test]
    fn engage_cap_picks_first_points_in_order() {
        // every point is within reach of the anchor on a 2000-wide surface
        let mut agent = spawn(3, Vec2::new(100.0, 100.0));
        let engaged = agent.step(0.0, Some(Vec2::new(50.0, 50.0)), 2_000.0);
        assert_eq!(engaged, ENGAGE_CAP);
        let flags: Vec<bool> = agent.trail_points().iter().map(|p| p.engaged).collect();
        assert!(flags[..ENGAGE_CAP].iter().all(|e| *e));
        assert!(flags[ENGAGE_CAP..].iter().all(|e| !*e));
        for p in &agent.trail_points()[..ENGAGE_CAP] {
            assert!((p.activation - ACTIVATION_STEP).abs() < 1e-6);
            assert!((p.radius - POINT_RADIUS_MAX * ENGAGED_RADIUS_BOOST).abs() < 1e-6);
        }
    }

    #[test]
    fn idle_path_is_reproducible() {
        let mut a = spawn(4, Vec2::new(1_000.0, 1_000.0));
        let mut b = spawn(4, Vec2::new(1_000.0, 1_000.0));
        for i in 0..200 {
            let t = i as f32 * 0.016;
            a.step(t, None, 1_000.0);
            b.step(t, None, 1_000.0);
            assert_eq!(a.target(), b.target());
            assert_eq!(a.position(), b.position());
        }
    }

    #[test]
    fn idle_drift_is_periodic_in_time() {
        let agent = spawn(5, Vec2::new(1_000.0, 1_000.0));
        let t = 1.25;
        let period_x = TAU / agent.wander_freq().x;
        let step = |t: f32| {
            let mut a = agent.clone();
            let before = a.target();
            a.step(t, None, 1_000.0);
            a.target() - before
        };
        assert!((step(t).x - step(t + period_x).x).abs() < 1e-2);
    }

    #[test]
    fn follow_replaces_target() {
        let mut agent = spawn(6, Vec2::new(1_000.0, 1_000.0));
        agent.follow(12.0, 34.0);
        assert_eq!(agent.target(), Vec2::new(12.0, 34.0));
        agent.step(0.0, Some(Vec2::new(400.0, 300.0)), 1_000.0);
        assert_eq!(agent.target(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn zero_width_collapses_without_panicking() {
        let mut agent = spawn(7, Vec2::new(800.0, 600.0));
        for i in 0..10 {
            let engaged = agent.step(i as f32, None, 0.0);
            assert_eq!(engaged, 0);
        }
        assert!(agent.trail_points().iter().all(|p| p.radius == 0.0));
    }

    #[test]
    fn anchor_on_point_uses_radius_cap() {
        let tuning = Tuning::from(&EngineParams::default());
        assert_eq!(candidate_radius(&tuning, 1_000.0, 0.0), POINT_RADIUS_MAX);
        assert_eq!(candidate_radius(&tuning, 1_000.0, f32::NAN), POINT_RADIUS_MAX);
        assert!((candidate_radius(&tuning, 1_000.0, 400.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn paint_draws_lines_only_for_active_points() {
        let params = EngineParams::default();
        let mut agent = spawn(8, Vec2::new(100.0, 100.0));
        agent.step(0.0, Some(Vec2::new(50.0, 50.0)), 2_000.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pen = NoiseLineRenderer::seeded(&params, 1);
        agent.paint(&mut surface, &mut pen, params.ink);
        assert_eq!(surface.polyline_count(), ENGAGE_CAP);
        assert_eq!(surface.disc_count(), TRAIL_POINT_COUNT);
        assert!(surface
            .commands()
            .iter()
            .all(|c| !matches!(c, DrawCommand::Clear(_))));
    }

    #[test]
    fn ring_offsets_are_unit_and_wrap() {
        for i in 0..RING_SAMPLES {
            assert!((ring_offset(i, RING_SAMPLES).length() - 1.0).abs() < 1e-5);
        }
        assert_eq!(ring_offset(RING_SAMPLES + 2, RING_SAMPLES), ring_offset(2, RING_SAMPLES));
        assert_eq!(ring_offset(0, RING_SAMPLES), Vec2::new(1.0, 0.0));
    }
}
