use crate::config::{EngineParams, Rgb};
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Strokes "hand-drawn" lines: a straight path split into segments whose
/// vertices are pushed off the line by independent per-axis jitter.
#[derive(Clone, Debug)]
pub struct NoiseLineRenderer<R = StdRng> {
    rng: R,
    segments: usize,
    jitter_amplitude: f32,
    jitter_bias: f32,
    width: f32,
    color: Rgb,
}

impl NoiseLineRenderer<StdRng> {
    pub fn seeded(params: &EngineParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> NoiseLineRenderer<R> {
    pub fn with_rng(params: &EngineParams, rng: R) -> Self {
        Self {
            rng,
            segments: params.line_segments.max(1),
            jitter_amplitude: params.line_jitter_amplitude,
            jitter_bias: params.line_jitter_bias,
            width: params.line_width,
            color: params.ink,
        }
    }

    /// Vertices of a jittered line from `from` to `to`. The first vertex is
    /// `from` untouched; every following vertex is jittered, the last one
    /// included.
    pub fn noisy_polyline(&mut self, from: Vec2, to: Vec2) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.segments + 1);
        points.push(from);
        for i in 1..=self.segments {
            let t = i as f32 / self.segments as f32;
            let jitter = Vec2::new(self.jitter(), self.jitter());
            points.push(from.lerp(to, t) + jitter);
        }
        points
    }

    pub fn draw_noisy_line<S: Surface + ?Sized>(&mut self, surface: &mut S, from: Vec2, to: Vec2) {
        let points = self.noisy_polyline(from, to);
        surface.stroke_polyline(&points, self.width, self.color);
    }

    /// Largest distance a jittered vertex can sit from its straight-line
    /// position on a single axis.
    pub fn max_jitter(&self) -> f32 {
        let lo = self.jitter_bias * self.jitter_amplitude;
        let hi = (1.0 + self.jitter_bias) * self.jitter_amplitude;
        lo.abs().max(hi.abs())
    }

    fn jitter(&mut self) -> f32 {
        (self.rng.gen::<f32>() + self.jitter_bias) * self.jitter_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn polyline_has_segment_count_plus_one_vertices() {
        let params = EngineParams::default();
        let mut pen = NoiseLineRenderer::seeded(&params, 1);
        let pts = pen.noisy_polyline(Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert_eq!(pts.len(), params.line_segments + 1);
        assert_eq!(pts[0], Vec2::ZERO);
    }

    #[test]
    fn same_seed_same_path() {
        let params = EngineParams::default();
        let mut a = NoiseLineRenderer::seeded(&params, 99);
        let mut b = NoiseLineRenderer::seeded(&params, 99);
        let from = Vec2::new(3.0, 4.0);
        let to = Vec2::new(40.0, -12.0);
        assert_eq!(a.noisy_polyline(from, to), b.noisy_polyline(from, to));
    }

    #[test]
    fn vertices_stay_within_jitter_bound() {
        let params = EngineParams::default();
        let mut pen = NoiseLineRenderer::seeded(&params, 7);
        let from = Vec2::new(10.0, 10.0);
        let to = Vec2::new(210.0, 110.0);
        let bound = pen.max_jitter() + 1e-3;
        for _ in 0..50 {
            let pts = pen.noisy_polyline(from, to);
            for (i, p) in pts.iter().enumerate().skip(1) {
                let ideal = from.lerp(to, i as f32 / params.line_segments as f32);
                let d = *p - ideal;
                assert!(d.x.abs() <= bound && d.y.abs() <= bound, "vertex {i} off by {d}");
            }
        }
    }

    #[test]
    fn zero_length_line_jitters_around_the_point() {
        let params = EngineParams::default();
        let mut pen = NoiseLineRenderer::seeded(&params, 3);
        let p = Vec2::new(50.0, 50.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        pen.draw_noisy_line(&mut surface, p, p);
        let bound = pen.max_jitter() + 1e-3;
        match &surface.commands()[0] {
            DrawCommand::Polyline { points, width, .. } => {
                assert_eq!(*width, params.line_width);
                assert!(points.iter().all(|v| v.is_finite()));
                assert!(points.iter().all(|v| (*v - p).abs().max_element() <= bound));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
