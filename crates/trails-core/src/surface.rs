//! Drawing surface abstraction.
//!
//! The engine never looks a surface up on its own; the [`RenderLoop`] owns one
//! and lends it to the agents during a frame. Hosts implement [`Surface`] over
//! their native 2D API. [`RecordingSurface`] keeps the commands of the
//! current frame in memory, which is what the tests and headless runs use.
//!
//! [`RenderLoop`]: crate::RenderLoop

use crate::config::Rgb;
use glam::Vec2;

pub trait Surface {
    /// Current size in surface pixels.
    fn size(&self) -> Vec2;

    fn width(&self) -> f32 {
        self.size().x
    }

    fn resize(&mut self, width: f32, height: f32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb);

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgb);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgb,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain everything recorded so far.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Clear(_)))
    }

    pub fn disc_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Disc { .. }))
    }

    pub fn polyline_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Polyline { .. }))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// A clear overwrites the frame, so earlier commands are dropped.
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgb) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_starts_a_new_frame() {
        let ink = Rgb([1, 2, 3]);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.clear(Rgb([0, 0, 0]));
        surface.fill_disc(Vec2::ONE, 1.0, ink);
        surface.stroke_polyline(&[Vec2::ZERO, Vec2::ONE], 2.0, ink);
        assert_eq!(surface.commands().len(), 3);

        surface.clear(Rgb([0, 0, 0]));
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.disc_count(), 0);
        assert_eq!(surface.polyline_count(), 0);
    }

    #[test]
    fn memory_stays_bounded_over_many_frames() {
        let ink = Rgb([9, 9, 9]);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        for _ in 0..1_000 {
            surface.clear(Rgb([0, 0, 0]));
            for _ in 0..4 {
                surface.fill_disc(Vec2::ZERO, 1.0, ink);
            }
        }
        assert_eq!(surface.commands().len(), 5);
    }
}
