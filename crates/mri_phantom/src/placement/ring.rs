//! Evenly spaced placement on a circle around the canvas center.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::placement::{Position, PositionLayout};
use crate::raster::CanvasShape;

/// Places `count` positions on a circle of `radius` pixels around the canvas
/// center, equally spaced by `2π / count` starting at angle zero.
///
/// Coordinates are rounded half-to-even to the nearest pixel. Output order is
/// deterministic and stable, which matters because downstream label
/// assignment is positional.
#[derive(Clone, Copy, Debug)]
pub struct RingLayout {
    /// Number of positions to place.
    pub count: usize,
    /// Circle radius in pixels.
    pub radius: i32,
}

impl RingLayout {
    pub fn new(count: usize, radius: i32) -> Self {
        Self { count, radius }
    }
}

impl PositionLayout for RingLayout {
    fn generate(&self, canvas_shape: CanvasShape) -> Result<Vec<Position>> {
        if self.count == 0 {
            return Err(Error::InvalidConfig(
                "compartment count must be >= 1".into(),
            ));
        }

        let center = canvas_shape.center();
        let step = std::f64::consts::TAU / self.count as f64;

        let mut positions = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let angle = step * i as f64;
            let offset = DVec2::new(angle.cos(), angle.sin()) * f64::from(self.radius);
            positions.push(Position::new(
                (f64::from(center.row) + offset.x).round_ties_even() as i32,
                (f64::from(center.col) + offset.y).round_ties_even() as i32,
            ));
        }
        Ok(positions)
    }
}

/// Create position coordinates for `count` compartments on a circle with the
/// specified radius inside `canvas_shape`.
pub fn circular_positions(
    count: usize,
    canvas_shape: CanvasShape,
    radius: i32,
) -> Result<Vec<Position>> {
    RingLayout::new(count, radius).generate(canvas_shape)
}
