//! Position values and deterministic placement layouts.
//!
//! This module defines the integer [`Position`] value type and the
//! [`PositionLayout`] trait used to produce stencil center positions for a
//! given canvas. Layouts are pure and deterministic: the same inputs always
//! yield the same ordered sequence, which downstream label assignment relies
//! on.
use std::fmt;

use mint::Point2;

use crate::error::Result;
use crate::raster::CanvasShape;

pub mod ring;

pub use ring::{circular_positions, RingLayout};

/// An ordered `(row, col)` pixel coordinate pair.
///
/// Immutable value type. `row` indexes the leading raster axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Permuted view swapping the two components.
    ///
    /// Useful where the raster `(row, col)` convention and the plotting
    /// `(x, y)` convention are used simultaneously.
    pub fn permuted(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Position> for (i32, i32) {
    fn from(value: Position) -> Self {
        (value.row, value.col)
    }
}

impl From<Point2<i32>> for Position {
    fn from(value: Point2<i32>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Position> for Point2<i32> {
    fn from(value: Position) -> Self {
        Point2 {
            x: value.row,
            y: value.col,
        }
    }
}

/// Trait for deterministic placement layouts.
pub trait PositionLayout: Send + Sync {
    /// Produce the ordered center positions for the given canvas.
    fn generate(&self, canvas_shape: CanvasShape) -> Result<Vec<Position>>;
}
