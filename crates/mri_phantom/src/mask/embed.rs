//! Centered embedding of a stencil footprint into a fixed-size canvas.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::placement::Position;
use crate::raster::{CanvasShape, LabelRaster};
use crate::stencil::Stencil;

/// Placement of the leftover pixel when centering an odd-sized inlay.
///
/// Integer division truncates half the side of an odd inlay; the extra pixel
/// lands either before (`Pre`) or after (`Post`) the center coordinate on
/// each axis. Even side lengths are unaffected by the preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OddPreference {
    Pre,
    #[default]
    Post,
}

impl OddPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            OddPreference::Pre => "pre",
            OddPreference::Post => "post",
        }
    }
}

impl fmt::Display for OddPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OddPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pre" => Ok(OddPreference::Pre),
            "post" => Ok(OddPreference::Post),
            other => Err(Error::InvalidOddPreference(other.to_owned())),
        }
    }
}

/// Embed `inlay` into a canvas of `canvas_shape` so that its footprint is
/// centered at `center`. Occupied pixels are set to 1, all padding to 0.
///
/// Padding is computed per axis so that the inlay midpoint lands on the
/// target coordinate. If the inlay would be clipped against any canvas edge
/// the embedding fails with [`Error::BoundaryViolation`]; it never silently
/// truncates.
pub fn embed_at(
    inlay: &Stencil,
    center: Position,
    canvas_shape: CanvasShape,
    odd_preference: OddPreference,
) -> Result<LabelRaster> {
    let row_start = axis_start(
        i64::from(center.row),
        inlay.height() as i64,
        canvas_shape.height as i64,
        odd_preference,
    );
    let col_start = axis_start(
        i64::from(center.col),
        inlay.width() as i64,
        canvas_shape.width as i64,
        odd_preference,
    );

    let (Some(row_start), Some(col_start)) = (row_start, col_start) else {
        return Err(Error::BoundaryViolation {
            inlay: inlay.shape(),
            canvas: (canvas_shape.height, canvas_shape.width),
            position: center,
        });
    };

    let mut canvas = LabelRaster::filled(canvas_shape, 0);
    for row in 0..inlay.height() {
        for col in 0..inlay.width() {
            if inlay.is_occupied(row, col) {
                canvas.set(row_start + row, col_start + col, 1);
            }
        }
    }
    Ok(canvas)
}

/// Leading pad (start index) of the inlay along one axis, or `None` when the
/// inlay does not fit.
fn axis_start(center: i64, side: i64, extent: i64, odd_preference: OddPreference) -> Option<usize> {
    let is_odd = side % 2 != 0;
    let pre_off = i64::from(is_odd && odd_preference == OddPreference::Pre);
    let post_off = i64::from(is_odd && odd_preference == OddPreference::Post);

    // the center must sit at least half a side plus one pixel away from the
    // leading edge
    if center - (side / 2 + 1) < 0 {
        return None;
    }

    let pre = center - (side / 2 + pre_off);
    let post = extent - (center + side / 2 + post_off);
    if pre < 0 || post < 0 {
        return None;
    }
    Some(pre as usize)
}
