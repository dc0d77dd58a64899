//! PNG rendering helpers shared by the example binaries.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use image::{GrayImage, Luma, Rgb, RgbImage};
use mri_phantom::prelude::*;

/// Initialize a simple stdout tracing subscriber for the examples.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

/// Color assignment for the distinct values of a label raster.
#[derive(Clone, Debug)]
pub struct LabelPalette {
    colors: BTreeMap<i32, Rgb<u8>>,
}

impl LabelPalette {
    /// Assign a color to every distinct value of the raster: dark tones for
    /// the background sentinels, a rotating bright palette for labels.
    pub fn for_raster(raster: &LabelRaster) -> Self {
        const FOREGROUND: [Rgb<u8>; 6] = [
            Rgb([235, 110, 80]),
            Rgb([95, 180, 240]),
            Rgb([120, 210, 130]),
            Rgb([240, 200, 90]),
            Rgb([190, 130, 230]),
            Rgb([240, 150, 200]),
        ];
        let mut colors = BTreeMap::new();
        let mut next = 0usize;
        for value in raster.distinct_values() {
            let color = if value < 0 {
                // sentinels: deep background darkest
                if value == DEEP_BACKGROUND {
                    Rgb([16, 16, 16])
                } else {
                    Rgb([45, 60, 90])
                }
            } else {
                let c = FOREGROUND[next % FOREGROUND.len()];
                next += 1;
                c
            };
            colors.insert(value, color);
        }
        Self { colors }
    }

    pub fn color_of(&self, value: i32) -> Rgb<u8> {
        self.colors.get(&value).copied().unwrap_or(Rgb([255, 0, 255]))
    }
}

/// Render a label raster to a PNG file, one palette color per distinct value.
pub fn render_label_raster_to_png(raster: &LabelRaster, path: impl AsRef<Path>) -> Result<()> {
    let palette = LabelPalette::for_raster(raster);
    let shape = raster.shape();
    let mut img = RgbImage::new(shape.width as u32, shape.height as u32);
    for row in 0..shape.height {
        for col in 0..shape.width {
            img.put_pixel(
                col as u32,
                row as u32,
                palette.color_of(raster.get(row, col)),
            );
        }
    }
    img.save(path)?;
    Ok(())
}

/// Render a parameter map to a grayscale PNG file, normalized to the map's
/// value range.
pub fn render_parameter_map_to_png(map: &ParameterMap, path: impl AsRef<Path>) -> Result<()> {
    let shape = map.shape();
    let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in map.as_slice() {
        min = min.min(v);
        max = max.max(v);
    }
    let span = if max > min { max - min } else { 1.0 };

    let mut img = GrayImage::new(shape.width as u32, shape.height as u32);
    for row in 0..shape.height {
        for col in 0..shape.width {
            let normalized = (map.get(row, col) - min) / span;
            img.put_pixel(
                col as u32,
                row as u32,
                Luma([(normalized * 255.0).round() as u8]),
            );
        }
    }
    img.save(path)?;
    Ok(())
}
