//! Composition of embedded stencil layers into one labeled mask.
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::mask::embed::{embed_at, OddPreference};
use crate::mask::overlay::HostDiskOverlay;
use crate::mask::{DEEP_BACKGROUND, HOST_MEDIUM, LABEL_OFFSET};
use crate::placement::Position;
use crate::raster::{CanvasShape, LabelRaster};
use crate::stencil::Stencil;

/// How per-layer labels are assigned during composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelMode {
    /// Label each placement `index + offset`, in placement order.
    Offset(i32),
    /// One caller-supplied label per placement, decoupling raster labels from
    /// placement order entirely.
    Explicit(Vec<i32>),
}

impl Default for LabelMode {
    fn default() -> Self {
        LabelMode::Offset(LABEL_OFFSET)
    }
}

/// Configuration for a mask build.
///
/// Construct with [`MaskConfig::new`], refine with the `with_*` methods, and
/// let [`build_mask`] validate before composing.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct MaskConfig {
    /// Shape of the background canvas.
    pub canvas_shape: CanvasShape,
    /// Placement of the leftover pixel for odd-sized stencils.
    pub odd_preference: OddPreference,
    /// Whether to carve the host-medium disk out of the background.
    pub host_overlay: bool,
    /// Label assignment mode.
    pub labels: LabelMode,
    /// Whether overlapping placements abort the build instead of silently
    /// summing labels.
    pub detect_overlap: bool,
    /// Sentinel for uncovered background pixels.
    pub deep_background: i32,
    /// Sentinel for the host-medium region.
    pub host_medium: i32,
}

impl MaskConfig {
    /// Creates a new [`MaskConfig`] for the given canvas shape with the
    /// documented defaults: `post` odd-placement, host overlay enabled,
    /// offset labeling, overlap undetected, standard sentinels.
    pub fn new(canvas_shape: CanvasShape) -> Self {
        Self {
            canvas_shape,
            odd_preference: OddPreference::Post,
            host_overlay: true,
            labels: LabelMode::default(),
            detect_overlap: false,
            deep_background: DEEP_BACKGROUND,
            host_medium: HOST_MEDIUM,
        }
    }

    /// Sets the odd-placement preference.
    pub fn with_odd_preference(mut self, odd_preference: OddPreference) -> Self {
        self.odd_preference = odd_preference;
        self
    }

    /// Enables or disables the host-medium overlay.
    pub fn with_host_overlay(mut self, host_overlay: bool) -> Self {
        self.host_overlay = host_overlay;
        self
    }

    /// Sets the label assignment mode.
    pub fn with_labels(mut self, labels: LabelMode) -> Self {
        self.labels = labels;
        self
    }

    /// Sets offset labeling with the given offset.
    pub fn with_label_offset(mut self, offset: i32) -> Self {
        self.labels = LabelMode::Offset(offset);
        self
    }

    /// Enables or disables overlap detection.
    pub fn with_overlap_check(mut self, detect_overlap: bool) -> Self {
        self.detect_overlap = detect_overlap;
        self
    }

    /// Sets the background and host-medium sentinel values.
    pub fn with_sentinels(mut self, deep_background: i32, host_medium: i32) -> Self {
        self.deep_background = deep_background;
        self.host_medium = host_medium;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_shape.height == 0 || self.canvas_shape.width == 0 {
            return Err(Error::InvalidConfig(
                "canvas dimensions must be > 0".into(),
            ));
        }
        if self.deep_background == self.host_medium {
            return Err(Error::InvalidConfig(
                "background and host-medium sentinels must differ".into(),
            ));
        }
        Ok(())
    }
}

/// Build the composite mask by embedding `stencil` at every position and
/// stacking the labeled layers onto the background canvas.
///
/// Uncovered pixels keep the background sentinel; each footprint holds its
/// layer label. Overlapping placements sum their labels at the shared pixels
/// unless overlap detection is enabled, in which case the build fails on the
/// first collision. Any clipping failure aborts the whole build; no partial
/// mask is ever returned.
pub fn build_mask(
    stencil: &Stencil,
    positions: &[Position],
    config: &MaskConfig,
) -> Result<LabelRaster> {
    config.validate()?;
    let labels = resolve_labels(positions.len(), &config.labels)?;

    if labels
        .iter()
        .any(|l| *l == config.deep_background || *l == config.host_medium)
    {
        warn!(
            "a placement label collides with a background sentinel; downstream \
             consumers cannot tell the regions apart"
        );
    }

    let mut mask = LabelRaster::filled(config.canvas_shape, config.deep_background);
    let mut owner: Vec<Option<usize>> = vec![None; config.canvas_shape.len()];

    for (index, (&position, &label)) in positions.iter().zip(labels.iter()).enumerate() {
        let layer = embed_at(stencil, position, config.canvas_shape, config.odd_preference)?;
        for (pixel, &occupied) in layer.as_slice().iter().enumerate() {
            if occupied <= 0 {
                continue;
            }
            match owner[pixel] {
                None => {
                    owner[pixel] = Some(index);
                    mask.as_mut_slice()[pixel] = label;
                }
                Some(first) => {
                    if config.detect_overlap {
                        return Err(Error::StencilOverlap {
                            first,
                            second: index,
                        });
                    }
                    // unchecked additive corruption, the documented hazard
                    mask.as_mut_slice()[pixel] += label;
                }
            }
        }
    }

    if config.host_overlay {
        HostDiskOverlay::new(config.deep_background, config.host_medium).apply(&mut mask);
    }

    info!(
        "composited {} stencil layers into {}x{} mask",
        positions.len(),
        config.canvas_shape.height,
        config.canvas_shape.width
    );
    Ok(mask)
}

fn resolve_labels(count: usize, mode: &LabelMode) -> Result<Vec<i32>> {
    match mode {
        LabelMode::Offset(offset) => Ok((0..count).map(|i| i as i32 + offset).collect()),
        LabelMode::Explicit(labels) => {
            if labels.len() != count {
                return Err(Error::InvalidConfig(format!(
                    "expected {} labels for {} positions, got {}",
                    count,
                    count,
                    labels.len()
                )));
            }
            Ok(labels.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::circular_positions;
    use crate::stencil::{create_stencil, Morphology};

    fn disk_scenario() -> (Stencil, Vec<Position>, MaskConfig) {
        let shape = CanvasShape::new(256, 256);
        let stencil = create_stencil(Morphology::Disk, 12);
        let positions = circular_positions(3, shape, 40).unwrap();
        (stencil, positions, MaskConfig::new(shape))
    }

    #[test]
    fn canonical_phantom_contains_exactly_the_expected_values() {
        let (stencil, positions, config) = disk_scenario();
        let mask = build_mask(&stencil, &positions, &config).unwrap();

        assert_eq!(mask.shape(), CanvasShape::new(256, 256));
        let values: Vec<i32> = mask.distinct_values().into_iter().collect();
        assert_eq!(values, vec![-2, -1, 2, 3, 4]);
    }

    #[test]
    fn foreground_footprints_keep_their_full_area() {
        let (stencil, positions, config) = disk_scenario();
        let mask = build_mask(&stencil, &positions, &config).unwrap();
        for label in [2, 3, 4] {
            assert_eq!(mask.count_of(label), stencil.occupied_count());
        }
    }

    #[test]
    fn host_region_is_the_inscribed_disk_minus_the_footprints() {
        let (stencil, positions, config) = disk_scenario();
        let mask = build_mask(&stencil, &positions, &config).unwrap();

        let host_disk = create_stencil(Morphology::Disk, 128);
        let mut inside = 0usize;
        for row in 0..256 {
            for col in 0..256 {
                if host_disk.is_occupied(row, col) {
                    inside += 1;
                }
            }
        }
        let foreground = 3 * stencil.occupied_count();
        assert_eq!(mask.count_of(-1), inside - foreground);
        assert_eq!(mask.count_of(-2), 256 * 256 - inside);
    }

    #[test]
    fn overlay_can_be_disabled() {
        let (stencil, positions, config) = disk_scenario();
        let config = config.with_host_overlay(false);
        let mask = build_mask(&stencil, &positions, &config).unwrap();
        let values: Vec<i32> = mask.distinct_values().into_iter().collect();
        assert_eq!(values, vec![-2, 2, 3, 4]);
    }

    #[test]
    fn explicit_labels_become_the_pixel_values() {
        let (stencil, positions, config) = disk_scenario();
        let config = config.with_labels(LabelMode::Explicit(vec![0, 1, 2]));
        let mask = build_mask(&stencil, &positions, &config).unwrap();
        let values: Vec<i32> = mask.distinct_values().into_iter().collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn explicit_label_count_must_match_positions() {
        let (stencil, positions, config) = disk_scenario();
        let config = config.with_labels(LabelMode::Explicit(vec![1, 2]));
        let err = build_mask(&stencil, &positions, &config);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn clipping_aborts_the_whole_build() {
        let shape = CanvasShape::new(256, 256);
        let stencil = create_stencil(Morphology::Disk, 12);
        let positions = vec![Position::new(128, 128), Position::new(5, 5)];
        let err = build_mask(&stencil, &positions, &MaskConfig::new(shape));
        assert!(matches!(err, Err(Error::BoundaryViolation { .. })));
    }

    #[test]
    fn overlapping_placements_sum_their_labels_by_default() {
        let shape = CanvasShape::new(64, 64);
        let stencil = create_stencil(Morphology::Square, 4);
        let positions = vec![Position::new(32, 32), Position::new(32, 32)];
        let config = MaskConfig::new(shape).with_host_overlay(false);
        let mask = build_mask(&stencil, &positions, &config).unwrap();
        // labels 2 and 3 collide everywhere, producing their sum
        let values: Vec<i32> = mask.distinct_values().into_iter().collect();
        assert_eq!(values, vec![-2, 5]);
    }

    #[test]
    fn overlap_check_reports_the_colliding_placements() {
        let shape = CanvasShape::new(64, 64);
        let stencil = create_stencil(Morphology::Square, 4);
        let positions = vec![
            Position::new(20, 20),
            Position::new(40, 40),
            Position::new(41, 41),
        ];
        let config = MaskConfig::new(shape).with_overlap_check(true);
        let err = build_mask(&stencil, &positions, &config).unwrap_err();
        assert!(matches!(err, Error::StencilOverlap { first: 1, second: 2 }));
    }

    #[test]
    fn zero_canvas_dimension_is_rejected() {
        let config = MaskConfig::new(CanvasShape::new(0, 64));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn equal_sentinels_are_rejected() {
        let config = MaskConfig::new(CanvasShape::new(64, 64)).with_sentinels(-1, -1);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn label_offset_shifts_every_label() {
        let (stencil, positions, config) = disk_scenario();
        let config = config.with_label_offset(10).with_host_overlay(false);
        let mask = build_mask(&stencil, &positions, &config).unwrap();
        let values: Vec<i32> = mask.distinct_values().into_iter().collect();
        assert_eq!(values, vec![-2, 10, 11, 12]);
    }
}
