//! Host-medium overlay: carve an inscribed disk out of the background.
use crate::mask::{DEEP_BACKGROUND, HOST_MEDIUM};
use crate::raster::LabelRaster;
use crate::stencil::{create_stencil, Morphology};

/// Applies the inscribed host-medium disk to a composite mask.
///
/// The disk radius is half the canvas's leading dimension; its footprint
/// drops the last row and column so that it tiles an even canvas exactly,
/// anchored at the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostDiskOverlay {
    /// Sentinel identifying background pixels eligible for relabeling.
    pub deep_background: i32,
    /// Sentinel written into the host-medium region.
    pub host_medium: i32,
}

impl Default for HostDiskOverlay {
    fn default() -> Self {
        Self::new(DEEP_BACKGROUND, HOST_MEDIUM)
    }
}

impl HostDiskOverlay {
    pub fn new(deep_background: i32, host_medium: i32) -> Self {
        Self {
            deep_background,
            host_medium,
        }
    }

    /// Relabel every pixel that still holds the background sentinel and lies
    /// inside the inscribed disk. Foreground labels and pixels outside the
    /// disk are left untouched.
    pub fn apply(&self, mask: &mut LabelRaster) {
        let shape = mask.shape();
        let disk = create_stencil(Morphology::Disk, shape.height / 2);
        let rows = (disk.height() - 1).min(shape.height);
        let cols = (disk.width() - 1).min(shape.width);

        for row in 0..rows {
            for col in 0..cols {
                if disk.is_occupied(row, col) && mask.get(row, col) == self.deep_background {
                    mask.set(row, col, self.host_medium);
                }
            }
        }
    }

    /// Legacy additive path: rebuild the refined mask from a basal
    /// foreground/background mask by summing a background canvas, the binary
    /// disk, and the basal values.
    ///
    /// Equivalent to [`HostDiskOverlay::apply`] only when footprints do not
    /// overlap, the basal background is zero, and each basal foreground value
    /// is the intended label minus `host_medium` (with the default sentinels:
    /// label plus one), so that the disk contribution cancels out inside the
    /// host region.
    pub fn apply_additive_basal(&self, basal: &LabelRaster) -> LabelRaster {
        let shape = basal.shape();
        let disk = create_stencil(Morphology::Disk, shape.height / 2);
        let rows = (disk.height() - 1).min(shape.height);
        let cols = (disk.width() - 1).min(shape.width);

        let mut out = LabelRaster::filled(shape, self.deep_background);
        for row in 0..shape.height {
            for col in 0..shape.width {
                let in_disk = row < rows && col < cols && disk.is_occupied(row, col);
                let value = self.deep_background + i32::from(in_disk) + basal.get(row, col);
                out.set(row, col, value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::CanvasShape;

    fn composite_with_one_footprint() -> LabelRaster {
        let mut mask = LabelRaster::filled(CanvasShape::new(8, 8), DEEP_BACKGROUND);
        mask.set(4, 4, 5);
        mask
    }

    #[test]
    fn background_inside_the_disk_becomes_host_medium() {
        let mut mask = composite_with_one_footprint();
        HostDiskOverlay::default().apply(&mut mask);

        // disk of radius 4 centered at (4, 4): edge midpoints are inside
        assert_eq!(mask.get(0, 4), HOST_MEDIUM);
        assert_eq!(mask.get(4, 0), HOST_MEDIUM);
        // corners stay deep background
        assert_eq!(mask.get(0, 0), DEEP_BACKGROUND);
        assert_eq!(mask.get(7, 7), DEEP_BACKGROUND);
        // foreground label untouched
        assert_eq!(mask.get(4, 4), 5);
    }

    #[test]
    fn overlay_never_touches_foreground_labels() {
        let mut mask = LabelRaster::filled(CanvasShape::new(8, 8), 3);
        let before = mask.clone();
        HostDiskOverlay::default().apply(&mut mask);
        assert_eq!(mask, before);
    }

    #[test]
    fn custom_sentinels_are_respected() {
        let mut mask = LabelRaster::filled(CanvasShape::new(8, 8), -20);
        HostDiskOverlay::new(-20, -10).apply(&mut mask);
        assert_eq!(mask.get(4, 4), -10);
        assert_eq!(mask.get(0, 0), -20);
    }

    #[test]
    fn additive_basal_path_matches_the_overwrite_path() {
        // overwrite path on a composite with label 5 at (4, 4)
        let mut composite = composite_with_one_footprint();
        HostDiskOverlay::default().apply(&mut composite);

        // additive path on the equivalent basal mask: zero background,
        // foreground pre-incremented by one
        let mut basal = LabelRaster::filled(CanvasShape::new(8, 8), 0);
        basal.set(4, 4, 6);
        let rebuilt = HostDiskOverlay::default().apply_additive_basal(&basal);

        assert_eq!(rebuilt, composite);
    }
}
