//! Phantom aggregate and parameter-map extraction.
use tracing::info;

use crate::compartment::{
    from_params, CompartmentParams, CompartmentSpec, CompartmentView, EnvironmentSpec,
    MagnetizationParams,
};
use crate::error::{Error, Result};
use crate::mask::{build_mask, LabelMode, MaskConfig};
use crate::placement::Position;
use crate::raster::{CanvasShape, LabelRaster};
use crate::stencil::{create_stencil, Morphology};

/// Physical parameter selectable for map extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Pd,
    T1,
    T2,
}

impl Parameter {
    fn value_of(&self, magnetization: &MagnetizationParams) -> f64 {
        match self {
            Parameter::Pd => magnetization.pd(),
            Parameter::T1 => magnetization.t1(),
            Parameter::T2 => magnetization.t2(),
        }
    }
}

/// A canvas-shaped floating point parameter map.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterMap {
    shape: CanvasShape,
    data: Vec<f32>,
}

impl ParameterMap {
    pub fn shape(&self) -> CanvasShape {
        self.shape
    }

    /// Value at `(row, col)`. Panics when the indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.shape.width + col]
    }

    /// Row-major view of the map values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// A labeled 2D phantom together with its compartment inventory.
///
/// The environment compartments are injected at construction; the defaults
/// are [`EnvironmentSpec::background`] and [`EnvironmentSpec::host_water`].
#[derive(Clone, Debug)]
pub struct BasicPhantom {
    /// The composite labeled mask.
    pub array: LabelRaster,
    /// Foreground compartments, ordered by integer ID.
    pub compartments: Vec<CompartmentSpec>,
    /// Host-medium environment.
    pub hostmedium: EnvironmentSpec,
    /// Deep-background environment.
    pub background: EnvironmentSpec,
}

impl BasicPhantom {
    /// Wrap an existing mask and compartment list with the default
    /// environments.
    pub fn new(array: LabelRaster, compartments: Vec<CompartmentSpec>) -> Self {
        Self {
            array,
            compartments,
            hostmedium: EnvironmentSpec::host_water(),
            background: EnvironmentSpec::background(),
        }
    }

    /// Replace the environment compartments.
    pub fn with_environments(
        mut self,
        background: EnvironmentSpec,
        hostmedium: EnvironmentSpec,
    ) -> Self {
        self.background = background;
        self.hostmedium = hostmedium;
        self
    }

    /// Create a basic phantom from the canvas shape, the stencil morphology
    /// and radius, the placement-circle radius, and free-form compartment
    /// parameter records.
    ///
    /// Compartment stencils are placed evenly on the circle and the mask is
    /// built with each compartment's integer ID as its layer label, so mask
    /// values and compartment IDs agree by construction. The host-medium
    /// overlay is applied.
    pub fn from_specs(
        canvas_shape: CanvasShape,
        stencil_radius: usize,
        morphology: Morphology,
        position_radius: i32,
        params: &[CompartmentParams],
    ) -> Result<Self> {
        let background = EnvironmentSpec::background();
        let hostmedium = EnvironmentSpec::host_water();

        let stencil = create_stencil(morphology, stencil_radius);
        let compartments = from_params(canvas_shape, position_radius, morphology, params)?;

        for compartment in &compartments {
            let id = compartment.labels.int_id;
            if id == background.labels.int_id || id == hostmedium.labels.int_id {
                return Err(Error::InvalidConfig(format!(
                    "compartment ID {id} collides with an environment sentinel"
                )));
            }
        }

        let positions: Vec<Position> = compartments.iter().map(|c| c.geometry.center).collect();
        let labels: Vec<i32> = compartments.iter().map(|c| c.labels.int_id).collect();

        let config = MaskConfig::new(canvas_shape)
            .with_labels(LabelMode::Explicit(labels))
            .with_sentinels(background.labels.int_id, hostmedium.labels.int_id);
        let array = build_mask(&stencil, &positions, &config)?;

        info!(
            "created {}x{} phantom with {} {} compartments",
            canvas_shape.height,
            canvas_shape.width,
            compartments.len(),
            morphology
        );
        Ok(Self {
            array,
            compartments,
            hostmedium,
            background,
        })
    }

    /// The entirety of compartments: background, host medium, then every
    /// foreground compartment.
    pub fn compartments_entirety(&self) -> Vec<&dyn CompartmentView> {
        let mut all: Vec<&dyn CompartmentView> = vec![&self.background, &self.hostmedium];
        all.extend(
            self.compartments
                .iter()
                .map(|c| c as &dyn CompartmentView),
        );
        all
    }

    /// Extract the requested parameter map by painting each compartment's
    /// parameter value over its labeled footprint.
    ///
    /// Every pixel of the mask must be covered by one of the entirety's
    /// labels; leftover pixels fail with [`Error::IncompleteParameterMap`].
    pub fn parameter_map(&self, parameter: Parameter) -> Result<ParameterMap> {
        let shape = self.array.shape();
        let mut data = vec![f32::NAN; shape.len()];

        for compartment in self.compartments_entirety() {
            let id = compartment.labels().int_id;
            let value = parameter.value_of(compartment.magnetization()) as f32;
            for (dst, &label) in data.iter_mut().zip(self.array.as_slice()) {
                if label == id {
                    *dst = value;
                }
            }
        }

        let missing = data.iter().filter(|v| v.is_nan()).count();
        if missing > 0 {
            return Err(Error::IncompleteParameterMap { missing });
        }
        Ok(ParameterMap { shape, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn canonical_specs() -> Vec<CompartmentParams> {
        vec![
            CompartmentParams::new(1.0, 100.0, 50.0),
            CompartmentParams::new(0.7, 1000.0, 250.0),
            CompartmentParams::new(0.9, 700.0, 300.0),
        ]
    }

    fn canonical_phantom() -> BasicPhantom {
        BasicPhantom::from_specs(
            CanvasShape::new(256, 256),
            12,
            Morphology::Disk,
            40,
            &canonical_specs(),
        )
        .unwrap()
    }

    #[test]
    fn mask_values_equal_the_entirety_ids() {
        let phantom = canonical_phantom();
        assert_eq!(phantom.array.shape(), CanvasShape::new(256, 256));

        let mask_values = phantom.array.distinct_values();
        let entirety_ids: BTreeSet<i32> = phantom
            .compartments_entirety()
            .iter()
            .map(|c| c.labels().int_id)
            .collect();
        assert_eq!(mask_values, entirety_ids);
    }

    #[test]
    fn entirety_starts_with_the_environments() {
        let phantom = canonical_phantom();
        let entirety = phantom.compartments_entirety();
        assert_eq!(entirety.len(), 5);
        assert_eq!(entirety[0].labels().int_id, -2);
        assert_eq!(entirety[1].labels().int_id, -1);
    }

    #[test]
    fn pd_map_covers_the_whole_canvas() {
        let phantom = canonical_phantom();
        let map = phantom.parameter_map(Parameter::Pd).unwrap();
        assert_eq!(map.shape(), CanvasShape::new(256, 256));
        assert!(map.as_slice().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn parameter_values_land_on_the_compartment_centers() {
        let phantom = canonical_phantom();
        let t1 = phantom.parameter_map(Parameter::T1).unwrap();

        for compartment in &phantom.compartments {
            let center = compartment.geometry.center;
            let value = t1.get(center.row as usize, center.col as usize);
            assert_eq!(f64::from(value), compartment.magnetization.t1());
        }
        // corner is deep background
        assert_eq!(t1.get(0, 0), 1.0);
    }

    #[test]
    fn incomplete_coverage_is_an_error() {
        let mut phantom = canonical_phantom();
        // orphan a pixel with a label no compartment carries
        phantom.array.set(0, 0, 99);
        let err = phantom.parameter_map(Parameter::Pd).unwrap_err();
        assert!(matches!(err, Error::IncompleteParameterMap { missing: 1 }));
    }

    #[test]
    fn sentinel_colliding_compartment_ids_are_rejected() {
        let specs = vec![
            CompartmentParams::new(1.0, 100.0, 50.0).with_id(-1),
            CompartmentParams::new(0.7, 1000.0, 250.0).with_id(4),
        ];
        let err = BasicPhantom::from_specs(
            CanvasShape::new(256, 256),
            12,
            Morphology::Disk,
            40,
            &specs,
        );
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn custom_environments_can_be_injected() {
        let phantom = canonical_phantom().with_environments(
            EnvironmentSpec::background(),
            EnvironmentSpec::host_water(),
        );
        assert_eq!(phantom.hostmedium.labels.int_id, -1);
    }
}
