//! Build ordered compartment lists from free-form parameter records.
use crate::compartment::{CompartmentSpec, GeometricParams, LabelParams, MagnetizationParams};
use crate::error::{Error, Result};
use crate::placement::circular_positions;
use crate::raster::CanvasShape;
use crate::stencil::Morphology;

/// Free-form magnetization and label record for one compartment.
///
/// Leave `int_id` unset on every record for automatic ID assignment in input
/// order, or set it on every record with unique values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompartmentParams {
    pub pd: f64,
    pub t1: f64,
    pub t2: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub int_id: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

impl CompartmentParams {
    pub fn new(pd: f64, t1: f64, t2: f64) -> Self {
        Self {
            pd,
            t1,
            t2,
            int_id: None,
            name: None,
        }
    }

    pub fn with_id(mut self, int_id: i32) -> Self {
        self.int_id = Some(int_id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Whether every record leaves its integer ID unset.
pub(crate) fn ids_homogeneously_unset(params: &[CompartmentParams]) -> bool {
    !params.is_empty() && params.iter().all(|p| p.int_id.is_none())
}

/// Whether the user-supplied integer IDs are pairwise distinct.
pub(crate) fn ids_are_unique(ids: &[i32]) -> bool {
    let mut seen = std::collections::BTreeSet::new();
    ids.iter().all(|id| seen.insert(*id))
}

/// Build the ordered compartment list for the given canvas from free-form
/// parameter records: resolve integer IDs, sort by ID, validate the
/// magnetization parameters, and derive center positions on a circle of
/// `position_radius` around the canvas center.
pub fn from_params(
    canvas_shape: CanvasShape,
    position_radius: i32,
    morphology: Morphology,
    params: &[CompartmentParams],
) -> Result<Vec<CompartmentSpec>> {
    let mut records: Vec<CompartmentParams> = params.to_vec();

    if ids_homogeneously_unset(&records) {
        for (i, record) in records.iter_mut().enumerate() {
            record.int_id = Some(i as i32);
        }
    } else {
        let ids: Vec<i32> = records
            .iter()
            .map(|r| {
                r.int_id.ok_or_else(|| {
                    Error::InvalidConfig(
                        "integer ID must be either unique or all unset for \
                         automatic ID assignment"
                            .into(),
                    )
                })
            })
            .collect::<Result<_>>()?;
        if !ids_are_unique(&ids) {
            return Err(Error::InvalidConfig(
                "integer ID must be either unique or all unset for automatic \
                 ID assignment"
                    .into(),
            ));
        }
    }

    records.sort_by_key(|r| r.int_id);

    let positions = circular_positions(records.len(), canvas_shape, position_radius)?;

    let mut compartments = Vec::with_capacity(records.len());
    for (record, center) in records.into_iter().zip(positions) {
        let magnetization = MagnetizationParams::new(record.pd, record.t1, record.t2)?;
        let int_id = record
            .int_id
            .ok_or_else(|| Error::InvalidConfig("missing integer ID".into()))?;
        compartments.push(CompartmentSpec {
            magnetization,
            labels: LabelParams {
                int_id,
                name: record.name,
            },
            geometry: GeometricParams { center, morphology },
        });
    }
    Ok(compartments)
}
