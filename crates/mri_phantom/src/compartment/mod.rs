//! Compartment attribute records: magnetization, labeling, geometry.
//!
//! A compartment is a labeled tissue-like region with associated physical
//! parameters. Foreground compartments carry placement geometry; delocalized
//! environment compartments (deep background, host medium) do not.
use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::mask::{DEEP_BACKGROUND, HOST_MEDIUM};
use crate::placement::Position;
use crate::stencil::Morphology;

pub mod create;

pub use create::{from_params, CompartmentParams};

/// Magnetization parameters of one compartment.
///
/// Validated at construction: proton density lies in `[0, 1]`, relaxation
/// times are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetizationParams {
    pd: f64,
    t1: f64,
    t2: f64,
}

impl MagnetizationParams {
    pub fn new(pd: f64, t1: f64, t2: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&pd) {
            return Err(Error::InvalidParameter(format!(
                "PD value must be between 0.0 and 1.0 (got {pd})"
            )));
        }
        if t1 < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "T1 relaxation time must be positive (got {t1})"
            )));
        }
        if t2 < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "T2 relaxation time must be positive (got {t2})"
            )));
        }
        Ok(Self { pd, t1, t2 })
    }

    /// Proton density in `[0, 1]`.
    pub fn pd(&self) -> f64 {
        self.pd
    }

    /// Longitudinal relaxation time in milliseconds.
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// Transverse relaxation time in milliseconds.
    pub fn t2(&self) -> f64 {
        self.t2
    }
}

/// Label identity of a compartment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelParams {
    /// Integer label identifying the compartment in the composite mask.
    pub int_id: i32,
    /// Optional human-readable name.
    pub name: Option<String>,
}

impl LabelParams {
    pub fn new(int_id: i32) -> Self {
        Self { int_id, name: None }
    }

    pub fn named(int_id: i32, name: impl Into<String>) -> Self {
        Self {
            int_id,
            name: Some(name.into()),
        }
    }
}

/// Placement geometry of a foreground compartment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometricParams {
    /// Center position of the compartment's stencil footprint.
    pub center: Position,
    /// Stencil morphology.
    pub morphology: Morphology,
}

/// A fully specified foreground compartment.
#[derive(Clone, Debug, PartialEq)]
pub struct CompartmentSpec {
    pub magnetization: MagnetizationParams,
    pub labels: LabelParams,
    pub geometry: GeometricParams,
}

/// A delocalized environment compartment without geometry information.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentSpec {
    pub magnetization: MagnetizationParams,
    pub labels: LabelParams,
}

impl EnvironmentSpec {
    /// Default empty background: no signal, shortest relaxation.
    pub fn background() -> Self {
        Self {
            magnetization: MagnetizationParams {
                pd: 0.0,
                t1: 1.0,
                t2: 1.0,
            },
            labels: LabelParams::named(DEEP_BACKGROUND, "background"),
        }
    }

    /// Default water-like host medium.
    pub fn host_water() -> Self {
        Self {
            magnetization: MagnetizationParams {
                pd: 1.0,
                t1: 4000.0,
                t2: 2000.0,
            },
            labels: LabelParams::named(HOST_MEDIUM, "host-water"),
        }
    }
}

/// Common read-only view over foreground and environment compartments.
pub trait CompartmentView {
    fn magnetization(&self) -> &MagnetizationParams;
    fn labels(&self) -> &LabelParams;
}

impl CompartmentView for CompartmentSpec {
    fn magnetization(&self) -> &MagnetizationParams {
        &self.magnetization
    }

    fn labels(&self) -> &LabelParams {
        &self.labels
    }
}

impl CompartmentView for EnvironmentSpec {
    fn magnetization(&self) -> &MagnetizationParams {
        &self.magnetization
    }

    fn labels(&self) -> &LabelParams {
        &self.labels
    }
}

/// Render an information string about the compartments: one row per
/// compartment with its ID (and optionally its name), followed by an
/// indented line with the magnetization parameters.
pub fn compartment_info<'a>(
    compartments: impl IntoIterator<Item = &'a dyn CompartmentView>,
    include_name: bool,
    indent: usize,
) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for compartment in compartments {
        let labels = compartment.labels();
        let name = if include_name {
            labels.name.as_deref().unwrap_or("")
        } else {
            ""
        };
        let m = compartment.magnetization();
        let _ = writeln!(out, "ID {} {}", labels.int_id, name);
        let _ = writeln!(
            out,
            "{pad}PD = {:.2} T1 = {:.1} ms T2 = {:.1} ms",
            m.pd(),
            m.t1(),
            m.t2()
        );
    }
    out
}
