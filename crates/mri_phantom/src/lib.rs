#![forbid(unsafe_code)]
//! mri_phantom: 2D labeled phantom synthesis for MRI simulation.
//!
//! Modules:
//! - placement: position values and deterministic circular placement
//! - stencil: binary shape stencils (square, disk, diamond, star)
//! - mask: embedding, labeled composition, and the host-medium overlay
//! - compartment: magnetization/label records and the compartment factory
//! - phantom: the phantom aggregate and parameter-map extraction
//!
//! The composite mask is an integer raster in which every stencil footprint
//! holds one compartment label and the background holds two distinct
//! sentinels (deep background and host medium). Parameter maps (PD, T1, T2)
//! are derived from it by the phantom aggregate.
pub mod compartment;
pub mod error;
pub mod mask;
pub mod phantom;
pub mod placement;
pub mod raster;
pub mod stencil;

/// Convenient re-exports for common types. Import with `use mri_phantom::prelude::*;`.
pub mod prelude {
    pub use crate::compartment::{
        compartment_info, from_params, CompartmentParams, CompartmentSpec, CompartmentView,
        EnvironmentSpec, GeometricParams, LabelParams, MagnetizationParams,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mask::{
        build_mask, embed_at, HostDiskOverlay, LabelMode, MaskConfig, OddPreference,
        DEEP_BACKGROUND, HOST_MEDIUM, LABEL_OFFSET,
    };
    pub use crate::phantom::{BasicPhantom, Parameter, ParameterMap};
    pub use crate::placement::{circular_positions, Position, PositionLayout, RingLayout};
    pub use crate::raster::{CanvasShape, LabelRaster};
    pub use crate::stencil::{create_stencil, Morphology, Stencil};
}
