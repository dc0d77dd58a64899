//! Mask composition: embedding, labeling, and host-medium overlay.
//!
//! The composite mask is the crate's sole externally consumed artifact: a
//! canvas-shaped integer raster in which every stencil footprint holds one
//! label, the host-medium disk holds [`HOST_MEDIUM`], and everything else
//! holds [`DEEP_BACKGROUND`].
pub mod compose;
pub mod embed;
pub mod overlay;

pub use compose::{build_mask, LabelMode, MaskConfig};
pub use embed::{embed_at, OddPreference};
pub use overlay::HostDiskOverlay;

/// Sentinel value for "deep" background pixels outside the host medium.
pub const DEEP_BACKGROUND: i32 = -2;

/// Sentinel value for the host-medium disk region.
pub const HOST_MEDIUM: i32 = -1;

/// Default offset added to the placement index in offset label mode, keeping
/// layer labels clear of the background sentinels.
pub const LABEL_OFFSET: i32 = 2;
