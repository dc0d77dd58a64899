#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_label_raster_to_png, render_parameter_map_to_png, LabelPalette,
};
