use mri_phantom::prelude::*;
use mri_phantom_examples::{init_tracing, render_parameter_map_to_png};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Star compartments to show off a non-trivial stencil morphology.
    let specs = vec![
        CompartmentParams::new(0.95, 250.0, 70.0).with_name("cartilage"),
        CompartmentParams::new(0.8, 900.0, 100.0).with_name("white-matter"),
        CompartmentParams::new(0.85, 1400.0, 110.0).with_name("grey-matter"),
        CompartmentParams::new(1.0, 4000.0, 2000.0).with_name("csf"),
    ];

    let phantom = BasicPhantom::from_specs(
        CanvasShape::new(256, 256),
        10,
        Morphology::Star,
        64,
        &specs,
    )?;

    for (parameter, out) in [
        (Parameter::Pd, "phantom-map-pd.png"),
        (Parameter::T1, "phantom-map-t1.png"),
        (Parameter::T2, "phantom-map-t2.png"),
    ] {
        let map = phantom.parameter_map(parameter)?;
        render_parameter_map_to_png(&map, out)?;
        println!("wrote {out}");
    }

    Ok(())
}
