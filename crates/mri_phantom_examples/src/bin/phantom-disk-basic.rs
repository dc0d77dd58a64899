use mri_phantom::prelude::*;
use mri_phantom_examples::{init_tracing, render_label_raster_to_png};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Three disk compartments of radius 12, evenly spaced on a circle of
    // radius 40 around the canvas center.
    let specs = vec![
        CompartmentParams::new(1.0, 100.0, 50.0).with_name("fat"),
        CompartmentParams::new(0.7, 1000.0, 250.0).with_name("muscle"),
        CompartmentParams::new(0.9, 700.0, 300.0).with_name("liver"),
    ];

    let phantom = BasicPhantom::from_specs(
        CanvasShape::new(256, 256),
        12,
        Morphology::Disk,
        40,
        &specs,
    )?;

    let entirety = phantom.compartments_entirety();
    print!("{}", compartment_info(entirety, true, 4));

    let out = "phantom-disk-basic.png";
    render_label_raster_to_png(&phantom.array, out)?;
    println!("wrote {out}");

    Ok(())
}
