use std::path::{Path, PathBuf};
use std::{env, fs};

use log::info;
use mesh_rs::{read_path, write_path};
use object_rs::{MeshObject, MotionScript, SequencedObject};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../test-utils/test_data");

fn write_frame(
    mesh: &MeshObject<SequencedObject>,
    out_dir: &Path,
    frame: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    write_path(mesh, out_dir.join(format!("frame_{frame:05}.dat")))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("cuboid_flight"));
    fs::create_dir_all(&out_dir)?;

    let mut mesh: MeshObject<SequencedObject> = read_path(format!("{DATA_DIR}/cuboid.dat"))?;
    let script = MotionScript::<f64>::load(format!("{DATA_DIR}/flight.json"))?;
    script.schedule_on(mesh.object_mut());

    let mut frame = 0;
    write_frame(&mesh, &out_dir, frame)?;
    while mesh.object_mut().next_substep() {
        frame += 1;
        write_frame(&mesh, &out_dir, frame)?;
    }
    info!("Forward flight ended at {:?}", mesh.object().object().pose());

    while mesh.object_mut().previous_substep() {
        frame += 1;
        write_frame(&mesh, &out_dir, frame)?;
    }
    info!(
        "Backward flight ended at {:?}, {} frames written to {}",
        mesh.object().object().pose(),
        frame + 1,
        out_dir.display()
    );

    Ok(())
}
