use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use object_rs::{MeshObject, Shape3D};

use crate::errors::MeshError;

/// Writes the current vertices of every polygon, one vertex per line, groups separated by a
/// blank line.
pub fn write_object<O, W>(mesh: &MeshObject<O>, mut out: W) -> Result<(), MeshError>
where
    O: Shape3D,
    O::Scalar: Display,
    W: Write,
{
    for (idx, polygon) in mesh.polygons().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        for vertex in polygon {
            writeln!(out, "{} {} {}", vertex.x(), vertex.y(), vertex.z())?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_path<O, P>(mesh: &MeshObject<O>, path: P) -> Result<(), MeshError>
where
    O: Shape3D,
    O::Scalar: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_object(mesh, BufWriter::new(File::create(path)?))?;
    info!(
        "Wrote mesh {} with {} polygons",
        path.display(),
        mesh.vertex_order().len()
    );
    Ok(())
}
