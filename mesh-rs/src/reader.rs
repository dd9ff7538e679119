use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use geometry::{Real, Vector3D};
use log::info;
use object_rs::{FromVertices, MeshObject, ObjectError};

use crate::errors::MeshError;

/// Reads polygons, one vertex per line, groups separated by blank lines.
///
/// Runs of blank lines never produce empty polygons.
pub fn read_polygons<T, R>(reader: R) -> Result<Vec<Vec<Vector3D<T>>>, MeshError>
where
    T: Real + FromStr,
    R: BufRead,
{
    let mut polygons = Vec::new();
    let mut polygon = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            if !polygon.is_empty() {
                polygons.push(std::mem::take(&mut polygon));
            }
            continue;
        }
        polygon.push(parse_vertex(&line, idx + 1)?);
    }
    if !polygon.is_empty() {
        polygons.push(polygon);
    }

    Ok(polygons)
}

fn parse_vertex<T>(line: &str, line_number: usize) -> Result<Vector3D<T>, MeshError>
where
    T: Real + FromStr,
{
    let components = line
        .split_whitespace()
        .map(|token| {
            token.parse::<T>().map_err(|_| MeshError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    Vector3D::try_from(components).map_err(|e| MeshError::InvalidVertex {
        line: line_number,
        source: ObjectError::from(e),
    })
}

/// Reads polygons and builds an object of kind `O` with the matching vertex order.
pub fn read_object<O, T, R>(reader: R) -> Result<MeshObject<O>, MeshError>
where
    O: FromVertices<T>,
    T: Real + FromStr,
    R: BufRead,
{
    let polygons = read_polygons(reader)?;
    Ok(MeshObject::from_polygons(polygons)?)
}

pub fn read_path<O, T, P>(path: P) -> Result<MeshObject<O>, MeshError>
where
    O: FromVertices<T>,
    T: Real + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mesh = read_object(BufReader::new(File::open(path)?))?;
    info!(
        "Read mesh {} with {} polygons",
        path.display(),
        mesh.vertex_order().len()
    );
    Ok(mesh)
}
