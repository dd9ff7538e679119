//! # Crate mesh-rs
//!
//! Line-oriented text format for polygon meshes, compatible with gnuplot `splot` data files.
//!
//! Each non-blank line holds the whitespace-separated coordinates of one vertex. Blank lines
//! separate polygons. The reader deduplicates vertices into a [`object_rs::MeshObject`]; the
//! writer emits the object's *current* vertices in polygon order.
//!
//! ```rust
//! use mesh_rs::{read_object, write_object};
//! use object_rs::DynamicObject;
//!
//! let data = "0 0 0\n1 0 0\n0 1 0\n\n0 0 0\n0 0 1\n1 0 0\n";
//! let mut mesh = read_object::<DynamicObject, f64, _>(data.as_bytes()).unwrap();
//! assert_eq!(mesh.object().vertices().len(), 4);
//!
//! mesh.object_mut().translate_absolute(&geometry::Vector3D::xyz(1.0, 0.0, 0.0));
//! let mut out = Vec::new();
//! write_object(&mesh, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("1 0 0\n2 0 0\n"));
//! ```

pub mod errors;
pub mod reader;
pub mod writer;

#[doc(inline)]
pub use errors::MeshError;
#[doc(inline)]
pub use reader::{read_object, read_path, read_polygons};
#[doc(inline)]
pub use writer::{write_object, write_path};
