use std::io;

use object_rs::ObjectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: cannot parse `{token}` as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: {source}")]
    InvalidVertex {
        line: usize,
        #[source]
        source: ObjectError,
    },

    #[error(transparent)]
    Object(#[from] ObjectError),
}
