use std::fmt;

/// Error produced by the vertex buffer generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The face color table did not contain exactly one entry per cube face.
    InvalidColorTable {
        /// Number of entries actually supplied.
        len: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidColorTable { len } => {
                write!(f, "invalid face color table: expected 6 entries, got {len}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
