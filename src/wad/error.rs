//! Error types for WAD decoding and projection.

use thiserror::Error;

/// Result type for WAD operations
pub type Result<T> = std::result::Result<T, WadError>;

/// WAD error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WadError {
    /// A read would cross the bounds of its view
    #[error("read of {len} byte(s) at offset {offset} is out of bounds for a {view_len}-byte view")]
    OutOfRange {
        offset: isize,
        len: usize,
        view_len: usize,
    },

    /// A bounds error attributed to a named lump
    #[error("lump {name}: {source}")]
    Lump {
        name: String,
        #[source]
        source: Box<WadError>,
    },

    /// A linedef references a vertex outside the decoded vertex table
    #[error("level {level}: linedef {linedef} references vertex {index}, but {count} were decoded")]
    VertexIndexOutOfRange {
        level: String,
        linedef: usize,
        index: i16,
        count: usize,
    },
}

impl WadError {
    /// Attribute an error to the named lump it occurred in.
    pub(crate) fn in_lump(self, name: &str) -> Self {
        WadError::Lump {
            name: name.to_string(),
            source: Box::new(self),
        }
    }
}
