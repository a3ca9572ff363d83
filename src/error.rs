// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the hyperlink engine.
//!
//! Model operations return [`GeometryError`]; the document codec returns
//! [`CodecError`], which wraps geometry failures found while rebuilding a
//! hyperlink from a file.

/// Failures raised by polygon, hyperlink and hyperlink-set operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid frame range: start frame {start} is after end frame {end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("vertex count mismatch: expected {expected} vertices, found {found}")]
    VertexCountMismatch { expected: usize, found: usize },

    #[error("vertex index {index} out of range for polygon with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no geometry for frame {0}")]
    MissingFrame(i32),

    #[error("geometry for frame {frame} lies outside range {start}..={end}")]
    FrameOutOfRange { frame: i32, start: i32, end: i32 },

    #[error("coordinate list has odd length {0}")]
    MalformedCoordinates(usize),

    #[error("a hyperlink named {0:?} already exists")]
    DuplicateName(String),
}

/// Failures raised while loading a hyperlink document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("hyperlink {name:?}: start frame {start} is after end frame {end}")]
    InvalidRange { name: String, start: i32, end: i32 },

    #[error("hyperlink {name:?}: no geometry stored for frame {frame}")]
    IncompleteGeometry { name: String, frame: i32 },

    #[error("hyperlink {name:?}: {source}")]
    Geometry {
        name: String,
        #[source]
        source: GeometryError,
    },
}

impl CodecError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_values() {
        let err = GeometryError::InvalidRange { start: 9, end: 3 };
        assert!(err.to_string().contains("start frame 9"));

        let err = GeometryError::VertexCountMismatch { expected: 4, found: 3 };
        assert!(err.to_string().contains("expected 4"));

        let err = CodecError::IncompleteGeometry {
            name: "doorway".to_string(),
            frame: 7,
        };
        assert!(err.to_string().contains("doorway"));
        assert!(err.to_string().contains("frame 7"));
    }

    #[test]
    fn test_geometry_source_is_preserved() {
        use std::error::Error as _;

        let err = CodecError::Geometry {
            name: "door".to_string(),
            source: GeometryError::VertexCountMismatch { expected: 3, found: 4 },
        };
        assert!(err.source().is_some());
        assert!(CodecError::malformed("x").to_string().starts_with("malformed document"));
    }
}
