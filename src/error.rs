//! Error kinds.

use std::io;
use thiserror::Error;

use crate::shader;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An atlas must have at least one region per side, and its region
    /// count must fit in a `u32`.
    #[error("invalid atlas layout: {side_count} regions per side")]
    InvalidLayout {
        /// The rejected side count.
        side_count: u32,
    },

    /// A region index past the end of the atlas.
    #[error("region index {index} out of range for an atlas of {count} regions")]
    OutOfRange {
        /// The rejected index.
        index: u32,

        /// Number of regions in the atlas.
        count: u32,
    },

    /// A texture co-ordinate outside `[0, 1]`.
    #[error("texture co-ordinate ({u}, {v}) lies outside the atlas")]
    PointOutOfRange {
        /// Horizontal co-ordinate.
        u: f32,

        /// Vertical co-ordinate.
        v: f32,
    },

    /// Pixel data does not match the bitmap dimensions.
    #[error("bitmap expects {expected} bytes, got {actual}")]
    InvalidBitmap {
        /// `width * height`.
        expected: usize,

        /// Length of the supplied data.
        actual: usize,
    },

    /// Pixel data does not fill the texture it is written to.
    #[error("texture upload expects {expected} bytes, got {actual}")]
    InvalidPixelData {
        /// `width * height * pixel size`.
        expected: usize,

        /// Byte length of the supplied data.
        actual: usize,
    },

    /// GLSL compilation failed.
    #[error("{kind:?} shader failed to compile: {log}")]
    ShaderCompilation {
        /// Shader stage.
        kind: shader::Kind,

        /// The driver's info log.
        log: String,
    },

    /// GLSL program linking failed.
    #[error("program failed to link: {log}")]
    ProgramLink {
        /// The driver's info log.
        log: String,
    },

    /// A binding marked as required is absent from the linked program.
    #[error("program is missing required binding `{name}`")]
    MissingBinding {
        /// Name of the uniform block or sampler.
        name: String,
    },

    /// Reading a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
