//! Texture plus sampling properties.

use crate::gl;
use crate::texture::Texture2;

/// Texture filtering mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Filter {
    /// Weighted average of the nearest texels.
    Linear,

    /// The single nearest texel, for hard edges such as checkerboards.
    Nearest,
}

impl Filter {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Filter::Linear => gl::LINEAR,
            Filter::Nearest => gl::NEAREST,
        }
    }
}

/// Texture co-ordinate wrapping mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Wrap {
    /// Repeat.
    Repeat,

    /// Co-ordinates outside `[0, 1]` sample the edge texel.
    ClampToEdge,
}

impl Wrap {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Wrap::Repeat => gl::REPEAT,
            Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Sampling properties for a 2D texture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sampler2 {
    /// Specifies the magnification filter.
    ///
    /// Default: `Linear`.
    pub mag_filter: Filter,

    /// Specifies the minification filter.
    ///
    /// Default: `Linear`.
    pub min_filter: Filter,

    /// Specifies the wrapping mode for the S axis.
    ///
    /// Default: `ClampToEdge`.
    pub wrap_s: Wrap,

    /// Specifies the wrapping mode for the T axis.
    ///
    /// Default: `ClampToEdge`.
    pub wrap_t: Wrap,
}

impl Sampler2 {
    /// Nearest filtering in both directions.
    pub fn nearest() -> Self {
        Self {
            mag_filter: Filter::Nearest,
            min_filter: Filter::Nearest,
            ..Default::default()
        }
    }
}

impl Default for Sampler2 {
    fn default() -> Self {
        Self {
            mag_filter: Filter::Linear,
            min_filter: Filter::Linear,
            wrap_s: Wrap::ClampToEdge,
            wrap_t: Wrap::ClampToEdge,
        }
    }
}

/// A texture bound together with the way it is sampled.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sampler {
    /// The sampled texture.
    pub texture: Texture2,

    /// Sampling properties applied at draw time.
    pub properties: Sampler2,
}

impl Sampler {
    /// Samples `texture` with the default properties.
    pub fn from_texture2(texture: Texture2) -> Self {
        Self::new(texture, Default::default())
    }

    /// Constructor.
    pub fn new(texture: Texture2, properties: Sampler2) -> Self {
        Self { texture, properties }
    }
}
