//! Draw call dispatch.

use crate::gl;

/// How consecutive vertices are assembled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    /// Every three vertices form a triangle.
    Triangles,

    /// Triangles sharing the first vertex; four vertices make a quad.
    TriangleFan,

    /// Every two vertices form a line segment.
    Lines,
}

impl Primitive {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleFan => gl::TRIANGLE_FAN,
            Primitive::Lines => gl::LINES,
        }
    }
}

/// A run of consecutive vertices to draw.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DrawCall {
    /// First vertex.
    pub offset: usize,

    /// Number of vertices.
    pub count: usize,

    /// The primitive topology.
    pub primitive: Primitive,
}

impl DrawCall {
    /// Draws `count` vertices from the start of the vertex array.
    pub fn arrays(primitive: Primitive, count: usize) -> Self {
        Self {
            offset: 0,
            count,
            primitive,
        }
    }
}
