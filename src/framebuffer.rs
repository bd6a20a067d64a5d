//! Render targets.

use std::{cmp, fmt, hash};

/// OpenGL framebuffer ID type.
pub(crate) type Id = u32;

/// Color buffer clear operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClearColor {
    /// Clear to the given color.
    Yes {
        /// Red.
        r: f32,

        /// Green.
        g: f32,

        /// Blue.
        b: f32,

        /// Alpha.
        a: f32,
    },

    /// Leave the color buffer untouched.
    No,
}

/// Depth buffer clear operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClearDepth {
    /// Clear to the given depth.
    Yes {
        /// Depth value.
        z: f64,
    },

    /// Leave the depth buffer untouched.
    No,
}

/// Which buffers to clear and to what.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearOp {
    /// Color buffer operation.
    pub color: ClearColor,

    /// Depth buffer operation.
    pub depth: ClearDepth,
}

impl ClearOp {
    /// Clears the color buffer to transparent black and leaves depth alone.
    pub const BLACK: ClearOp = ClearOp {
        color: ClearColor::Yes { r: 0.0, g: 0.0, b: 0.0, a: 0.0 },
        depth: ClearDepth::No,
    };
}

/// A framebuffer object.
pub struct Framebuffer {
    /// The OpenGL framebuffer ID.
    id: Id,

    /// Width and height in pixels.
    dimensions: (u32, u32),
}

impl Framebuffer {
    /// Returns the implicit framebuffer object, i.e. the window.
    pub(crate) fn implicit(dimensions: (u32, u32)) -> Self {
        Self { id: 0, dimensions }
    }

    /// Returns the OpenGL framebuffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Records a new size, e.g. after the window was resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dimensions = (width, height);
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Framebuffer {
            id: Id,
            dimensions: (u32, u32),
        }

        Framebuffer {
            id: self.id,
            dimensions: self.dimensions,
        }.fmt(f)
    }
}

impl cmp::PartialEq<Self> for Framebuffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Framebuffer {}

impl hash::Hash for Framebuffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
