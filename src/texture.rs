//! GPU-visible pixel storage.

use crate::gl;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

/// OpenGL texture ID type.
pub(crate) type Id = u32;

/// How texels are stored on the GPU.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// One 8-bit channel, read back as red. Used for coverage masks such as
    /// the checkerboard.
    R8,

    /// 8-bit red, green, blue and alpha. Decoded PNGs and sprite sheets.
    Rgba8,
}

impl Format {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Format::R8 => gl::R8,
            Format::Rgba8 => gl::RGBA8,
        }
    }
}

struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(self.id);
    }
}

/// A 2D texture. Clones share the same GPU storage.
#[derive(Clone)]
pub struct Texture2 {
    id: Id,
    dimensions: (u32, u32),
    format: Format,

    /// Whether `Factory::write_texture2` regenerates mipmaps.
    mipmap: bool,

    _destructor: sync::Arc<Destructor>,
}

impl Texture2 {
    pub(crate) fn new(
        id: Id,
        width: u32,
        height: u32,
        mipmap: bool,
        format: Format,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            dimensions: (width, height),
            format,
            mipmap,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the storage format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the width in texels.
    pub fn width(&self) -> u32 {
        self.dimensions.0
    }

    /// Returns the height in texels.
    pub fn height(&self) -> u32 {
        self.dimensions.1
    }

    /// Returns `true` if mipmaps are generated on upload.
    pub fn mipmap(&self) -> bool {
        self.mipmap
    }
}

impl cmp::PartialEq for Texture2 {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Texture2 {}

impl hash::Hash for Texture2 {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Texture2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Texture2")
            .field("id", &self.id)
            .field("dimensions", &self.dimensions)
            .field("format", &self.format)
            .finish()
    }
}
