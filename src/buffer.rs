//! GPU buffers and the views vertex arrays read them through.

use crate::gl;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

#[doc(inline)]
pub use self::format::Format;

/// OpenGL buffer ID type.
pub(crate) type Id = u32;

/// Binding target of a buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Vertex data. Corresponds to `GL_ARRAY_BUFFER`.
    Array,

    /// Uniform block data. Corresponds to `GL_UNIFORM_BUFFER`.
    Uniform,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Array => gl::ARRAY_BUFFER,
            Kind::Uniform => gl::UNIFORM_BUFFER,
        }
    }
}

/// How often the buffer contents are expected to change.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Usage {
    /// Written once at startup, e.g. quad vertices.
    StaticDraw,

    /// Rewritten on user input, e.g. the selected icon's region.
    DynamicDraw,
}

impl Usage {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Usage::StaticDraw => gl::STATIC_DRAW,
            Usage::DynamicDraw => gl::DYNAMIC_DRAW,
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

/// GPU memory owned through reference counting.
///
/// The OpenGL object is deleted by `Factory::cleanup` once every clone,
/// including those held by accessors, has been dropped.
#[derive(Clone)]
pub struct Buffer {
    id: Id,
    kind: Kind,
    usage: Usage,
    _destructor: sync::Arc<Destructor>,
}

impl Buffer {
    pub(crate) fn new(
        id: Id,
        kind: Kind,
        usage: Usage,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            kind,
            usage,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the binding target.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the usage hint.
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Returns `length` bytes starting `offset` bytes in.
    pub fn slice(&self, offset: usize, length: usize) -> Slice<'_> {
        Slice { buffer: self, offset, length }
    }
}

impl cmp::PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Buffer {}

impl hash::Hash for Buffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("usage", &self.usage)
            .finish()
    }
}

/// A byte range of a [`Buffer`], the target of partial writes.
///
/// [`Buffer`]: struct.Buffer.html
#[derive(Clone, Copy, Debug)]
pub struct Slice<'a> {
    buffer: &'a Buffer,
    offset: usize,
    length: usize,
}

impl<'a> Slice<'a> {
    pub(crate) fn id(&self) -> Id {
        self.buffer.id
    }

    /// Returns the binding target of the parent buffer.
    pub fn kind(&self) -> Kind {
        self.buffer.kind
    }

    /// Returns the byte offset into the parent buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Reads one vertex attribute out of a [`Buffer`].
///
/// [`Buffer`]: struct.Buffer.html
#[derive(Clone, Debug)]
pub struct Accessor {
    buffer: Buffer,
    format: Format,

    /// Bytes from the start of the buffer to the first element.
    offset: usize,

    /// Bytes from one element to the next; 0 means tightly packed.
    stride: usize,
}

impl Accessor {
    /// Constructor.
    pub fn new(
        buffer: Buffer,
        format: Format,
        offset: usize,
        stride: usize,
    ) -> Self {
        Self { buffer, format, offset, stride }
    }

    /// Returns the buffer read from.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Returns the element format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the byte offset of the first element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte stride.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

/// Vertex attribute formats.
pub mod format {
    use crate::gl;

    /// Component type and count of one vertex attribute.
    ///
    /// The payload is the number of components. OpenGL accepts 1 to 4 and
    /// reports anything else as `GL_INVALID_VALUE`.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Format {
        /// 32-bit floats, e.g. positions and texture co-ordinates.
        F32(u8),
    }

    impl Format {
        pub(crate) fn gl_data_type(self) -> u32 {
            match self {
                Format::F32(_) => gl::FLOAT,
            }
        }

        /// Returns the number of components.
        pub fn size(self) -> usize {
            match self {
                Format::F32(n) => n as usize,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn size_is_the_component_count() {
            assert_eq!(2, Format::F32(2).size());
            assert_eq!(4, Format::F32(4).size());
            assert_eq!(gl::FLOAT, Format::F32(3).gl_data_type());
        }
    }
}
