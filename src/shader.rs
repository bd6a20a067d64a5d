//! GLSL shader objects.

use crate::gl;
use crate::program::Destroyed;
use crate::queue;
use std::{ffi, fmt, ops, sync};

/// GLSL source code, NUL terminated.
pub type Source = ffi::CStr;

/// Shader pipeline stage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Corresponds to `GL_VERTEX_SHADER`.
    Vertex,

    /// Corresponds to `GL_FRAGMENT_SHADER`.
    Fragment,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Vertex => gl::VERTEX_SHADER,
            Kind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

/// Pushes the shader ID onto the factory program queue when destroyed.
struct Destructor {
    id: u32,
    tx: queue::Sender<Destroyed>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(Destroyed::Object(self.id));
    }
}

/// A compiled shader object, ready to be linked into a program.
#[derive(Clone)]
pub struct Object {
    /// The OpenGL shader ID.
    id: u32,

    /// Pipeline stage.
    kind: Kind,

    /// Returns the object back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Object {
    /// Constructor.
    pub(crate) fn new(id: u32, kind: Kind, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            kind,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    /// Returns the OpenGL shader ID.
    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Returns the pipeline stage.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Object {
            id: u32,
            kind: Kind,
        }

        Object { id: self.id, kind: self.kind }.fmt(f)
    }
}
