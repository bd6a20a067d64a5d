//! Vertex array objects.

use crate::buffer;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

/// Number of attribute locations a vertex array may use.
pub const MAX_ATTRIBUTES: usize = 8;

/// The OpenGL VAO ID type.
pub(crate) type Id = u32;

/// Vertex attribute.
pub type Attribute = buffer::Accessor;

/// Vertex attributes indexed by shader location, i.e. the `N` of
/// `layout(location = N)`.
pub type Attributes = [Option<Attribute>; MAX_ATTRIBUTES];

struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(self.id);
    }
}

/// Attribute bindings recorded once and replayed by every draw.
///
/// Keeps its attribute buffers alive for as long as it lives.
#[derive(Clone)]
pub struct VertexArray {
    id: Id,
    attributes: Attributes,
    _destructor: sync::Arc<Destructor>,
}

impl VertexArray {
    pub(crate) fn new(
        id: Id,
        attributes: Attributes,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            attributes,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the accessor bound to `location`, if any.
    pub fn attribute(&self, location: u8) -> Option<&Attribute> {
        self.attributes
            .get(location as usize)
            .and_then(Option::as_ref)
    }
}

impl cmp::PartialEq for VertexArray {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for VertexArray {}

impl hash::Hash for VertexArray {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let locations: Vec<usize> = self.attributes
            .iter()
            .enumerate()
            .filter(|(_, attribute)| attribute.is_some())
            .map(|(location, _)| location)
            .collect();
        f.debug_struct("VertexArray")
            .field("id", &self.id)
            .field("locations", &locations)
            .finish()
    }
}
