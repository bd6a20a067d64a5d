//! Linked GLSL programs and what they are drawn with.

use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

use crate::buffer::Buffer;
use crate::sampler::Sampler;

/// Number of uniform block binding points.
pub const MAX_UNIFORM_BLOCKS: usize = 4;

/// Number of texture units.
pub const MAX_SAMPLERS: usize = 4;

/// Names the program interface expects at each binding point.
///
/// Array index `i` of `uniform_blocks` is uniform buffer binding `i`, and
/// array index `i` of `samplers` is texture unit `i`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bindings {
    /// Uniform block names.
    pub uniform_blocks: [UniformBlockBinding; MAX_UNIFORM_BLOCKS],

    /// Sampler uniform names.
    pub samplers: [SamplerBinding; MAX_SAMPLERS],
}

/// A uniform block binding point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UniformBlockBinding {
    /// The named block must exist in the linked program, e.g.
    /// `Required(b"Region\0")`.
    Required(&'static [u8]),

    /// Unused.
    None,
}

impl Default for UniformBlockBinding {
    fn default() -> Self {
        UniformBlockBinding::None
    }
}

/// A texture unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SamplerBinding {
    /// The named `sampler2D` uniform must exist in the linked program, e.g.
    /// `Required(b"tex\0")`.
    Required(&'static [u8]),

    /// Unused.
    None,
}

impl Default for SamplerBinding {
    fn default() -> Self {
        SamplerBinding::None
    }
}

/// Shader objects and programs share one destruction queue.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Destroyed {
    Object(u32),
    Program(u32),
}

struct Destructor {
    id: u32,
    tx: queue::Sender<Destroyed>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(Destroyed::Program(self.id));
    }
}

/// A program together with the resources bound for one draw.
#[derive(Clone)]
pub struct Invocation<'a> {
    /// The program to use.
    pub program: &'a Program,

    /// Uniform buffers by binding point.
    pub uniforms: [Option<&'a Buffer>; MAX_UNIFORM_BLOCKS],

    /// Samplers by texture unit.
    pub samplers: [Option<&'a Sampler>; MAX_SAMPLERS],
}

impl<'a> Invocation<'a> {
    /// An invocation with nothing bound.
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            uniforms: [None; MAX_UNIFORM_BLOCKS],
            samplers: [None; MAX_SAMPLERS],
        }
    }
}

/// A successfully linked GLSL program.
#[derive(Clone)]
pub struct Program {
    id: u32,

    /// Uniform location of each required sampler, by texture unit.
    pub(crate) samplers: [Option<u32>; MAX_SAMPLERS],

    _destructor: sync::Arc<Destructor>,
}

impl Program {
    pub(crate) fn new(id: u32, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            samplers: [None; MAX_SAMPLERS],
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl cmp::PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Program {}

impl hash::Hash for Program {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Program").field(&self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;

    #[test]
    fn dropping_the_last_clone_queues_the_program() {
        let queue = Queue::new();
        let program = Program::new(7, queue.tx());
        let clone = program.clone();
        drop(program);
        assert_eq!(0, queue.drain().count());
        drop(clone);
        assert_eq!(vec![Destroyed::Program(7)], queue.drain().collect::<Vec<_>>());
    }
}
