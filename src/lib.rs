//! OpenGL teaching playground.
//!
//! A thin, typed wrapper over OpenGL 3.3 core together with the
//! [`AtlasLayout`] arithmetic used to address icons packed into a square
//! sprite sheet.
//!
//! [`AtlasLayout`]: atlas/struct.AtlasLayout.html

#[macro_use]
extern crate log;

mod factory;
mod queue;
pub mod gl;

pub mod atlas;
pub mod bitmap;
pub mod buffer;
pub mod config;
pub mod cursor;
pub mod draw_call;
pub mod error;
pub mod framebuffer;
pub mod image;
pub mod program;
pub mod pipeline;
pub mod sampler;
pub mod shader;
pub mod texture;
pub mod util;
pub mod vertex_array;

/// A window system surface with a current OpenGL context.
pub trait Context {
    /// Returns the address of the named OpenGL function.
    fn query_proc_address(&self, symbol: &str) -> *const ();

    /// Returns the drawable width and height in pixels.
    fn dimensions(&self) -> (u32, u32);
}

/// Initialize the library, creating a default framebuffer to render to and
/// a factory to instantiate library objects.
///
/// The context must be current on the calling thread.
pub fn init<C: Context>(context: &C) -> (Framebuffer, Factory) {
    let factory = Factory::new(|symbol| context.query_proc_address(symbol));
    let framebuffer = Framebuffer::implicit(context.dimensions());
    info!("OpenGL {}", factory.version());
    (framebuffer, factory)
}

#[doc(inline)]
pub use atlas::{AtlasLayout, RowOrder, UvRect};

#[doc(inline)]
pub use bitmap::Bitmap;

#[doc(inline)]
pub use buffer::Accessor;

#[doc(inline)]
pub use buffer::Buffer;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use cursor::{IconCursor, Overflow};

#[doc(inline)]
pub use draw_call::DrawCall;

#[doc(inline)]
pub use draw_call::Primitive;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use factory::Factory;

#[doc(inline)]
pub use framebuffer::{ClearOp, Framebuffer};

#[doc(inline)]
pub use program::Invocation;

#[doc(inline)]
pub use program::Program;

#[doc(inline)]
pub use pipeline::State;

#[doc(inline)]
pub use sampler::Sampler;

#[doc(inline)]
pub use texture::Texture2;

#[doc(inline)]
pub use vertex_array::VertexArray;
