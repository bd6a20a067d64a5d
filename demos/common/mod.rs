//! Window and context setup shared by the demos.

#![allow(dead_code)]

use playground::config::{Config, WindowConfig};
use playground::buffer as buf;
use playground::draw_call::Primitive;
use playground::program::Bindings;
use playground::vertex_array::Attributes;
use playground::{shader, util, DrawCall, Factory, Program, VertexArray};
use std::{env, error, mem, ops};

use glutin::ElementState::Pressed;
use glutin::Event;
use glutin::GlContext;
use glutin::VirtualKeyCode as Key;
use glutin::WindowEvent;
use glutin::{Api, GlProfile, GlRequest};

/// Error type returned from the demo entry points.
pub type Error = Box<dyn error::Error>;

/// A window with a current OpenGL 3.3 core context.
pub struct Window(glutin::GlWindow);

impl playground::Context for Window {
    fn query_proc_address(&self, symbol: &str) -> *const () {
        self.0.get_proc_address(symbol)
    }

    fn dimensions(&self) -> (u32, u32) {
        self.0.get_inner_size().unwrap_or((0, 0))
    }
}

impl ops::Deref for Window {
    type Target = glutin::GlWindow;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

const POSITION: buf::Format = buf::Format::F32(2);
const TEX_COORD: buf::Format = buf::Format::F32(2);

/// A square centred on the origin: four positions followed by four texture
/// coordinates, drawn as a triangle fan.
const QUAD_DATA: &[[f32; 2]] = &[
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],

    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

/// Number of vertices in the quad.
const QUAD_VERTICES: usize = 4;

/// What the demo loop needs to react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// Window closed or Escape pressed.
    Quit,

    /// New drawable size in pixels.
    Resized(u32, u32),

    /// Any other key press.
    Key(Key),
}

/// Reads the configuration named by the first command line argument,
/// falling back to `default` when none is given.
pub fn config(default: Config) -> Result<Config, Error> {
    let path = env::args_os().nth(1);
    Ok(Config::load_or(path, default)?)
}

/// Opens a window and makes its context current.
pub fn open(config: &WindowConfig) -> Result<(glutin::EventsLoop, Window), Error> {
    let events_loop = glutin::EventsLoop::new();
    let window_builder = glutin::WindowBuilder::new()
        .with_title(config.title.clone())
        .with_dimensions(config.width, config.height);
    let context_builder = glutin::ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.vsync)
        .with_multisampling(config.multisampling);
    let window = glutin::GlWindow::new(window_builder, context_builder, &events_loop)?;
    unsafe { window.make_current()? }
    Ok((events_loop, Window(window)))
}

/// Collects the inputs received since the last call.
pub fn poll(events_loop: &mut glutin::EventsLoop) -> Vec<Input> {
    let mut inputs = Vec::new();
    events_loop.poll_events(|event| {
        if let Event::WindowEvent { event, .. } = event {
            match event {
                WindowEvent::Closed => inputs.push(Input::Quit),
                WindowEvent::Resized(w, h) => inputs.push(Input::Resized(w, h)),
                WindowEvent::KeyboardInput { input, .. } => {
                    match (input.virtual_keycode, input.state) {
                        (Some(Key::Escape), Pressed) => inputs.push(Input::Quit),
                        (Some(key), Pressed) => inputs.push(Input::Key(key)),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    });
    inputs
}

/// Compiles and links a vertex/fragment shader pair.
///
/// Both sources must end with a NUL byte.
pub fn program(
    factory: &Factory,
    vertex: &'static str,
    fragment: &'static str,
    bindings: &Bindings,
) -> Result<Program, Error> {
    let vertex = util::cstr(vertex).ok_or("vertex shader source is not NUL terminated")?;
    let fragment = util::cstr(fragment).ok_or("fragment shader source is not NUL terminated")?;
    let vertex = factory.shader(shader::Kind::Vertex, vertex)?;
    let fragment = factory.shader(shader::Kind::Fragment, fragment)?;
    Ok(factory.program(&vertex, &fragment, bindings)?)
}

/// Maps the number keys to the digit they show.
pub fn digit(key: Key) -> Option<u32> {
    let digit = match key {
        Key::Key0 | Key::Numpad0 => 0,
        Key::Key1 | Key::Numpad1 => 1,
        Key::Key2 | Key::Numpad2 => 2,
        Key::Key3 | Key::Numpad3 => 3,
        Key::Key4 | Key::Numpad4 => 4,
        Key::Key5 | Key::Numpad5 => 5,
        Key::Key6 | Key::Numpad6 => 6,
        Key::Key7 | Key::Numpad7 => 7,
        Key::Key8 | Key::Numpad8 => 8,
        Key::Key9 | Key::Numpad9 => 9,
        _ => return None,
    };
    Some(digit)
}

/// Uploads the textured quad, with positions at location 0 and texture
/// coordinates at location 1.
pub fn quad(factory: &Factory) -> (VertexArray, DrawCall) {
    let vbuf = factory.buffer(buf::Kind::Array, buf::Usage::StaticDraw);
    factory.initialize_buffer(&vbuf, QUAD_DATA);
    let tex_coords_offset = QUAD_VERTICES * mem::size_of::<[f32; 2]>();
    let mut attributes = Attributes::default();
    attributes[0] = Some(buf::Accessor::new(vbuf.clone(), POSITION, 0, 0));
    attributes[1] = Some(buf::Accessor::new(vbuf, TEX_COORD, tex_coords_offset, 0));
    let vertex_array = factory.vertex_array(attributes);
    (vertex_array, DrawCall::arrays(Primitive::TriangleFan, QUAD_VERTICES))
}
