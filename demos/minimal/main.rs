//! A green triangle.

#[macro_use]
extern crate log;

#[path = "../common/mod.rs"]
mod common;

use playground::buffer as buf;
use playground::draw_call::Primitive;
use playground::program::Bindings;
use playground::vertex_array::Attributes;
use playground::{ClearOp, Config, DrawCall, Framebuffer, Invocation, Program, State, VertexArray};

use common::Input;
use glutin::GlContext;

const POSITION: buf::Format = buf::Format::F32(2);

const VERTEX_SHADER: &str = concat!(include_str!("shader.vert"), "\0");
const FRAGMENT_SHADER: &str = concat!(include_str!("shader.frag"), "\0");

const TRIANGLE_DATA: &[[f32; 2]] = &[
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.0, 0.5],
];

/// Everything drawn each frame.
struct Scene {
    program: Program,
    vertex_array: VertexArray,
    state: State,
    draw_call: DrawCall,
}

impl Scene {
    fn new(factory: &playground::Factory) -> Result<Self, common::Error> {
        let program = common::program(factory, VERTEX_SHADER, FRAGMENT_SHADER, &Bindings::default())?;

        let vbuf = factory.buffer(buf::Kind::Array, buf::Usage::StaticDraw);
        factory.initialize_buffer(&vbuf, TRIANGLE_DATA);
        let mut attributes = Attributes::default();
        attributes[0] = Some(buf::Accessor::new(vbuf, POSITION, 0, 0));
        let vertex_array = factory.vertex_array(attributes);

        Ok(Self {
            program,
            vertex_array,
            state: State::flat(),
            draw_call: DrawCall::arrays(Primitive::Triangles, TRIANGLE_DATA.len()),
        })
    }

    fn draw(&self, factory: &playground::Factory, framebuffer: &Framebuffer) {
        let invocation = Invocation::new(&self.program);
        factory.clear(framebuffer, ClearOp::BLACK);
        factory.draw(framebuffer, &self.state, &self.vertex_array, &self.draw_call, &invocation);
    }
}

fn main() -> Result<(), common::Error> {
    env_logger::init();

    let mut default = Config::default();
    default.window.title = "Minimal".to_owned();
    let config = common::config(default)?;

    let (mut events_loop, window) = common::open(&config.window)?;
    let (mut framebuffer, factory) = playground::init(&window);
    let scene = Scene::new(&factory)?;
    info!("drawing a triangle on {:?}", framebuffer);

    let mut running = true;
    while running {
        scene.draw(&factory, &framebuffer);
        window.swap_buffers()?;
        for input in common::poll(&mut events_loop) {
            match input {
                Input::Quit => running = false,
                Input::Resized(w, h) => {
                    window.resize(w, h);
                    framebuffer.resize(w, h);
                }
                Input::Key(_) => {}
            }
        }
        factory.cleanup();
    }
    Ok(())
}
