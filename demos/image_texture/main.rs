//! A PNG image on a quad.

#[macro_use]
extern crate log;

#[path = "../common/mod.rs"]
mod common;

use playground::image as img;
use playground::program::{Bindings, SamplerBinding};
use playground::texture as tex;
use playground::{ClearOp, Config, DrawCall, Factory, Framebuffer, Invocation, Program, Sampler, State, VertexArray};
use std::path;

use common::Input;
use glutin::GlContext;

const VERTEX_SHADER: &str = concat!(include_str!("shader.vert"), "\0");
const FRAGMENT_SHADER: &str = concat!(include_str!("shader.frag"), "\0");

const DEFAULT_IMAGE: &str = "image.png";

/// Everything drawn each frame.
struct Scene {
    program: Program,
    vertex_array: VertexArray,
    sampler: Sampler,
    draw_call: DrawCall,
}

impl Scene {
    fn new(factory: &Factory, path: &path::Path) -> Result<Self, common::Error> {
        let mut bindings = Bindings::default();
        bindings.samplers[0] = SamplerBinding::Required(b"tex\0");
        let program = common::program(factory, VERTEX_SHADER, FRAGMENT_SHADER, &bindings)?;
        let (vertex_array, draw_call) = common::quad(factory);

        // Texture coordinates put v = 1 at the top of the quad, so the first
        // uploaded row must be the bottom of the picture.
        let pixels = image::open(path)?.flipv().to_rgba8();
        let (width, height) = pixels.dimensions();
        info!("loaded {}x{} image from {}", width, height, path.display());
        let texture = factory.texture2(width, height, false, tex::Format::Rgba8);
        factory.write_texture2(&texture, img::U8::Rgba, pixels.as_raw().as_slice())?;

        Ok(Self {
            program,
            vertex_array,
            sampler: Sampler::from_texture2(texture),
            draw_call,
        })
    }

    fn draw(&self, factory: &Factory, framebuffer: &Framebuffer) {
        let mut invocation = Invocation::new(&self.program);
        invocation.samplers[0] = Some(&self.sampler);
        factory.clear(framebuffer, ClearOp::BLACK);
        factory.draw(framebuffer, &State::flat(), &self.vertex_array, &self.draw_call, &invocation);
    }
}

fn main() -> Result<(), common::Error> {
    env_logger::init();

    let mut default = Config::default();
    default.window.title = "Image texture".to_owned();
    let config = common::config(default)?;
    let path = config.image.clone().unwrap_or_else(|| DEFAULT_IMAGE.into());

    let (mut events_loop, window) = common::open(&config.window)?;
    let (mut framebuffer, factory) = playground::init(&window);
    let scene = Scene::new(&factory, &path)?;

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
