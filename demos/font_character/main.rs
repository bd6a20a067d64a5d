//! One rasterized glyph drawn as a coverage texture.

#[macro_use]
extern crate log;

#[path = "../common/mod.rs"]
mod common;

use playground::config::FontConfig;
use playground::program::{Bindings, SamplerBinding};
use playground::sampler::Sampler2;
use playground::texture as tex;
use playground::{Bitmap, ClearOp, Config, DrawCall, Factory, Framebuffer, Invocation, Program, Sampler, State, VertexArray};
use std::fs;

use common::Input;
use glutin::GlContext;

const VERTEX_SHADER: &str = concat!(include_str!("shader.vert"), "\0");
const FRAGMENT_SHADER: &str = concat!(include_str!("shader.frag"), "\0");

/// Rasterizes `config.character` into a coverage bitmap.
fn rasterize(config: &FontConfig) -> Result<Bitmap, common::Error> {
    let bytes = fs::read(&config.path)?;
    let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())?;
    let (metrics, coverage) = font.rasterize(config.character, config.pixel_size);
    Ok(Bitmap::new(metrics.width as u32, metrics.height as u32, coverage)?)
}

/// Everything drawn each frame.
struct Scene {
    program: Program,
    vertex_array: VertexArray,
    sampler: Sampler,
    draw_call: DrawCall,
}

impl Scene {
    fn new(factory: &Factory, font: &FontConfig) -> Result<Self, common::Error> {
        let mut bindings = Bindings::default();
        bindings.samplers[0] = SamplerBinding::Required(b"tex\0");
        let program = common::program(factory, VERTEX_SHADER, FRAGMENT_SHADER, &bindings)?;
        let (vertex_array, draw_call) = common::quad(factory);

        let glyph = rasterize(font)?;
        debug!("glyph {:?} from {}: {}", font.character, font.path.display(), glyph);
        let texture = factory.texture2(glyph.width(), glyph.height(), false, tex::Format::R8);
        factory.write_texture2(&texture, glyph.format(), glyph.data())?;

        Ok(Self {
            program,
            vertex_array,
            sampler: Sampler::new(texture, Sampler2::nearest()),
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
    default.window.title = "Font Character".to_owned();
    let config = common::config(default)?;
    let font = config.font.clone().unwrap_or_default();

    let (mut events_loop, window) = common::open(&config.window)?;
    let (mut framebuffer, factory) = playground::init(&window);
    let scene = Scene::new(&factory, &font)?;

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
