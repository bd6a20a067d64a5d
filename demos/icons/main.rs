//! One icon of a sprite sheet at a time.
//!
//! Number keys pick an icon directly, Left and Right step through them.

#[macro_use]
extern crate log;

#[path = "../common/mod.rs"]
mod common;

use playground::buffer as buf;
use playground::atlas::{RowOrder, UvRect};
use playground::config::AtlasConfig;
use playground::image as img;
use playground::program::{Bindings, SamplerBinding, UniformBlockBinding};
use playground::texture as tex;
use playground::{
    Buffer,
    ClearOp,
    Config,
    DrawCall,
    Factory,
    Framebuffer,
    IconCursor,
    Invocation,
    Program,
    Sampler,
    State,
    VertexArray,
};
use std::mem;

use common::Input;
use glutin::GlContext;
use glutin::VirtualKeyCode as Key;

const VERTEX_SHADER: &str = concat!(include_str!("shader.vert"), "\0");
const FRAGMENT_SHADER: &str = concat!(include_str!("shader.frag"), "\0");

/// Size of the `Region` uniform block.
const REGION_SIZE: usize = mem::size_of::<[f32; 4]>();

/// Contents of the `Region` block: left edge, bottom edge of the picture,
/// right edge, top edge of the picture.
fn region_data(cursor: &IconCursor) -> [f32; 4] {
    let UvRect { u_min, v_min, u_max, v_max } = cursor.rect();
    match cursor.layout().row_order() {
        // Rows were uploaded top first, so the picture is upside down in v.
        RowOrder::TopDown => [u_min, v_max, u_max, v_min],
        RowOrder::BottomUp => [u_min, v_min, u_max, v_max],
    }
}

/// Everything drawn each frame, plus the current selection.
struct Scene {
    program: Program,
    vertex_array: VertexArray,
    sampler: Sampler,
    region: Buffer,
    cursor: IconCursor,
    draw_call: DrawCall,
}

impl Scene {
    fn new(factory: &Factory, atlas: &AtlasConfig) -> Result<Self, common::Error> {
        let mut bindings = Bindings::default();
        bindings.uniform_blocks[0] = UniformBlockBinding::Required(b"Region\0");
        bindings.samplers[0] = SamplerBinding::Required(b"tex\0");
        let program = common::program(factory, VERTEX_SHADER, FRAGMENT_SHADER, &bindings)?;
        let (vertex_array, draw_call) = common::quad(factory);

        let layout = atlas.layout()?;
        let cursor = IconCursor::new(layout, atlas.overflow);

        let picture = image::open(&atlas.path)?;
        let pixels = match layout.row_order() {
            RowOrder::TopDown => picture.to_rgba8(),
            RowOrder::BottomUp => picture.flipv().to_rgba8(),
        };
        let (width, height) = pixels.dimensions();
        info!(
            "loaded {}x{} atlas of {} icons from {}",
            width,
            height,
            layout.region_count(),
            atlas.path.display(),
        );
        let texture = factory.texture2(width, height, false, tex::Format::Rgba8);
        factory.write_texture2(&texture, img::U8::Rgba, pixels.as_raw().as_slice())?;

        let region = factory.buffer(buf::Kind::Uniform, buf::Usage::DynamicDraw);
        factory.initialize_buffer(&region, &[region_data(&cursor)]);

        Ok(Self {
            program,
            vertex_array,
            sampler: Sampler::from_texture2(texture),
            region,
            cursor,
            draw_call,
        })
    }

    /// Applies a key press, returning true if the selection changed.
    fn handle_key(&mut self, key: Key) -> bool {
        let before = self.cursor.index();
        match key {
            Key::Left => {
                self.cursor.prev();
            }
            Key::Right => {
                self.cursor.next();
            }
            _ => match common::digit(key) {
                Some(index) => {
                    if let Err(err) = self.cursor.select(index) {
                        warn!("ignored icon selection: {}", err);
                    }
                }
                None => {}
            },
        }
        self.cursor.index() != before
    }

    /// Writes the selected icon's texture rectangle to the uniform block.
    fn update_region(&self, factory: &Factory) {
        let rect = self.cursor.rect();
        debug!("icon {} at {:?}", self.cursor.index(), rect);
        factory.overwrite_buffer(self.region.slice(0, REGION_SIZE), &[region_data(&self.cursor)]);
    }

    fn draw(&self, factory: &Factory, framebuffer: &Framebuffer) {
        let mut invocation = Invocation::new(&self.program);
        invocation.uniforms[0] = Some(&self.region);
        invocation.samplers[0] = Some(&self.sampler);
        factory.clear(framebuffer, ClearOp::BLACK);
        factory.draw(framebuffer, &State::flat(), &self.vertex_array, &self.draw_call, &invocation);
    }
}

fn main() -> Result<(), common::Error> {
    env_logger::init();

    let mut default = Config::default();
    default.window.title = "Icons".to_owned();
    let config = common::config(default)?;
    let atlas = config.atlas.clone().unwrap_or_default();

    let (mut events_loop, window) = common::open(&config.window)?;
    let (mut framebuffer, factory) = playground::init(&window);
    let mut scene = Scene::new(&factory, &atlas)?;

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
                Input::Key(key) => {
                    if scene.handle_key(key) {
                        scene.update_region(&factory);
                    }
                }
            }
        }
        factory.cleanup();
    }
    Ok(())
}
