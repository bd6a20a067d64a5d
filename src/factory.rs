//! Factory.

use crate::buffer;
use crate::gl;
use crate::image;
use crate::shader;
use crate::texture;
use crate::util;
use crate::vertex_array;
use std::{cmp, ffi, mem, ptr};

use crate::draw_call::DrawCall;
use crate::error::{Error, Result};
use crate::framebuffer::{ClearColor, ClearDepth, ClearOp, Framebuffer};
use crate::pipeline::{PolygonMode, State, Viewport};
use crate::program::{
    self,
    Destroyed,
    Invocation,
    SamplerBinding,
    UniformBlockBinding,
    MAX_SAMPLERS,
    MAX_UNIFORM_BLOCKS,
};
use crate::queue::Queue;
use crate::{Buffer, Program, Sampler, Texture2, VertexArray};

/// OpenGL memory manager.
#[derive(Clone)]
pub struct Factory {
    /// Function pointers to the OpenGL backend.
    backend: gl::Backend,

    /// Destroyed buffers arrive here to be deleted.
    buffer_queue: Queue<buffer::Id>,

    /// Destroyed textures arrive here to be deleted.
    texture_queue: Queue<texture::Id>,

    /// Destroyed vertex arrays arrive here to be deleted.
    vertex_array_queue: Queue<vertex_array::Id>,

    /// Destroyed shader objects and GLSL programs arrive here to be deleted.
    program_queue: Queue<Destroyed>,
}

impl Factory {
    /// Constructor.
    pub fn new<F>(query_proc_address: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        Self {
            backend: gl::Backend::load(query_proc_address),
            buffer_queue: Queue::new(),
            texture_queue: Queue::new(),
            vertex_array_queue: Queue::new(),
            program_queue: Queue::new(),
        }
    }

    /// Returns the OpenGL version string of the current context.
    pub fn version(&self) -> String {
        self.backend.get_string(gl::VERSION)
    }

    /// Clear the color and/or depth buffers.
    pub fn clear(&self, framebuffer: &Framebuffer, op: ClearOp) {
        self.backend.bind_framebuffer(framebuffer.id());
        let mut ops = 0;
        match op.color {
            ClearColor::Yes { r, g, b, a } => {
                self.backend.clear_color(r, g, b, a);
                ops |= gl::COLOR_BUFFER_BIT;
            }
            ClearColor::No => {}
        }
        match op.depth {
            ClearDepth::Yes { z } => {
                self.backend.clear_depth(z);
                ops |= gl::DEPTH_BUFFER_BIT;
            }
            ClearDepth::No => {}
        }
        self.backend.clear(ops);
    }

    /// Delete every GL object whose last handle has been dropped.
    ///
    /// Call once per frame on the thread that owns the context.
    pub fn cleanup(&self) {
        let mut count = 0;
        for id in self.buffer_queue.drain() {
            self.backend.delete_buffer(id);
            count += 1;
        }
        for id in self.texture_queue.drain() {
            self.backend.delete_texture(id);
            count += 1;
        }
        for id in self.vertex_array_queue.drain() {
            self.backend.delete_vertex_array(id);
            count += 1;
        }
        for destroyed in self.program_queue.drain() {
            match destroyed {
                Destroyed::Object(id) => self.backend.delete_shader(id),
                Destroyed::Program(id) => self.backend.delete_program(id),
            }
            count += 1;
        }
        if count > 0 {
            debug!("deleted {} GL objects", count);
        }
    }

    /// (Re)-initialize the contents of a [`Buffer`].
    ///
    /// [`Buffer`]: buffer/struct.Buffer.html
    pub fn initialize_buffer<T>(&self, buffer: &Buffer, data: &[T]) {
        let target = buffer.kind().as_gl_enum();
        self.backend.bind_buffer(buffer.id(), target);
        self.backend.buffer_data(
            target,
            data.len() * mem::size_of::<T>(),
            data.as_ptr(),
            buffer.usage().as_gl_enum(),
        );
        self.backend.bind_buffer(0, target);
    }

    /// Overwrite part of a buffer.
    ///
    /// At most `slice.length()` bytes of `data` are written.
    pub fn overwrite_buffer<T>(&self, slice: buffer::Slice, data: &[T]) {
        let target = slice.kind().as_gl_enum();
        let length = cmp::min(slice.length(), data.len() * mem::size_of::<T>());
        self.backend.bind_buffer(slice.id(), target);
        self.backend.buffer_sub_data(target, slice.offset(), length, data.as_ptr());
        self.backend.bind_buffer(0, target);
    }

    /// Create an uninitialized GPU buffer.
    pub fn buffer(&self, kind: buffer::Kind, usage: buffer::Usage) -> Buffer {
        let id = self.backend.gen_buffer();
        let tx = self.buffer_queue.tx();
        debug!("created {:?} buffer {}", kind, id);
        Buffer::new(id, kind, usage, tx)
    }

    /// Records attribute bindings into a new vertex array.
    pub fn vertex_array(&self, attributes: vertex_array::Attributes) -> VertexArray {
        let id = self.backend.gen_vertex_array();
        let tx = self.vertex_array_queue.tx();

        self.backend.bind_vertex_array(id);
        for (location, attribute) in attributes.iter().enumerate() {
            let accessor = match *attribute {
                Some(ref accessor) => accessor,
                None => continue,
            };
            let format = accessor.format();
            self.backend.bind_buffer(accessor.buffer().id(), gl::ARRAY_BUFFER);
            self.backend.enable_vertex_attrib_array(location as u8);
            self.backend.vertex_attrib_pointer(
                location as u8,
                format.size() as _,
                format.gl_data_type(),
                false,
                accessor.stride() as _,
                accessor.offset(),
            );
        }
        self.backend.bind_vertex_array(0);
        self.backend.bind_buffer(0, gl::ARRAY_BUFFER);
        debug!("created vertex array {}", id);

        VertexArray::new(id, attributes, tx)
    }

    /// Compile GLSL shader code into a shader object.
    pub fn shader(
        &self,
        kind: shader::Kind,
        source: &shader::Source,
    ) -> Result<shader::Object> {
        let id = self.backend.create_shader(kind.as_gl_enum());
        self.backend.shader_source(id, source);
        let compiled = self.backend.compile_shader(id);
        let log = self.backend.shader_info_log(id);
        if !log.trim().is_empty() {
            debug!("{:?} shader {} log:\n{}", kind, id, log);
        }
        if !compiled {
            self.backend.delete_shader(id);
            return Err(Error::ShaderCompilation { kind, log });
        }
        info!("compiled {:?} shader {}", kind, id);
        let tx = self.program_queue.tx();
        Ok(shader::Object::new(id, kind, tx))
    }

    /// Link GLSL objects to create a GLSL program.
    ///
    /// Fails if linking fails or a binding marked `Required` is absent from
    /// the linked program.
    pub fn program(
        &self,
        vertex: &shader::Object,
        fragment: &shader::Object,
        bindings: &program::Bindings,
    ) -> Result<Program> {
        let id = self.backend.create_program();
        self.backend.attach_shader(id, vertex.id());
        self.backend.attach_shader(id, fragment.id());
        let linked = self.backend.link_program(id);
        self.backend.detach_shader(id, vertex.id());
        self.backend.detach_shader(id, fragment.id());
        if !linked {
            let log = self.backend.program_info_log(id);
            self.backend.delete_program(id);
            return Err(Error::ProgramLink { log });
        }
        info!("linked program {}", id);

        let tx = self.program_queue.tx();
        let mut program = Program::new(id, tx);
        for binding in 0 .. MAX_UNIFORM_BLOCKS {
            match bindings.uniform_blocks[binding] {
                UniformBlockBinding::Required(name) => {
                    let index = util::cstr(name)
                        .and_then(|cstr| self.query_uniform_block_index(&program, cstr))
                        .ok_or_else(|| missing_binding(name))?;
                    self.set_uniform_block_binding(
                        &program,
                        index,
                        binding as u32,
                    );
                }
                UniformBlockBinding::None => {}
            }
        }
        for binding in 0 .. MAX_SAMPLERS {
            match bindings.samplers[binding] {
                SamplerBinding::Required(name) => {
                    let location = util::cstr(name)
                        .and_then(|cstr| self.query_uniform_index(&program, cstr))
                        .ok_or_else(|| missing_binding(name))?;
                    program.samplers[binding] = Some(location);
                }
                SamplerBinding::None => {}
            }
        }
        Ok(program)
    }

    /// Sets the binding index for a named uniform block.
    pub fn set_uniform_block_binding(
        &self,
        program: &Program,
        index: u32,
        binding: u32,
    ) {
        self.backend.uniform_block_binding(program.id(), index, binding);
    }

    /// Retrieves the index of a named uniform block.
    pub fn query_uniform_block_index(
        &self,
        program: &Program,
        name: &ffi::CStr,
    ) -> Option<u32> {
        match self.backend.get_uniform_block_index(program.id(), name) {
            gl::INVALID_INDEX => None,
            x => Some(x),
        }
    }

    /// Retrieves the location of a named uniform.
    pub fn query_uniform_index(
        &self,
        program: &Program,
        name: &ffi::CStr,
    ) -> Option<u32> {
        match self.backend.get_uniform_location(program.id(), name) {
            -1 => None,
            x => Some(x as u32),
        }
    }

    /// Create a 2D texture backed by uninitialized GPU memory.
    pub fn texture2(
        &self,
        width: u32,
        height: u32,
        mipmap: bool,
        format: texture::Format,
    ) -> Texture2 {
        let id = self.backend.gen_texture();
        let tx = self.texture_queue.tx();
        self.backend.bind_texture(gl::TEXTURE_2D, id);
        self.backend.tex_image_2d(
            gl::TEXTURE_2D,
            format.as_gl_enum(),
            width,
            height,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            ptr::null(),
        );
        self.backend.bind_texture(gl::TEXTURE_2D, 0);
        debug!("created {}x{} {:?} texture {}", width, height, format, id);
        Texture2::new(id, width, height, mipmap, format, tx)
    }

    /// (Re)-initialize the contents of a [`Texture2`].
    ///
    /// `data` holds `texture.height()` rows of `texture.width()` pixels in
    /// `format`, first row first. Any other length is an
    /// `Error::InvalidPixelData` and nothing is uploaded.
    ///
    /// [`Texture2`]: texture/struct.Texture2.html
    pub fn write_texture2<F, T>(
        &self,
        texture: &Texture2,
        format: F,
        data: &[T],
    ) -> Result<()>
        where image::Format: From<F>
    {
        let format = image::Format::from(format);
        format.check_len(
            texture.width(),
            texture.height(),
            data.len() * mem::size_of::<T>(),
        )?;
        let (type_, order) = format.as_gl_enums();
        self.backend.bind_texture(gl::TEXTURE_2D, texture.id());
        self.backend.pixel_store(gl::UNPACK_ALIGNMENT, format.unpack_alignment());
        self.backend.tex_image_2d(
            gl::TEXTURE_2D,
            texture.format().as_gl_enum(),
            texture.width(),
            texture.height(),
            order,
            type_,
            data.as_ptr() as *const _,
        );
        if texture.mipmap() {
            self.backend.generate_mipmap(gl::TEXTURE_2D);
        }
        self.backend.bind_texture(gl::TEXTURE_2D, 0);
        Ok(())
    }

    /// Perform a draw call.
    pub fn draw(
        &self,
        framebuffer: &Framebuffer,
        state: &State,
        vertex_array: &VertexArray,
        draw_call: &DrawCall,
        invocation: &Invocation,
    ) {
        self.backend.bind_framebuffer(framebuffer.id());
        self.apply_state(framebuffer, state);
        self.backend.bind_vertex_array(vertex_array.id());
        self.backend.use_program(invocation.program.id());
        for (binding, buffer) in invocation.uniforms.iter().enumerate() {
            if let Some(buffer) = *buffer {
                self.backend.bind_buffer_base(gl::UNIFORM_BUFFER, binding as u32, buffer.id());
            }
        }
        for (unit, sampler) in invocation.samplers.iter().enumerate() {
            if let Some(sampler) = *sampler {
                self.bind_sampler(unit as u32, sampler);
                if let Some(location) = invocation.program.samplers[unit] {
                    self.backend.uniform_1i(location, unit as i32);
                }
            }
        }
        self.backend.draw_arrays(
            draw_call.primitive.as_gl_enum(),
            draw_call.offset,
            draw_call.count,
        );
        self.backend.use_program(0);
        self.backend.bind_vertex_array(0);
    }

    fn apply_state(&self, framebuffer: &Framebuffer, state: &State) {
        let (x, y, w, h) = match state.viewport {
            Viewport::Max => {
                let (w, h) = framebuffer.dimensions();
                (0, 0, w, h)
            }
            Viewport::Subset { x, y, w, h } => (x, y, w, h),
        };
        self.backend.viewport(x, y, w, h);

        match state.culling.as_gl_enum_if_enabled() {
            Some(face) => {
                self.backend.enable(gl::CULL_FACE);
                self.backend.cull_face(face);
                self.backend.front_face(state.front_face.as_gl_enum());
            }
            None => self.backend.disable(gl::CULL_FACE),
        }
        match state.depth_test.as_gl_enum_if_enabled() {
            Some(func) => {
                self.backend.enable(gl::DEPTH_TEST);
                self.backend.depth_func(func);
            }
            None => self.backend.disable(gl::DEPTH_TEST),
        }
        match state.blending.as_gl_enums_if_enabled() {
            Some((src, dst)) => {
                self.backend.enable(gl::BLEND);
                self.backend.blend_func(src, dst);
            }
            None => self.backend.disable(gl::BLEND),
        }

        self.backend.polygon_mode(gl::FRONT_AND_BACK, state.polygon_mode.as_gl_enum());
        match state.polygon_mode {
            PolygonMode::Point(size) => self.backend.point_size(size as f32),
            PolygonMode::Line(width) => self.backend.line_width(width as f32),
            PolygonMode::Fill => {}
        }
    }

    /// Binds the sampler's texture to texture unit `unit` and applies its
    /// filtering and wrapping.
    fn bind_sampler(&self, unit: u32, sampler: &Sampler) {
        let target = gl::TEXTURE_2D;
        let properties = &sampler.properties;
        self.backend.active_texture(unit);
        self.backend.bind_texture(target, sampler.texture.id());
        let parameters = [
            (gl::TEXTURE_MAG_FILTER, properties.mag_filter.as_gl_enum()),
            (gl::TEXTURE_MIN_FILTER, properties.min_filter.as_gl_enum()),
            (gl::TEXTURE_WRAP_S, properties.wrap_s.as_gl_enum()),
            (gl::TEXTURE_WRAP_T, properties.wrap_t.as_gl_enum()),
        ];
        for &(param, value) in &parameters {
            self.backend.tex_parameteri(target, param, value);
        }
    }
}

fn missing_binding(name: &[u8]) -> Error {
    let name = String::from_utf8_lossy(name)
        .trim_end_matches('\0')
        .to_owned();
    Error::MissingBinding { name }
}
