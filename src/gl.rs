use std::{ffi, os, ptr, rc};

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

/// Reference-counted OpenGL function table with call tracing.
#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Constructor.
    pub fn load<F>(mut func: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        let gl = rc::Rc::new(Gl::load_with(|sym| func(sym) as *const _));
        Backend { gl }
    }

    // Error checking

    /// Corresponds to `glGetError` plus an error check.
    pub fn check_error(&self) {
        let error = unsafe { self.gl.GetError() };
        if error != 0 {
            error!(target: "gl", "0x{:x}", error);
        }
    }

    /// Corresponds to `glGetString`.
    pub fn get_string(&self, name: u32) -> String {
        trace!(target: "gl", "glGetString{:?}", (name,));
        let string = unsafe {
            let ptr = self.gl.GetString(name);
            if ptr.is_null() {
                String::new()
            } else {
                ffi::CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
            }
        };
        self.check_error();
        string
    }

    // Pipeline state operations

    /// Corresponds to `glClear`.
    pub fn clear(&self, ops: u32) {
        trace!(target: "gl", "glClear{:?}", (ops,));
        unsafe {
            self.gl.Clear(ops);
        }
        self.check_error();
    }

    /// Corresponds to `glClearColor`.
    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        trace!(target: "gl", "glClearColor{:?}", (r, g, b, a));
        unsafe {
            self.gl.ClearColor(r, g, b, a);
        }
        self.check_error();
    }

    /// Corresponds to `glClearDepth`.
    pub fn clear_depth(&self, z: f64) {
        trace!(target: "gl", "glClearDepth{:?}", (z,));
        unsafe {
            self.gl.ClearDepth(z);
        }
        self.check_error();
    }

    /// Corresponds to `glEnable`.
    pub fn enable(&self, state: u32) {
        trace!(target: "gl", "glEnable{:?}", (state,));
        unsafe {
            self.gl.Enable(state);
        }
        self.check_error();
    }

    /// Corresponds to `glDisable`.
    pub fn disable(&self, state: u32) {
        trace!(target: "gl", "glDisable{:?}", (state,));
        unsafe {
            self.gl.Disable(state);
        }
        self.check_error();
    }

    /// Corresponds to `glCullFace`.
    pub fn cull_face(&self, opt: u32) {
        trace!(target: "gl", "glCullFace{:?}", (opt,));
        unsafe {
            self.gl.CullFace(opt);
        }
        self.check_error();
    }

    /// Corresponds to `glFrontFace`.
    pub fn front_face(&self, opt: u32) {
        trace!(target: "gl", "glFrontFace{:?}", (opt,));
        unsafe {
            self.gl.FrontFace(opt);
        }
        self.check_error();
    }

    /// Corresponds to `glDepthFunc`.
    pub fn depth_func(&self, opt: u32) {
        trace!(target: "gl", "glDepthFunc{:?}", (opt,));
        unsafe {
            self.gl.DepthFunc(opt);
        }
        self.check_error();
    }

    /// Corresponds to `glBlendFunc`.
    pub fn blend_func(&self, src: u32, dst: u32) {
        trace!(target: "gl", "glBlendFunc{:?}", (src, dst));
        unsafe {
            self.gl.BlendFunc(src, dst);
        }
        self.check_error();
    }

    /// Corresponds to `glPolygonMode`.
    pub fn polygon_mode(&self, face: u32, mode: u32) {
        trace!(target: "gl", "glPolygonMode{:?}", (face, mode));
        unsafe {
            self.gl.PolygonMode(face, mode);
        }
        self.check_error();
    }

    /// Corresponds to `glLineWidth`.
    pub fn line_width(&self, width: f32) {
        trace!(target: "gl", "glLineWidth{:?}", (width,));
        unsafe {
            self.gl.LineWidth(width);
        }
        self.check_error();
    }

    /// Corresponds to `glPointSize`.
    pub fn point_size(&self, size: f32) {
        trace!(target: "gl", "glPointSize{:?}", (size,));
        unsafe {
            self.gl.PointSize(size);
        }
        self.check_error();
    }

    /// Corresponds to `glViewport`.
    pub fn viewport(&self, x: u32, y: u32, w: u32, h: u32) {
        trace!(target: "gl", "glViewport{:?}", (x, y, w, h));
        unsafe {
            self.gl.Viewport(x as _, y as _, w as _, h as _);
        }
        self.check_error();
    }

    /// Corresponds to `glPixelStorei`.
    pub fn pixel_store(&self, param: u32, value: i32) {
        trace!(target: "gl", "glPixelStorei{:?}", (param, value));
        unsafe {
            self.gl.PixelStorei(param, value);
        }
        self.check_error();
    }

    // Buffer operations

    /// Corresponds to `glGenBuffer`.
    pub fn gen_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenBuffers(1) ");
            self.gl.GenBuffers(1, &mut id as *mut _)
        };
        trace!(target: "gl", " => {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteBuffers`.
    pub fn delete_buffer(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteBuffers{:?}", (1, id));
            self.gl.DeleteBuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindBuffer`.
    pub fn bind_buffer(&self, id: u32, ty: u32) {
        unsafe {
            trace!(target: "gl", "glBindBuffer{:?}", (ty, id));
            self.gl.BindBuffer(ty, id);
        }
        self.check_error();
    }

    /// Corresponds to `glBufferData`.
    pub fn buffer_data<T>(&self, ty: u32, len: usize, ptr: *const T, usage: u32) {
        unsafe {
            trace!(target: "gl", "glBufferData{:?}", (ty, len, ptr, usage));
            self.gl.BufferData(ty, len as _, ptr as *const _, usage);
        }
        self.check_error();
    }

    /// Corresponds to `glBufferSubData`.
    pub fn buffer_sub_data<T>(&self, ty: u32, off: usize, len: usize, ptr: *const T) {
        unsafe {
            trace!(target: "gl", "glBufferSubData{:?}", (ty, off, len, ptr));
            self.gl.BufferSubData(ty, off as _, len as _, ptr as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindBufferBase`.
    pub fn bind_buffer_base(&self, target: u32, binding: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindBufferBase{:?}", (target, binding, id));
            self.gl.BindBufferBase(target, binding, id);
        }
        self.check_error();
    }

    // Vertex array operations

    /// Corresponds to `glGenVertexArrays`.
    pub fn gen_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenVertexArrays(1) ");
            self.gl.GenVertexArrays(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteVertexArrays`.
    pub fn delete_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteVertexArrays{:?}", (1, id));
            self.gl.DeleteVertexArrays(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindVertexArray`.
    pub fn bind_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindVertexArray{:?}", (id,));
            self.gl.BindVertexArray(id);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexAttribPointer`.
    pub fn vertex_attrib_pointer(&self, id: u8, sz: i32, ty: u32, norm: bool, stride: i32, off: usize) {
        unsafe {
            trace!(target: "gl", "glVertexAttribPointer{:?}", (id, sz, ty, norm, stride, off));
            self.gl.VertexAttribPointer(id as _, sz, ty, norm as _, stride, off as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glEnableVertexAttribArray`.
    pub fn enable_vertex_attrib_array(&self, idx: u8) {
        unsafe {
            trace!(target: "gl", "glEnableVertexAttribArray{:?}", (idx,));
            self.gl.EnableVertexAttribArray(idx as _);
        }
        self.check_error();
    }

    // Framebuffer operations

    /// Corresponds to `glBindFramebuffer(GL_FRAMEBUFFER, id)`.
    pub fn bind_framebuffer(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindFramebuffer{:?}", (FRAMEBUFFER, id));
            self.gl.BindFramebuffer(FRAMEBUFFER, id);
        }
        self.check_error();
    }

    // Program operations

    /// Corresponds to `glCreateShader`.
    pub fn create_shader(&self, ty: u32) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateShader{:?} ", (ty,));
            self.gl.CreateShader(ty)
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteShader`.
    pub fn delete_shader(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteShader{:?}", (id,));
            self.gl.DeleteShader(id);
        }
        self.check_error();
    }

    /// Corresponds to `glShaderSource`.
    pub fn shader_source(&self, id: u32, source: &ffi::CStr) {
        unsafe {
            trace!(target: "gl", "glShaderSource{:?}", (id, source));
            let ptr = source.as_ptr();
            self.gl.ShaderSource(id, 1, &ptr as *const _, ptr::null());
        }
        self.check_error();
    }

    /// Corresponds to `glCompileShader` followed by a status query.
    ///
    /// Returns `true` if compilation succeeded.
    pub fn compile_shader(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glCompileShader{:?}", (id,));
            self.gl.CompileShader(id);
            self.check_error();
            trace!(target: "gl", "glGetShaderiv{:?} ", (id, COMPILE_STATUS));
            self.gl.GetShaderiv(id, COMPILE_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    /// Corresponds to `glGetShaderInfoLog`.
    pub fn shader_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        unsafe {
            trace!(target: "gl", "glGetShaderiv{:?}", (id, INFO_LOG_LENGTH));
            self.gl.GetShaderiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.check_error();
        let mut buf = vec![0u8; len.max(1) as usize];
        let mut written = 0i32;
        unsafe {
            trace!(target: "gl", "glGetShaderInfoLog{:?}", (id, len));
            self.gl.GetShaderInfoLog(id, buf.len() as _, &mut written as *mut _, buf.as_mut_ptr() as *mut _);
        }
        self.check_error();
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Corresponds to `glCreateProgram`.
    pub fn create_program(&self) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateProgram() ");
            self.gl.CreateProgram()
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteProgram`.
    pub fn delete_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteProgram{:?}", (id,));
            self.gl.DeleteProgram(id);
        }
        self.check_error();
    }

    /// Corresponds to `glAttachShader`.
    pub fn attach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glAttachShader{:?}", (program, shader));
            self.gl.AttachShader(program, shader);
        }
        self.check_error();
    }

    /// Corresponds to `glDetachShader`.
    pub fn detach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glDetachShader{:?}", (program, shader));
            self.gl.DetachShader(program, shader);
        }
        self.check_error();
    }

    /// Corresponds to `glLinkProgram` followed by a status query.
    ///
    /// Returns `true` if linking succeeded.
    pub fn link_program(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glLinkProgram{:?}", (id,));
            self.gl.LinkProgram(id);
            self.check_error();
            trace!(target: "gl", "glGetProgramiv{:?} ", (id, LINK_STATUS));
            self.gl.GetProgramiv(id, LINK_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    /// Corresponds to `glGetProgramInfoLog`.
    pub fn program_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        unsafe {
            trace!(target: "gl", "glGetProgramiv{:?}", (id, INFO_LOG_LENGTH));
            self.gl.GetProgramiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.check_error();
        let mut buf = vec![0u8; len.max(1) as usize];
        let mut written = 0i32;
        unsafe {
            trace!(target: "gl", "glGetProgramInfoLog{:?}", (id, len));
            self.gl.GetProgramInfoLog(id, buf.len() as _, &mut written as *mut _, buf.as_mut_ptr() as *mut _);
        }
        self.check_error();
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Corresponds to `glGetUniformBlockIndex`.
    pub fn get_uniform_block_index(
        &self,
        id: u32,
        name: &ffi::CStr,
    ) -> u32 {
        let index;
        unsafe {
            trace!(target: "gl", "glGetUniformBlockIndex{:?} ", (id, name));
            index = self.gl.GetUniformBlockIndex(id, name.as_ptr() as _);
            trace!(target: "gl", "=> {}", index);
        }
        self.check_error();
        index
    }

    /// Corresponds to `glUniformBlockBinding`.
    pub fn uniform_block_binding(
        &self,
        program: u32,
        index: u32,
        binding: u32,
    ) {
        trace!(target: "gl", "glUniformBlockBinding{:?} ", (program, index, binding));
        unsafe {
            self.gl.UniformBlockBinding(program, index, binding);
        }
        self.check_error();
    }

    /// Corresponds to `glGetUniformLocation`.
    pub fn get_uniform_location(
        &self,
        id: u32,
        name: &ffi::CStr,
    ) -> i32 {
        let index;
        unsafe {
            trace!(target: "gl", "glGetUniformLocation{:?} ", (id, name));
            index = self.gl.GetUniformLocation(id, name.as_ptr() as _);
            trace!(target: "gl", "=> {}", index);
        }
        self.check_error();
        index
    }

    /// Corresponds to `glUniform1i`.
    pub fn uniform_1i(&self, location: u32, value: i32) {
        unsafe {
            trace!(target: "gl", "glUniform1i{:?}", (location, value));
            self.gl.Uniform1i(location as _, value);
        }
        self.check_error();
    }

    /// Corresponds to `glUseProgram`.
    pub fn use_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glUseProgram{:?}", (id,));
            self.gl.UseProgram(id);
        }
        self.check_error();
    }

    // Texture operations

    /// Corresponds to `glGenTextures`.
    pub fn gen_texture(&self) -> u32 {
        let mut id = INVALID_INDEX;
        unsafe {
            trace!(target: "gl", "glGenTextures(1) ");
            self.gl.GenTextures(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteTextures`.
    pub fn delete_texture(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteTextures{:?}", (1, id));
            self.gl.DeleteTextures(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindTexture`.
    pub fn bind_texture(&self, ty: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindTexture{:?}", (ty, id));
            self.gl.BindTexture(ty, id);
        }
        self.check_error();
    }

    /// Corresponds to `glActiveTexture(GL_TEXTURE0 + index)`.
    pub fn active_texture(&self, index: u32) {
        unsafe {
            trace!(target: "gl", "glActiveTexture{:?}", (index,));
            self.gl.ActiveTexture(TEXTURE0 + index);
        }
        self.check_error();
    }

    /// Corresponds to `glTexParameteri`.
    pub fn tex_parameteri(&self, ty: u32, param: u32, value: u32) {
        unsafe {
            trace!(target: "gl", "glTexParameteri{:?}", (ty, param, value));
            self.gl.TexParameteri(ty, param, value as i32);
        }
        self.check_error();
    }

    /// Corresponds to `glTexImage2D`.
    pub fn tex_image_2d(
        &self,
        target: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        format: u32,
        ty: u32,
        data: *const os::raw::c_void,
    ) {
        unsafe {
            trace!(target: "gl",
                "glTexImage2D{:?}",
                (
                    target,
                    0,
                    internal_format,
                    width,
                    height,
                    0,
                    format,
                    ty,
                    data,
                ),
            );
            self.gl.TexImage2D(
                target,
                0,
                internal_format as _,
                width as _,
                height as _,
                0,
                format,
                ty,
                data,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glGenerateMipmap`.
    pub fn generate_mipmap(&self, target: u32) {
        unsafe {
            trace!(target: "gl", "glGenerateMipmap{:?}", (target,));
            self.gl.GenerateMipmap(target);
        }
        self.check_error();
    }

    // Draw call operations

    /// Corresponds to `glDrawArrays`.
    pub fn draw_arrays(&self, mode: u32, offset: usize, count: usize) {
        unsafe {
            trace!(target: "gl", "glDrawArrays{:?}", (mode, offset, count));
            self.gl.DrawArrays(mode, offset as _, count as _);
        }
        self.check_error();
    }
}
