// GL Backend
// The slice of WebGL2 that the shape scenes drive, behind a trait
// Responsibilities:
// - Name shader stages and primitive topologies without raw GLenums
// - Forward each call to web_sys::WebGl2RenderingContext
// - Let scenes run against a recording backend in tests

use std::fmt;

use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

use super::utils::Mat4;

#[cfg(test)]
pub mod recording;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => GL::VERTEX_SHADER,
            Self::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    TriangleStrip,
}

impl Topology {
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::TriangleStrip => GL::TRIANGLE_STRIP,
        }
    }
}

/// Rendering calls issued by the shader builder and the scenes.
///
/// Handles are opaque; a backend hands them out and only ever gets them back.
/// Every vertex buffer holds tightly packed `f32` values and is uploaded with
/// `STATIC_DRAW`.
pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;
    fn use_program(&self, program: &Self::Program);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    /// Uploads `data` into the buffer currently bound to `ARRAY_BUFFER`.
    fn array_buffer_data(&self, data: &[f32]);

    /// `None` when the attribute is not active in the linked program.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Points `index` at the bound `ARRAY_BUFFER`, `components` floats per vertex.
    fn float_attrib_pointer(&self, index: u32, components: i32);
    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, matrix: &Mat4);

    fn viewport(&self, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    /// Depth test on, passing fragments that are `LEQUAL`.
    fn enable_depth_test(&self);
    /// Clears both the color and the depth buffer.
    fn clear(&self);
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}

impl GlBackend for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        GL::create_shader(self, stage.gl_enum())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.get_program_info_log(program).unwrap_or_default()
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program));
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        // Float32Array::from copies out of wasm memory, so no view is kept alive
        let array = js_sys::Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn float_attrib_pointer(&self, index: u32, components: i32) {
        self.vertex_attrib_pointer_with_i32(index, components, GL::FLOAT, false, 0, 0);
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn uniform_matrix4(&self, location: Option<&WebGlUniformLocation>, matrix: &Mat4) {
        self.uniform_matrix4fv_with_f32_array(location, false, matrix);
    }

    fn viewport(&self, width: i32, height: i32) {
        GL::viewport(self, 0, 0, width, height);
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        GL::clear_color(self, rgba[0], rgba[1], rgba[2], rgba[3]);
    }

    fn enable_depth_test(&self) {
        self.enable(GL::DEPTH_TEST);
        self.depth_func(GL::LEQUAL);
    }

    fn clear(&self) {
        GL::clear(self, GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        GL::draw_arrays(self, topology.gl_enum(), first, count);
    }
}
