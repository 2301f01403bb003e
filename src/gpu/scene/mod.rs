// Scene Builder
// Turns fixed vertex/color arrays and a pair of matrices into one drawable scene
// Responsibilities:
// - Prepare the surface and link the shared shader program
// - Upload position and color buffers and bind their attributes
// - Look up the transform uniforms
// - Issue the single draw call

use log::{debug, info, warn};

use super::backend::{GlBackend, Topology};
use super::error::{GlError, Result};
use super::pipeline::init_shader_program;
use super::shaders::{
    COLOR_ATTRIBUTE, FRAGMENT_SHADER, MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE, PROJECTION_UNIFORM,
    VERTEX_SHADER,
};
use super::utils::{IDENTITY, Mat4, prepare_surface};

#[derive(Debug, Clone, PartialEq)]
struct VertexData {
    values: Vec<f32>,
    components: i32,
}

impl VertexData {
    fn vertex_count(&self, attribute: &'static str) -> Result<usize> {
        let per_vertex = match usize::try_from(self.components) {
            Ok(n @ 1..=4) => n,
            _ => {
                return Err(GlError::InvalidComponents {
                    attribute,
                    components: self.components,
                });
            }
        };
        if self.values.len() % per_vertex != 0 {
            return Err(GlError::RaggedVertexData {
                attribute,
                len: self.values.len(),
                components: self.components,
            });
        }
        Ok(self.values.len() / per_vertex)
    }
}

/// Collects everything a single-draw scene needs.
///
/// Defaults: triangle strip, identity transforms, opaque black clear color.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    label: &'static str,
    positions: Option<VertexData>,
    colors: Option<VertexData>,
    topology: Topology,
    projection: Mat4,
    model_view: Mat4,
    clear_color: [f32; 4],
}

impl SceneBuilder {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            positions: None,
            colors: None,
            topology: Topology::TriangleStrip,
            projection: IDENTITY,
            model_view: IDENTITY,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn positions(mut self, values: impl Into<Vec<f32>>, components: i32) -> Self {
        self.positions = Some(VertexData {
            values: values.into(),
            components,
        });
        self
    }

    pub fn colors(mut self, values: impl Into<Vec<f32>>, components: i32) -> Self {
        self.colors = Some(VertexData {
            values: values.into(),
            components,
        });
        self
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn projection(mut self, projection: Mat4) -> Self {
        self.projection = projection;
        self
    }

    pub fn model_view(mut self, model_view: Mat4) -> Self {
        self.model_view = model_view;
        self
    }

    pub fn clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Validates the vertex data, then sets up every GL object the scene owns.
    ///
    /// Vertex data is checked before any GL call, so a malformed scene leaves
    /// the surface untouched.
    pub fn build<G: GlBackend>(self, gl: &G, width: u32, height: u32) -> Result<Scene<G>> {
        let positions = self
            .positions
            .ok_or(GlError::MissingVertexData(POSITION_ATTRIBUTE))?;
        let colors = self.colors.ok_or(GlError::MissingVertexData(COLOR_ATTRIBUTE))?;

        let position_count = positions.vertex_count(POSITION_ATTRIBUTE)?;
        let color_count = colors.vertex_count(COLOR_ATTRIBUTE)?;
        if position_count != color_count {
            return Err(GlError::VertexCountMismatch {
                positions: position_count,
                colors: color_count,
            });
        }
        let vertex_count = i32::try_from(position_count).unwrap_or(i32::MAX);

        prepare_surface(gl, width, height, self.clear_color);

        let program = init_shader_program(gl, VERTEX_SHADER, FRAGMENT_SHADER)
            .ok_or(GlError::ProgramUnavailable(self.label))?;

        let position = upload_attribute(gl, &program, POSITION_ATTRIBUTE, &positions)?;
        let color = upload_attribute(gl, &program, COLOR_ATTRIBUTE, &colors)?;

        let projection_location = uniform(gl, &program, PROJECTION_UNIFORM);
        let model_view_location = uniform(gl, &program, MODEL_VIEW_UNIFORM);

        gl.use_program(&program);
        debug!("{}: {vertex_count} vertices ready", self.label);

        Ok(Scene {
            label: self.label,
            position,
            color,
            projection_location,
            model_view_location,
            projection: self.projection,
            model_view: self.model_view,
            topology: self.topology,
            vertex_count,
        })
    }
}

struct BoundAttribute<G: GlBackend> {
    buffer: G::Buffer,
    index: u32,
    components: i32,
}

impl<G: GlBackend> BoundAttribute<G> {
    fn rebind(&self, gl: &G) {
        gl.bind_array_buffer(&self.buffer);
        gl.float_attrib_pointer(self.index, self.components);
    }
}

fn upload_attribute<G: GlBackend>(
    gl: &G,
    program: &G::Program,
    name: &'static str,
    data: &VertexData,
) -> Result<BoundAttribute<G>> {
    let buffer = gl.create_buffer().ok_or(GlError::BufferUnavailable(name))?;
    gl.bind_array_buffer(&buffer);
    gl.array_buffer_data(&data.values);

    let index = gl
        .attrib_location(program, name)
        .ok_or(GlError::MissingAttribute(name))?;
    gl.enable_vertex_attrib_array(index);
    gl.float_attrib_pointer(index, data.components);

    Ok(BoundAttribute {
        buffer,
        index,
        components: data.components,
    })
}

fn uniform<G: GlBackend>(gl: &G, program: &G::Program, name: &str) -> Option<G::UniformLocation> {
    let location = gl.uniform_location(program, name);
    if location.is_none() {
        // GL silently ignores uploads to a missing location
        warn!("uniform `{name}` is not active; its matrix will be ignored");
    }
    location
}

/// Uploaded buffers and uniform locations of a linked program, ready to draw.
pub struct Scene<G: GlBackend> {
    label: &'static str,
    position: BoundAttribute<G>,
    color: BoundAttribute<G>,
    projection_location: Option<G::UniformLocation>,
    model_view_location: Option<G::UniformLocation>,
    projection: Mat4,
    model_view: Mat4,
    topology: Topology,
    vertex_count: i32,
}

impl<G: GlBackend> Scene<G> {
    /// Clears the surface and draws every vertex with the scene's transforms.
    pub fn draw(&self, gl: &G) {
        gl.clear();
        self.position.rebind(gl);
        self.color.rebind(gl);
        gl.uniform_matrix4(self.projection_location.as_ref(), &self.projection);
        gl.uniform_matrix4(self.model_view_location.as_ref(), &self.model_view);
        gl.draw_arrays(self.topology, 0, self.vertex_count);
        info!("{}: drew {} vertices", self.label, self.vertex_count);
    }
}
