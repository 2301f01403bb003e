use std::cell::RefCell;
use std::rc::Rc;

use super::{GlBackend, ShaderStage, Topology};
use crate::gpu::utils::Mat4;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Viewport(i32, i32),
    ClearColor([f32; 4]),
    EnableDepthTest,
    Clear,
    CreateShader { shader: u32, stage: ShaderStage },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(u32),
    CreateBuffer(u32),
    BindArrayBuffer(u32),
    BufferData { buffer: u32, data: Vec<f32> },
    EnableAttrib(u32),
    AttribPointer { index: u32, components: i32, buffer: u32 },
    UniformMatrix4 { name: Option<String>, matrix: Mat4 },
    DrawArrays { topology: Topology, first: i32, count: i32 },
}

#[derive(Debug, Default)]
struct ShaderSlot {
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct ProgramSlot {
    shaders: Vec<u32>,
    linked: bool,
    attribs: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    next_id: u32,
    shaders: Vec<(u32, ShaderSlot)>,
    programs: Vec<(u32, ProgramSlot)>,
    bound_buffer: Option<u32>,
    fail_link: bool,
    no_buffers: bool,
}

impl State {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn shader(&self, id: u32) -> Option<&ShaderSlot> {
        self.shaders.iter().find(|(s, _)| *s == id).map(|(_, slot)| slot)
    }

    fn program(&self, id: u32) -> Option<&ProgramSlot> {
        self.programs.iter().find(|(p, _)| *p == id).map(|(_, slot)| slot)
    }

    fn program_mut(&mut self, id: u32) -> Option<&mut ProgramSlot> {
        self.programs
            .iter_mut()
            .find(|(p, _)| *p == id)
            .map(|(_, slot)| slot)
    }

    fn linked_sources(&self, program: u32) -> Vec<&str> {
        self.program(program)
            .filter(|p| p.linked)
            .map(|p| {
                p.shaders
                    .iter()
                    .filter_map(|id| self.shader(*id))
                    .map(|s| s.source.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// In-memory GL that journals every call.
///
/// A shader "compiles" when its source declares `void main`; attributes and
/// uniforms resolve when a linked stage mentions them by name. Clones share
/// the same journal.
#[derive(Debug, Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_link() -> Self {
        let gl = Self::new();
        gl.state.borrow_mut().fail_link = true;
        gl
    }

    pub fn without_buffers() -> Self {
        let gl = Self::new();
        gl.state.borrow_mut().no_buffers = true;
        gl
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn draws(&self) -> Vec<(Topology, i32, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DrawArrays { topology, first, count } => Some((topology, first, count)),
                _ => None,
            })
            .collect()
    }

    pub fn uploads(&self) -> Vec<Vec<f32>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::BufferData { data, .. } => Some(data),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlBackend for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        let shader = state.next_id();
        state.shaders.push((shader, ShaderSlot::default()));
        state.calls.push(Call::CreateShader { shader, stage });
        Some(shader)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        let mut state = self.state.borrow_mut();
        if let Some((_, slot)) = state.shaders.iter_mut().find(|(s, _)| s == shader) {
            slot.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: &u32) {
        let mut state = self.state.borrow_mut();
        if let Some((_, slot)) = state.shaders.iter_mut().find(|(s, _)| s == shader) {
            slot.compiled = slot.source.contains("void main");
        }
        state.calls.push(Call::CompileShader(*shader));
    }

    fn shader_compiled(&self, shader: &u32) -> bool {
        self.state
            .borrow()
            .shader(*shader)
            .is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: &u32) -> String {
        if self.shader_compiled(shader) {
            String::new()
        } else {
            String::from("ERROR: 0:1: 'main' : function not defined")
        }
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        let program = state.next_id();
        state.programs.push((program, ProgramSlot::default()));
        state.calls.push(Call::CreateProgram(program));
        Some(program)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        let mut state = self.state.borrow_mut();
        if let Some(slot) = state.program_mut(*program) {
            slot.shaders.push(*shader);
        }
        state.calls.push(Call::AttachShader {
            program: *program,
            shader: *shader,
        });
    }

    fn link_program(&self, program: &u32) {
        let mut state = self.state.borrow_mut();
        let fail_link = state.fail_link;
        let stages_ok = state.program(*program).is_some_and(|p| {
            p.shaders.len() == 2
                && p.shaders
                    .iter()
                    .all(|id| state.shader(*id).is_some_and(|s| s.compiled))
        });
        if let Some(slot) = state.program_mut(*program) {
            slot.linked = stages_ok && !fail_link;
        }
        state.calls.push(Call::LinkProgram(*program));
    }

    fn program_linked(&self, program: &u32) -> bool {
        self.state
            .borrow()
            .program(*program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: &u32) -> String {
        if self.program_linked(program) {
            String::new()
        } else {
            String::from("error: varying `v_color` has no matching output")
        }
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn create_buffer(&self) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        if state.no_buffers {
            return None;
        }
        let buffer = state.next_id();
        state.calls.push(Call::CreateBuffer(buffer));
        Some(buffer)
    }

    fn bind_array_buffer(&self, buffer: &u32) {
        let mut state = self.state.borrow_mut();
        state.bound_buffer = Some(*buffer);
        state.calls.push(Call::BindArrayBuffer(*buffer));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        let mut state = self.state.borrow_mut();
        let buffer = state.bound_buffer.unwrap_or_default();
        state.calls.push(Call::BufferData {
            buffer,
            data: data.to_vec(),
        });
    }

    fn attrib_location(&self, program: &u32, name: &str) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        let active = state
            .linked_sources(*program)
            .iter()
            .any(|source| source.contains(name));
        if !active {
            return None;
        }
        let slot = state.program_mut(*program)?;
        let index = match slot.attribs.iter().position(|a| a == name) {
            Some(index) => index,
            None => {
                slot.attribs.push(name.to_string());
                slot.attribs.len() - 1
            }
        };
        u32::try_from(index).ok()
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn float_attrib_pointer(&self, index: u32, components: i32) {
        let buffer = self.state.borrow().bound_buffer.unwrap_or_default();
        self.record(Call::AttribPointer {
            index,
            components,
            buffer,
        });
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<String> {
        self.state
            .borrow()
            .linked_sources(*program)
            .iter()
            .any(|source| source.contains(name))
            .then(|| name.to_string())
    }

    fn uniform_matrix4(&self, location: Option<&String>, matrix: &Mat4) {
        self.record(Call::UniformMatrix4 {
            name: location.cloned(),
            matrix: *matrix,
        });
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(Call::DrawArrays {
            topology,
            first,
            count,
        });
    }
}
