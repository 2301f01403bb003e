// Shader Program Builder
// Compiles a vertex/fragment pair and links them into a program
// Failures never panic or propagate: the diagnostic goes to the log and the
// caller gets None.

use log::{debug, error};

use super::backend::{GlBackend, ShaderStage};

/// Compiles one stage. A shader that fails to compile is deleted.
pub fn load_shader<G: GlBackend>(gl: &G, stage: ShaderStage, source: &str) -> Option<G::Shader> {
    let Some(shader) = gl.create_shader(stage) else {
        error!("could not create {stage} shader object");
        return None;
    };
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl.shader_compiled(&shader) {
        error!(
            "an error occurred compiling the {stage} shader: {}",
            gl.shader_info_log(&shader)
        );
        gl.delete_shader(&shader);
        return None;
    }
    Some(shader)
}

/// Builds a linked program from vertex and fragment sources.
///
/// Both stages are always compiled so that every compile diagnostic is
/// reported, even when the first one already failed.
pub fn init_shader_program<G: GlBackend>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
) -> Option<G::Program> {
    let vertex = load_shader(gl, ShaderStage::Vertex, vertex_source);
    let fragment = load_shader(gl, ShaderStage::Fragment, fragment_source);
    let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
        error!("unable to initialize the shader program: a stage failed to compile");
        return None;
    };

    let Some(program) = gl.create_program() else {
        error!("unable to initialize the shader program: no program object");
        return None;
    };
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    if !gl.program_linked(&program) {
        error!(
            "unable to initialize the shader program: {}",
            gl.program_info_log(&program)
        );
        return None;
    }
    debug!("shader program linked");
    Some(program)
}
