// Shader Sources
// The one pass-through GLSL ES program every scene links
// - Vertex stage: projection * model-view * position, forwards the color
// - Fragment stage: writes the interpolated color

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const COLOR_ATTRIBUTE: &str = "a_color";
pub const MODEL_VIEW_UNIFORM: &str = "u_model_view";
pub const PROJECTION_UNIFORM: &str = "u_projection";

// Unset trailing components default to (0, 0, 0, 1), so 2-D positions land
// at z = 0 and RGB colors come out opaque.
pub const VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec4 a_color;

uniform mat4 u_model_view;
uniform mat4 u_projection;

varying vec4 v_color;

void main(void) {
    gl_Position = u_projection * u_model_view * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
#ifdef GL_ES
precision highp float;
#endif

varying vec4 v_color;

void main(void) {
    gl_FragColor = v_color;
}
"#;
