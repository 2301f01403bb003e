use super::backend::Topology;
use super::context::SurfaceProvider;
use super::error::Result;
use super::scene::SceneBuilder;
use super::utils::{make_perspective, translation};
use crate::config::CanvasConfig;

// Triangle strip order: the two triangles share the (-1, 1)-(1, -1) edge.
#[rustfmt::skip]
pub const SQUARE_VERTICES: [f32; 12] = [
     1.0,  1.0, 0.0,
    -1.0,  1.0, 0.0,
     1.0, -1.0, 0.0,
    -1.0, -1.0, 0.0,
];

#[rustfmt::skip]
pub const SQUARE_COLORS: [f32; 12] = [
    0.0, 1.0, 1.0,
    0.0, 1.0, 1.0,
    0.0, 1.0, 1.0,
    0.0, 1.0, 1.0,
];

pub const FIELD_OF_VIEW: f32 = 45.0;
pub const ASPECT_RATIO: f32 = 640.0 / 480.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const DISTANCE: f32 = 4.0;

/// Cyan unit square seen through a perspective camera, pushed back along -z.
pub fn square_scene(clear_color: [f32; 4]) -> SceneBuilder {
    SceneBuilder::new("square")
        .positions(SQUARE_VERTICES, 3)
        .colors(SQUARE_COLORS, 3)
        .topology(Topology::TriangleStrip)
        .projection(make_perspective(FIELD_OF_VIEW, ASPECT_RATIO, Z_NEAR, Z_FAR))
        .model_view(translation(0.0, 0.0, -DISTANCE))
        .clear_color(clear_color)
}

pub fn render_square<P: SurfaceProvider>(provider: &P, config: &CanvasConfig) -> Result<()> {
    let surface = provider.acquire(&config.canvas_id)?;
    let scene = square_scene(config.clear_color).build(&surface.gl, surface.width, surface.height)?;
    scene.draw(&surface.gl);
    Ok(())
}
