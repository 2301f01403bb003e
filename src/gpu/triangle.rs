use super::backend::Topology;
use super::context::SurfaceProvider;
use super::error::Result;
use super::scene::SceneBuilder;
use super::utils::IDENTITY;
use crate::config::CanvasConfig;

// 2-D positions; the vertex stage fills in z = 0.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 6] = [
    -1.0, -1.0,
     0.0,  1.0,
     1.0, -1.0,
];

#[rustfmt::skip]
pub const TRIANGLE_COLORS: [f32; 12] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
];

/// Red/green/blue triangle drawn straight into clip space.
pub fn triangle_scene(clear_color: [f32; 4]) -> SceneBuilder {
    SceneBuilder::new("triangle")
        .positions(TRIANGLE_VERTICES, 2)
        .colors(TRIANGLE_COLORS, 4)
        .topology(Topology::TriangleStrip)
        .projection(IDENTITY)
        .model_view(IDENTITY)
        .clear_color(clear_color)
}

pub fn render_triangle<P: SurfaceProvider>(provider: &P, config: &CanvasConfig) -> Result<()> {
    let surface = provider.acquire(&config.canvas_id)?;
    let scene =
        triangle_scene(config.clear_color).build(&surface.gl, surface.width, surface.height)?;
    scene.draw(&surface.gl);
    Ok(())
}
