// GPU module - organizes all WebGL-related functionality
// This module provides abstractions for WebGL2 operations including:
// - Context acquisition from canvas elements
// - Shader compilation and program linking
// - A builder for single-draw scenes
// - Matrix and surface helpers
// - The two page scenes: a perspective square and a flat triangle

pub mod backend;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod scene;
pub mod shaders;
pub mod square;
pub mod triangle;
pub mod utils;

use log::{error, info};

use crate::config::RenderConfig;
use context::SurfaceProvider;

/// Renders the square and then the triangle, once each.
///
/// A failing scene is logged and does not stop the other one. Returns how
/// many scenes were drawn.
pub fn render_page<P: SurfaceProvider>(provider: &P, config: &RenderConfig) -> usize {
    let results = [
        ("square", square::render_square(provider, &config.rectangle)),
        ("triangle", triangle::render_triangle(provider, &config.triangle)),
    ];

    let mut drawn = 0;
    for (scene, result) in results {
        match result {
            Ok(()) => drawn += 1,
            Err(err) => error!("{scene} scene not rendered: {err}"),
        }
    }
    info!("rendered {drawn} of 2 scenes");
    drawn
}
