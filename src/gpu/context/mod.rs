// Canvas Context Management
// Resolves a canvas by DOM id and hands back a ready WebGL2 context
// Main responsibilities:
// - Look up the canvas element and check its type
// - Request the "webgl2" rendering context
// - Report the drawing buffer size for the viewport

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGl2RenderingContext};

use super::backend::GlBackend;
use super::error::{GlError, Result};

/// A rendering context together with the size of the buffer it draws into.
pub struct CanvasSurface<G: GlBackend> {
    pub gl: G,
    pub width: u32,
    pub height: u32,
}

/// Source of rendering surfaces keyed by canvas id.
///
/// Failures are returned, not logged; the caller knows which scene lost its
/// surface.
pub trait SurfaceProvider {
    type Gl: GlBackend;

    fn acquire(&self, canvas_id: &str) -> Result<CanvasSurface<Self::Gl>>;
}

impl SurfaceProvider for Document {
    type Gl = WebGl2RenderingContext;

    fn acquire(&self, canvas_id: &str) -> Result<CanvasSurface<WebGl2RenderingContext>> {
        canvas_surface(self, canvas_id)
    }
}

fn canvas_surface(
    document: &Document,
    canvas_id: &str,
) -> Result<CanvasSurface<WebGl2RenderingContext>> {
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GlError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GlError::NotACanvas(canvas_id.to_string()))?;

    let gl = canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<WebGl2RenderingContext>().ok())
        .ok_or_else(|| GlError::ContextUnavailable(canvas_id.to_string()))?;

    Ok(CanvasSurface {
        width: canvas.width(),
        height: canvas.height(),
        gl,
    })
}
