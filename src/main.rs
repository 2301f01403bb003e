use leptos::prelude::*;

mod config;
mod gpu;
mod logging;

use config::RenderConfig;
use logging::{LoggingConfig, init_logging};

fn main() {
    init_logging(LoggingConfig::default());

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("no document to render into");
        return;
    };

    let config = RenderConfig::from_document(&document);
    log::set_max_level(config.level_filter());

    let rectangle = config.rectangle.clone();
    let triangle = config.triangle.clone();

    // Mounting builds the DOM synchronously, so both canvases exist afterwards.
    leptos::mount::mount_to_body(move || {
        view! {
            <div>
                <h1>"WebGL Shapes"</h1>
                <canvas
                    id=rectangle.canvas_id
                    width=rectangle.width.to_string()
                    height=rectangle.height.to_string()
                    style="border: 1px solid black;"
                ></canvas>
                <canvas
                    id=triangle.canvas_id
                    width=triangle.width.to_string()
                    height=triangle.height.to_string()
                    style="border: 1px solid black;"
                ></canvas>
            </div>
        }
    });

    gpu::render_page(&document, &config);
}
