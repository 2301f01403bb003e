//! Page configuration.
//!
//! Defaults describe the stock page. A page may override any part of it with
//! an inline `<script type="application/json" id="render-config">` block.

use log::{LevelFilter, warn};
use serde::Deserialize;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "render-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub log_level: String,
    pub rectangle: CanvasConfig,
    pub triangle: CanvasConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CanvasConfig {
    pub canvas_id: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_clear_color")]
    pub clear_color: [f32; 4],
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_clear_color() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl CanvasConfig {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            width: default_width(),
            height: default_height(),
            clear_color: default_clear_color(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            rectangle: CanvasConfig::new("glcanvas1"),
            triangle: CanvasConfig::new("glcanvas2"),
        }
    }
}

impl RenderConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Reads the inline config block, falling back to defaults when it is
    /// absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("unknown log level `{}`, using info", self.log_level);
            LevelFilter::Info
        })
    }
}
