//! The decorative 3D scene in the page header.
//!
//! The scene is opaque: the page hands a viewer a locator and a size and never
//! hears back. Load failures are the viewer's business.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";

const SPLINE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

/// Display size as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSize {
    pub width: String,
    pub height: String,
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
        }
    }
}

impl WidgetSize {
    pub fn style(&self) -> String {
        format!("width: {}; height: {};", self.width, self.height)
    }
}

/// Which scene to show and how big.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub locator: String,
    pub size: WidgetSize,
}

impl SceneConfig {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            size: WidgetSize::default(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE_URL)
    }
}

/// Embeds a scene into HTML output.
pub trait SceneViewer: Send + Sync {
    /// Markup the document head needs (scripts, styles). Emitted once per page.
    fn head(&self) -> Markup;

    fn embed(&self, locator: &str, size: &WidgetSize) -> Markup;
}

/// Spline's `<spline-viewer>` web component.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineViewer;

impl SceneViewer for SplineViewer {
    fn head(&self) -> Markup {
        html! {
            script type="module" src=(SPLINE_VIEWER_SCRIPT) {}
        }
    }

    fn embed(&self, locator: &str, size: &WidgetSize) -> Markup {
        html! {
            spline-viewer url=(locator) style=(size.style()) {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_config() {
        let scene = SceneConfig::default();
        assert_eq!(scene.locator, DEFAULT_SCENE_URL);
        assert_eq!(scene.size.style(), "width: 100%; height: 100%;");
    }

    #[test]
    fn test_spline_embed_carries_locator_and_size() {
        let size = WidgetSize {
            width: "320px".to_string(),
            height: "240px".to_string(),
        };
        let out = SplineViewer.embed("https://example.com/a.splinecode", &size).into_string();
        assert!(out.starts_with("<spline-viewer"));
        assert!(out.contains(r#"url="https://example.com/a.splinecode""#));
        assert!(out.contains("width: 320px; height: 240px;"));
    }

    #[test]
    fn test_spline_head_loads_module_script() {
        let out = SplineViewer.head().into_string();
        assert!(out.contains(r#"type="module""#));
        assert!(out.contains("spline-viewer.js"));
    }
}
