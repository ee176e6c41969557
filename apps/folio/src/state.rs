use std::sync::Arc;

use crate::config::Config;
use crate::host::{SceneConfig, SceneViewer, SplineViewer};
use crate::layout::{render_document, render_page_now, Layout};
use crate::models::ContentModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentModel>,
    pub scene: SceneConfig,
    /// Pluggable scene viewer. Default: SplineViewer.
    pub viewer: Arc<dyn SceneViewer>,
}

impl AppState {
    pub fn new(config: &Config, content: ContentModel) -> Self {
        Self {
            content: Arc::new(content),
            scene: SceneConfig::new(config.scene_url.clone()),
            viewer: Arc::new(SplineViewer),
        }
    }

    /// The layout as it should look right now (current UTC year in the footer).
    pub fn layout_now(&self) -> Layout {
        render_page_now(&self.content, &self.scene)
    }

    pub fn html_now(&self) -> String {
        render_document(&self.layout_now(), self.viewer.as_ref()).into_string()
    }
}
