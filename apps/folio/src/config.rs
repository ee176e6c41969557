use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::host::scene::DEFAULT_SCENE_URL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults reproduce the stock page.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Locator handed to the 3D scene viewer.
    pub scene_url: String,
    /// When set, render once to this file and exit instead of serving.
    pub export_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            scene_url: get("SCENE_URL").unwrap_or_else(|| DEFAULT_SCENE_URL.to_string()),
            export_path: get("EXPORT_PATH").map(PathBuf::from),
        })
    }
}
