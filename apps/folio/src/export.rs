//! One-shot static export: write the rendered page to disk.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Writes `html` to `path`, creating parent directories. Returns bytes written.
pub async fn export_page(path: &Path, html: &str) -> Result<usize, AppError> {
    if path.file_name().is_none() {
        return Err(AppError::Config(format!(
            "EXPORT_PATH '{}' does not name a file",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, html).await?;

    info!("Exported {} bytes to {}", html.len(), path.display());
    Ok(html.len())
}
