use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write the whole buffer to `path`, creating or truncating it.
///
/// Single write with no temp file; a failure leaves whatever the OS left behind.
pub async fn write_csv(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }
    }

    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write capture file {}", path.display()))?;

    Ok(())
}
