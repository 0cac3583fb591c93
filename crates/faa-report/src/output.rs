use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Write `html` to `output_path`, replacing any previous file and creating
/// missing parent directories.
pub fn write_html(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(output_path, html).with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), bytes = html.len(), "wrote bulletin page");
    Ok(())
}
