//! Empty the output directory

use anyhow::{Context, Result};
use std::fs;

use crate::Site;

/// Delete everything under the output root, leaving the root itself in
/// place.
pub fn run(site: &Site) -> Result<()> {
    if !site.output_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(&site.output_dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("failed to remove {:?}", path))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {:?}", path))?;
        }
    }
    tracing::info!("Emptied output directory: {:?}", site.output_dir);

    Ok(())
}
