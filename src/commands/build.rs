//! Build the site

use anyhow::Result;
use std::time::Instant;

use crate::generator::{BuildStats, Generator};
use crate::Site;

/// Run one build pass over the content tree.
pub fn run(site: &Site) -> Result<BuildStats> {
    let start = Instant::now();

    let stats = Generator::new(site).run()?;

    tracing::info!(
        "Rendered {} pages ({} written), copied {} assets, {} category indexes in {:.2}s",
        stats.pages_rendered,
        stats.pages_written,
        stats.assets_copied,
        stats.categories,
        start.elapsed().as_secs_f64()
    );

    Ok(stats)
}
