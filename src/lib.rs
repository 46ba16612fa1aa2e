//! tagsite: a static site generator for tagged plain-text content
//!
//! Content files are plain text with `#tag` field markers and templates are
//! flat `${name}` substitution skeletons. A build walks the content tree,
//! renders each `.cnt` file through its template, copies everything else
//! verbatim, and assembles per-category indexes, a landing-page digest, and
//! an XML feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod template;

use anyhow::Result;
use std::path::Path;

/// The main tagsite application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (the site root)
    pub base_dir: std::path::PathBuf,
    /// Content source directory
    pub content_dir: std::path::PathBuf,
    /// Template directory
    pub template_dir: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site rooted at `base_dir`, loading `_config.yml` when present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let template_dir = base_dir.join(&config.template_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            template_dir,
            output_dir,
        })
    }

    /// Generate the static site, rewriting only outputs that changed
    pub fn build(&self) -> Result<generator::BuildStats> {
        commands::build::run(self)
    }

    /// Empty the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Empty the output directory, then rebuild everything
    pub fn refresh(&self) -> Result<generator::BuildStats> {
        self.clean()?;
        self.build()
    }
}
