//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Outward-facing base URL, substituted into feed item links
    pub url: String,

    // Directories, relative to the site root
    pub content_dir: String,
    pub template_dir: String,
    pub output_dir: String,

    // Template names, resolved under `template_dir`
    pub default_template: String,
    pub category_index_template: String,
    pub digest_template: String,
    pub feed_template: String,

    /// Category whose pages make up the landing-page digest
    pub digest_category: String,
    /// How many of the newest pages the digest combines
    pub digest_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost".to_string(),

            content_dir: "content".to_string(),
            template_dir: "templates".to_string(),
            output_dir: "www".to_string(),

            default_template: "base.tmpl".to_string(),
            category_index_template: "base.tmpl".to_string(),
            digest_template: "digest.tmpl".to_string(),
            feed_template: "feed.xml".to_string(),

            digest_category: "Blog".to_string(),
            digest_size: 5,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
