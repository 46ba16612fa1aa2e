//! Digest page assembly
//!
//! The digest combines the newest pages of one category into a single
//! landing page. Each page contributes indexed fields to the combined
//! mapping (`title0`, `body0`, `date0`, ... with 0 the newest) and the
//! whole category appears once more as an `archive_list` of links.

use anyhow::Result;
use indexmap::IndexMap;

use super::category::{link_list, CategoryRegistry};
use super::PageRecord;
use crate::config::SiteConfig;
use crate::template::TemplateEngine;

/// Fields carried from each page into the combined mapping.
const DIGEST_FIELDS: &[&str] = &["title", "body", "date"];

/// Build the substitution mapping for the digest template.
///
/// `pages` is in render order (oldest first); the digest takes the last
/// `digest_size` of them, newest first. Absent fields stay absent, leaving
/// the template's placeholder in the output untouched.
pub fn digest_vars(
    pages: &[&PageRecord],
    registry: &CategoryRegistry,
    config: &SiteConfig,
) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();

    for (i, page) in pages.iter().rev().take(config.digest_size).enumerate() {
        for field in DIGEST_FIELDS {
            if let Some(value) = page.fields.get(field) {
                vars.insert(format!("{}{}", field, i), value.to_string());
            }
        }
    }

    let archive = registry
        .get(&config.digest_category)
        .map(|category| link_list(category.pages.iter().rev()))
        .unwrap_or_else(|| "<ul></ul>".to_string());
    vars.insert("archive_list".to_string(), archive);

    vars
}

/// Render the digest template over the given pages.
pub fn render_digest(
    pages: &[&PageRecord],
    registry: &CategoryRegistry,
    engine: &TemplateEngine,
    config: &SiteConfig,
) -> Result<String> {
    let vars = digest_vars(pages, registry, config);
    Ok(engine.render(&config.digest_template, &vars)?)
}
