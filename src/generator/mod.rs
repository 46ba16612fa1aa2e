//! Site generation - walks the content tree and produces the output tree

pub mod category;
pub mod diff;
pub mod digest;
pub mod feed;

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

use crate::content::{ContentFields, MarkdownRenderer};
use crate::helpers::url::href_for;
use crate::template::TemplateEngine;
use crate::Site;

pub use category::{Category, CategoryPage, CategoryRegistry};

/// Content file suffix
pub const CONTENT_EXT: &str = "cnt";
/// Rendered page suffix
pub const OUTPUT_EXT: &str = "html";
/// Editor swap file suffixes, never copied
const SWAP_EXTS: &[&str] = &["swp", "swo"];
/// Digest landing page, relative to the output root
pub const DIGEST_OUTPUT: &str = "index.html";
/// Feed document, relative to the output root
pub const FEED_OUTPUT: &str = "feed.xml";

/// One rendered content file, kept for digest and feed assembly.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Source path under the content root
    pub source: PathBuf,
    /// Mirrored output path under the output root
    pub output: PathBuf,
    /// Site-relative href of the output file
    pub href: String,
    /// Category name, when the file declares one
    pub category: Option<String>,
    /// Parsed fields, parsed once and reused everywhere
    pub fields: ContentFields,
}

/// Counters for one build pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildStats {
    /// Content files parsed and rendered
    pub pages_rendered: usize,
    /// Rendered pages actually written (new or changed)
    pub pages_written: usize,
    /// Non-content files copied
    pub assets_copied: usize,
    /// Category index pages generated
    pub categories: usize,
}

/// Walks the content tree and produces the output tree.
pub struct Generator<'a> {
    site: &'a Site,
    markdown: MarkdownRenderer,
    engine: TemplateEngine,
    registry: CategoryRegistry,
    pages: Vec<PageRecord>,
    stats: BuildStats,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            markdown: MarkdownRenderer::new(),
            engine: TemplateEngine::new(&site.template_dir),
            registry: CategoryRegistry::new(),
            pages: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    /// Generate the whole site: walk and render the content tree, then
    /// assemble the digest, the feed, and the category indexes.
    pub fn run(mut self) -> Result<BuildStats> {
        fs::create_dir_all(&self.site.output_dir).with_context(|| {
            format!("failed to create output directory {:?}", self.site.output_dir)
        })?;

        if self.site.content_dir.exists() {
            self.walk_content()?;
        } else {
            tracing::warn!("Content directory {:?} does not exist", self.site.content_dir);
        }

        // the digest only appears once its category has pages
        let digest_pages: Vec<&PageRecord> = self
            .pages
            .iter()
            .filter(|p| p.category.as_deref() == Some(self.site.config.digest_category.as_str()))
            .collect();
        if !digest_pages.is_empty() {
            let html = digest::render_digest(
                &digest_pages,
                &self.registry,
                &self.engine,
                &self.site.config,
            )?;
            fs::write(self.site.output_dir.join(DIGEST_OUTPUT), html)?;
            tracing::debug!("Generated digest from {} pages", digest_pages.len());
        }

        // the feed covers every rendered page
        let xml = feed::render_feed(
            &self.pages,
            &self.site.output_dir,
            &self.engine,
            &self.site.config,
        )?;
        fs::write(self.site.output_dir.join(FEED_OUTPUT), xml)?;

        self.registry
            .build_indexes(&self.engine, &self.site.config, &self.site.output_dir)?;
        self.stats.categories = self.registry.len();

        Ok(self.stats)
    }

    /// Walk the content tree in deterministic order: within a directory,
    /// files come before subdirectories and render in ascending mtime
    /// order. The digest and feed rely on this, newest pages last.
    fn walk_content(&mut self) -> Result<()> {
        let walker = WalkDir::new(&self.site.content_dir)
            .min_depth(1)
            .sort_by(compare_entries);

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(CONTENT_EXT) {
                self.render_page(path)?;
            } else {
                self.copy_asset(path)?;
            }
        }
        Ok(())
    }

    /// Render one content file into the output tree.
    fn render_page(&mut self, path: &Path) -> Result<()> {
        let fields = ContentFields::parse(path, &self.markdown)?;

        let template = fields
            .template_override()
            .unwrap_or(self.site.config.default_template.as_str());
        let rendered = self
            .engine
            .render(template, fields.vars())
            .with_context(|| format!("failed to render {:?}", path))?;

        let output = self.output_path(path)?;
        let href = href_for(&output, &self.site.output_dir);

        let category = fields
            .first_line("category")
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        if let Some(name) = &category {
            let title = fields
                .get("title")
                .map(str::to_string)
                .unwrap_or_else(|| file_stem(path));
            self.registry.add_page(name, href.clone(), title);
        }

        self.stats.pages_rendered += 1;
        if diff::unchanged(&rendered, &output) {
            tracing::debug!("Unchanged: {:?}", output);
        } else {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, &rendered)
                .with_context(|| format!("failed to write {:?}", output))?;
            self.stats.pages_written += 1;
            tracing::debug!("Rendered: {:?}", output);
        }

        self.pages.push(PageRecord {
            source: path.to_path_buf(),
            output,
            href,
            category,
            fields,
        });

        Ok(())
    }

    /// Copy a non-content file into the output tree when new or changed.
    fn copy_asset(&mut self, path: &Path) -> Result<()> {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if SWAP_EXTS.contains(&ext) {
                tracing::debug!("Skipped swap file: {:?}", path);
                return Ok(());
            }
        }

        let rel = path
            .strip_prefix(&self.site.content_dir)
            .with_context(|| format!("file {:?} outside content root", path))?;
        let dest = self.site.output_dir.join(rel);

        if diff::files_identical(path, &dest)? {
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)
            .with_context(|| format!("failed to copy {:?} to {:?}", path, dest))?;
        self.stats.assets_copied += 1;
        tracing::debug!("Copied: {:?}", dest);

        Ok(())
    }

    /// Map a content path to its mirrored output path (`.cnt` -> `.html`).
    fn output_path(&self, content_path: &Path) -> Result<PathBuf> {
        let rel = content_path
            .strip_prefix(&self.site.content_dir)
            .with_context(|| format!("content file {:?} outside content root", content_path))?;
        Ok(self.site.output_dir.join(rel).with_extension(OUTPUT_EXT))
    }
}

/// Walk order within a directory: files before subdirectories, files by
/// ascending mtime (name as tiebreaker), subdirectories by name.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (a.file_type().is_dir(), b.file_type().is_dir()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.file_name().cmp(b.file_name()),
        (false, false) => entry_mtime(a)
            .cmp(&entry_mtime(b))
            .then_with(|| a.file_name().cmp(b.file_name())),
    }
}

fn entry_mtime(entry: &DirEntry) -> SystemTime {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string()
}
