//! Category tracking and index pages
//!
//! A category groups rendered pages by the first line of their `category`
//! field. The registry lives for one build; pages accumulate in the order
//! the walk rendered them, and each category gets an index page listing
//! its pages in that order.

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::template::TemplateEngine;

/// One page recorded under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    /// Site-relative href of the rendered page
    pub href: String,
    /// Link text, normally the page's `title` field
    pub title: String,
}

/// A named category's pages, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Category {
    pub pages: Vec<CategoryPage>,
}

/// All categories seen during a build, keyed by name in first-seen order.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: IndexMap<String, Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page under `name`, creating the category on first use.
    pub fn add_page(&mut self, name: &str, href: String, title: String) {
        self.categories
            .entry(name.to_string())
            .or_default()
            .pages
            .push(CategoryPage { href, title });
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate categories in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render and write one index page per category.
    pub fn build_indexes(
        &self,
        engine: &TemplateEngine,
        config: &SiteConfig,
        output_dir: &Path,
    ) -> Result<()> {
        for (name, category) in self.iter() {
            build_index(name, category, engine, config, output_dir)?;
        }
        Ok(())
    }
}

/// Render `<ul>` link markup for pages, in the given order.
pub fn link_list<'a, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'a CategoryPage>,
{
    let mut list = String::from("<ul>");
    for page in pages {
        list.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            page.href, page.title
        ));
    }
    list.push_str("</ul>");
    list
}

/// Write `<output_dir>/<name>.html` listing the category's pages. Index
/// pages are always rewritten, never gated on a diff.
pub fn build_index(
    name: &str,
    category: &Category,
    engine: &TemplateEngine,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<()> {
    let mut vars = IndexMap::new();
    vars.insert("title".to_string(), name.to_string());
    vars.insert("body".to_string(), link_list(&category.pages));

    let html = engine.render(&config.category_index_template, &vars)?;

    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join(format!("{}.html", name));
    fs::write(&index_path, html)?;
    tracing::debug!("Generated category index: {:?}", index_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(href: &str, title: &str) -> CategoryPage {
        CategoryPage {
            href: href.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_registry_creates_category_on_first_use() {
        let mut registry = CategoryRegistry::new();
        assert!(registry.is_empty());

        registry.add_page("Blog", "/a.html".into(), "A".into());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Blog").unwrap().pages, vec![page("/a.html", "A")]);
    }

    #[test]
    fn test_registry_keeps_categories_apart() {
        let mut registry = CategoryRegistry::new();
        registry.add_page("Blog", "/a.html".into(), "A".into());
        registry.add_page("Projects", "/p.html".into(), "P".into());
        registry.add_page("Blog", "/b.html".into(), "B".into());

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("Blog").unwrap().pages,
            vec![page("/a.html", "A"), page("/b.html", "B")]
        );
        assert_eq!(
            registry.get("Projects").unwrap().pages,
            vec![page("/p.html", "P")]
        );
    }

    #[test]
    fn test_registry_iterates_in_first_seen_order() {
        let mut registry = CategoryRegistry::new();
        registry.add_page("Zoo", "/z.html".into(), "Z".into());
        registry.add_page("Art", "/a.html".into(), "A".into());
        registry.add_page("Zoo", "/z2.html".into(), "Z2".into());

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zoo", "Art"]);
    }

    #[test]
    fn test_link_list_markup() {
        let pages = vec![page("/a.html", "First"), page("/b.html", "Second")];
        assert_eq!(
            link_list(&pages),
            r#"<ul><li><a href="/a.html">First</a></li><li><a href="/b.html">Second</a></li></ul>"#
        );
    }

    #[test]
    fn test_link_list_empty() {
        assert_eq!(link_list(&Category::default().pages), "<ul></ul>");
    }

    #[test]
    fn test_build_index_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        let out = dir.path().join("www");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("base.tmpl"), "<h1>${title}</h1>${body}").unwrap();

        let mut registry = CategoryRegistry::new();
        registry.add_page("Blog", "/a.html".into(), "First Post".into());

        let engine = TemplateEngine::new(&templates);
        let config = SiteConfig::default();
        registry.build_indexes(&engine, &config, &out).unwrap();

        let html = fs::read_to_string(out.join("Blog.html")).unwrap();
        assert_eq!(
            html,
            r#"<h1>Blog</h1><ul><li><a href="/a.html">First Post</a></li></ul>"#
        );
    }
}
