//! Feed document assembly
//!
//! Every rendered page goes into the site feed, newest first, as indexed
//! `title{i}`/`url{i}`/`date{i}`/`text{i}` fields. The mapping also carries
//! `runat`, the moment the feed was generated.

use anyhow::Result;
use chrono::Utc;
use indexmap::IndexMap;
use std::path::Path;

use super::PageRecord;
use crate::config::SiteConfig;
use crate::helpers::date::{feed_timestamp, parse_date_text};
use crate::helpers::url::public_url;
use crate::template::TemplateEngine;

/// Build the substitution mapping for the feed template.
///
/// Pages arrive in render order (oldest first) and are indexed newest
/// first. A page with no parseable `date` contributes no `date{i}` key.
pub fn feed_vars(
    pages: &[PageRecord],
    output_dir: &Path,
    config: &SiteConfig,
) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    vars.insert("runat".to_string(), Utc::now().to_rfc3339());

    for (i, page) in pages.iter().rev().enumerate() {
        if let Some(title) = page.fields.get("title") {
            vars.insert(format!("title{}", i), title.to_string());
        }
        vars.insert(
            format!("url{}", i),
            public_url(&page.output, output_dir, &config.url),
        );
        if let Some(date) = page.fields.get("date").and_then(parse_date_text) {
            vars.insert(format!("date{}", i), feed_timestamp(date));
        }
        if let Some(text) = page.fields.get("body") {
            vars.insert(format!("text{}", i), text.to_string());
        }
    }

    vars
}

/// Render the feed template over all rendered pages.
pub fn render_feed(
    pages: &[PageRecord],
    output_dir: &Path,
    engine: &TemplateEngine,
    config: &SiteConfig,
) -> Result<String> {
    let vars = feed_vars(pages, output_dir, config);
    Ok(engine.render(&config.feed_template, &vars)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentFields, MarkdownRenderer};
    use std::path::PathBuf;

    fn record(name: &str, date: Option<&str>) -> PageRecord {
        let md = MarkdownRenderer::new();
        let mut text = format!("#title\n{}\n", name);
        if let Some(d) = date {
            text.push_str(&format!("#date\n{}\n", d));
        }
        text.push_str("#body\nsome text\n");
        PageRecord {
            source: PathBuf::from(format!("content/{}.cnt", name)),
            output: PathBuf::from(format!("www/{}.html", name)),
            href: format!("/{}.html", name),
            category: None,
            fields: ContentFields::from_text(&text, &md),
        }
    }

    fn config() -> SiteConfig {
        SiteConfig {
            url: "http://www.example.org".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_feed_carries_run_timestamp() {
        let vars = feed_vars(&[], Path::new("www"), &config());
        assert!(vars.contains_key("runat"));
        // RFC 3339, e.g. 2011-01-02T03:04:05.678+00:00
        assert!(vars.get("runat").unwrap().contains('T'));
    }

    #[test]
    fn test_feed_indexes_newest_first_with_public_urls() {
        let pages = vec![
            record("older", Some("January 2, 2011")),
            record("newer", Some("March 4, 2012")),
        ];
        let vars = feed_vars(&pages, Path::new("www"), &config());

        assert_eq!(vars.get("title0").map(String::as_str), Some("newer"));
        assert_eq!(
            vars.get("url0").map(String::as_str),
            Some("http://www.example.org/newer.html")
        );
        assert_eq!(
            vars.get("date0").map(String::as_str),
            Some("2012-03-04T00:00:00")
        );
        assert_eq!(
            vars.get("text0").map(String::as_str),
            Some("<p>some text</p>\n")
        );

        assert_eq!(vars.get("title1").map(String::as_str), Some("older"));
        assert_eq!(
            vars.get("date1").map(String::as_str),
            Some("2011-01-02T00:00:00")
        );
    }

    #[test]
    fn test_unparseable_date_omitted_from_feed() {
        let pages = vec![record("scribble", Some("sometime last week")), record("undated", None)];
        let vars = feed_vars(&pages, Path::new("www"), &config());

        assert_eq!(vars.get("title0").map(String::as_str), Some("undated"));
        assert!(!vars.contains_key("date0"));
        assert_eq!(vars.get("title1").map(String::as_str), Some("scribble"));
        assert!(!vars.contains_key("date1"));
    }
}
