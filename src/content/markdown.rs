//! Markdown rendering for content bodies

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer for the `body` field
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_DEFINITION_LIST
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_paragraph() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.render("hi"), "<p>hi</p>\n");
    }

    #[test]
    fn test_render_empty_input() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.render(""), "");
    }

    #[test]
    fn test_render_emphasis_and_links() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("*hello* [there](/there.html)");
        assert!(html.contains("<em>hello</em>"));
        assert!(html.contains(r#"<a href="/there.html">there</a>"#));
    }
}
