//! Tagged content file parsing
//!
//! A content file is plain text where every line whose first character is
//! `#` opens a field: the tag name is the rest of that line, and all
//! following lines up to the next tag line form the field's value. Lines
//! before the first tag belong to no field and are dropped. A repeated tag
//! restarts its field but keeps its first-seen position in the mapping.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use super::MarkdownRenderer;

/// The parsed field mapping of one content file.
///
/// Field order follows first appearance in the file. The `body` field holds
/// rendered HTML by the time a value leaves the parser; an absent body is
/// synthesized as empty so templates can always refer to `${body}`.
#[derive(Debug, Clone, Default)]
pub struct ContentFields {
    fields: IndexMap<String, String>,
    template_override: Option<String>,
}

impl ContentFields {
    /// Read and parse a content file.
    pub fn parse(path: &Path, markdown: &MarkdownRenderer) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read content file {:?}", path))?;
        Ok(Self::from_text(&text, markdown))
    }

    /// Parse content text that is already in memory.
    pub fn from_text(text: &str, markdown: &MarkdownRenderer) -> Self {
        let mut fields: IndexMap<String, String> = IndexMap::new();
        let mut current: Option<String> = None;
        let mut template_header = false;

        for (idx, line) in text.split_inclusive('\n').enumerate() {
            if line.starts_with('#') {
                // a template override only counts on the very first line
                if idx == 0 && line.trim_end() == "#template" {
                    template_header = true;
                }
                let name = line.trim_end().trim_start_matches('#').to_string();
                fields.insert(name.clone(), String::new());
                current = Some(name);
            } else if let Some(name) = &current {
                if let Some(value) = fields.get_mut(name) {
                    value.push_str(line);
                }
            }
        }

        for value in fields.values_mut() {
            let trimmed = value.trim_end().len();
            value.truncate(trimmed);
        }

        let template_override = if template_header {
            fields
                .get("template")
                .map(|v| v.lines().next().unwrap_or("").trim().to_string())
                .filter(|name| !name.is_empty())
        } else {
            None
        };

        let raw_body = fields.get("body").cloned().unwrap_or_default();
        fields.insert("body".to_string(), markdown.render(&raw_body));

        Self {
            fields,
            template_override,
        }
    }

    /// Look up a field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// First line of a field, trimmed. `None` when the field is absent.
    pub fn first_line(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.lines().next().unwrap_or("").trim())
    }

    /// Template name from a leading `#template` field, if the file had one.
    pub fn template_override(&self) -> Option<&str> {
        self.template_override.as_deref()
    }

    /// The full field mapping, in file order.
    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize back to tag format: a `#name` line followed by the value.
    ///
    /// Parsing the result reproduces the same mapping, with the body field
    /// carrying whatever rendered text it already held.
    pub fn to_tagged_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.fields {
            out.push('#');
            out.push_str(name);
            out.push('\n');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
