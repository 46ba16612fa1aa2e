//! Template loading and placeholder substitution
//!
//! Templates are flat text skeletons with `${name}` (or `$name`)
//! placeholders and no control flow. Substitution is a single pass:
//! placeholders with no matching field stay in the output verbatim, and
//! `$$` collapses to a literal `$`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template loading and rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {name} (looked for {path:?})")]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

lazy_static! {
    // `$$`, `${name}`, or `$name`; any other `$` passes through untouched
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("placeholder pattern is valid");
}

/// Replace `${name}` and `$name` placeholders with values from `vars`.
/// Names not present in `vars` are left exactly as written.
pub fn substitute(text: &str, vars: &IndexMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match vars.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Loads templates from the template directory and renders field mappings
/// into them.
pub struct TemplateEngine {
    template_dir: PathBuf,
}

impl TemplateEngine {
    pub fn new<P: AsRef<Path>>(template_dir: P) -> Self {
        Self {
            template_dir: template_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a template by name.
    pub fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.template_dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::TemplateNotFound {
                    name: name.to_string(),
                    path,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load a template and substitute `vars` into it.
    pub fn render(
        &self,
        name: &str,
        vars: &IndexMap<String, String>,
    ) -> Result<String, TemplateError> {
        let template = self.load(name)?;
        Ok(substitute(&template, vars))
    }
}
