//! URL helpers for mapping output paths to public locations

use std::path::Path;

/// Site-relative href for an output file, e.g. `/blog/post.html`.
///
/// Components are joined with `/` regardless of platform separator. A path
/// outside `output_root` is used as-is.
pub fn href_for(output_path: &Path, output_root: &Path) -> String {
    let rel = output_path.strip_prefix(output_root).unwrap_or(output_path);
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}

/// Absolute public URL for an output file: the output-root prefix swapped
/// for the configured base URL.
pub fn public_url(output_path: &Path, output_root: &Path, base_url: &str) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        href_for(output_path, output_root)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_href_for_top_level_file() {
        let out = PathBuf::from("/site/www/a.html");
        assert_eq!(href_for(&out, Path::new("/site/www")), "/a.html");
    }

    #[test]
    fn test_href_for_nested_file() {
        let out = PathBuf::from("/site/www/blog/2011/a.html");
        assert_eq!(href_for(&out, Path::new("/site/www")), "/blog/2011/a.html");
    }

    #[test]
    fn test_public_url_joins_base() {
        let out = PathBuf::from("/site/www/blog/a.html");
        assert_eq!(
            public_url(&out, Path::new("/site/www"), "http://www.example.org"),
            "http://www.example.org/blog/a.html"
        );
    }

    #[test]
    fn test_public_url_strips_trailing_slash() {
        let out = PathBuf::from("/site/www/a.html");
        assert_eq!(
            public_url(&out, Path::new("/site/www"), "http://www.example.org/"),
            "http://www.example.org/a.html"
        );
    }
}
