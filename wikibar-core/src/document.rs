use std::path::{Component, Path, PathBuf};

use crate::markdown::{Heading, extract_headings};

/// One wiki page, reduced to what the sidebar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub headings: Vec<Heading>,
    /// Path relative to the wiki root, e.g. `guides/Setup.md`
    pub path: PathBuf,
}

impl Document {
    pub fn parse<P: AsRef<Path>>(content: &str, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (title, headings) = extract_headings(content, &path);

        Self {
            title,
            headings,
            path,
        }
    }

    /// URL path of the page inside the wiki: `/` separated, no extension.
    pub fn url_path(&self) -> String {
        self.path
            .with_extension("")
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.url_path())
    }
}

/// Joins URL segments with exactly one `/` between them.
///
/// A trailing slash on the last segment is kept.
pub fn join_url(segments: &[&str]) -> String {
    let trailing = if segments.last().is_some_and(|s| s.ends_with('/')) {
        "/"
    } else {
        ""
    };

    let joined = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .collect::<Vec<_>>()
        .join("/");

    format!("{joined}{trailing}")
}
