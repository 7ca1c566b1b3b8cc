use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

// Anything that is not a word character, whitespace or a hyphen
static ANCHOR_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A sub-heading (H2 and deeper) of a wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub depth: usize,
    pub text: String,
}

impl Heading {
    pub fn new<S: Into<String>>(depth: usize, text: S) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }

    pub fn anchor(&self) -> String {
        create_anchor(&self.text)
    }
}

/// Title and sub-headings of a page, in document order.
///
/// The first H1 becomes the title. Every deeper heading is kept as a
/// [`Heading`]. When the page has no H1 the file stem of `path` is used.
pub fn extract_headings(content: &str, path: &Path) -> (String, Vec<Heading>) {
    let mut title: Option<String> = None;
    let mut headings = Vec::new();

    for line in content.lines() {
        let Some((depth, text)) = parse_heading_line(line) else {
            continue;
        };

        if depth == 1 {
            // Later H1s are ignored
            if title.is_none() {
                title = Some(text.to_string());
            }
        } else {
            headings.push(Heading::new(depth, text));
        }
    }

    let title = title.unwrap_or_else(|| file_stem(path));

    (title, headings)
}

/// Depth and text of an ATX-style heading line, or `None` for anything else.
///
/// The markers must be followed by whitespace and some text, so `#tag` and a
/// bare `##` are not headings.
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let line = line.trim();
    let depth = line.bytes().take_while(|b| *b == b'#').count();
    if depth == 0 {
        return None;
    }

    let rest = &line[depth..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((depth, text))
}

/// Anchor GitHub generates for a heading: lowercase, punctuation removed,
/// whitespace runs turned into a single hyphen.
///
/// Two headings that normalize to the same anchor are not disambiguated.
pub fn create_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = ANCHOR_STRIP.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), "-")
        .into_owned()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_subheadings() {
        let content = "# Getting Started\n\nintro\n\n## Install\n### From source\n## Usage\n";
        let (title, headings) = extract_headings(content, Path::new("Getting-Started.md"));

        assert_eq!(title, "Getting Started");
        assert_eq!(
            headings,
            vec![
                Heading::new(2, "Install"),
                Heading::new(3, "From source"),
                Heading::new(2, "Usage"),
            ]
        );
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let (title, headings) =
            extract_headings("## Only a sub heading\n", Path::new("docs/Home-Page.md"));

        assert_eq!(title, "Home-Page");
        assert_eq!(headings, vec![Heading::new(2, "Only a sub heading")]);
    }

    #[test]
    fn test_first_title_wins() {
        let (title, headings) = extract_headings("# First\n# Second\n## Sub\n", Path::new("x.md"));

        assert_eq!(title, "First");
        // The second H1 is not list content either
        assert_eq!(headings, vec![Heading::new(2, "Sub")]);
    }

    #[test]
    fn test_malformed_lines_are_not_headings() {
        assert_eq!(parse_heading_line("#hashtag"), None);
        assert_eq!(parse_heading_line("#"), None);
        assert_eq!(parse_heading_line("##   "), None);
        assert_eq!(parse_heading_line("plain text # not a heading"), None);
        assert_eq!(parse_heading_line(""), None);
    }

    #[test]
    fn test_heading_line_is_trimmed() {
        assert_eq!(parse_heading_line("   ### Deep  "), Some((3, "Deep")));
        assert_eq!(parse_heading_line("##\tTabbed"), Some((2, "Tabbed")));
        assert_eq!(parse_heading_line("###### Six"), Some((6, "Six")));
    }

    #[test]
    fn test_create_anchor() {
        assert_eq!(create_anchor("Hello, World!"), "hello-world");
        assert_eq!(create_anchor("Hello, World!"), create_anchor("Hello, World!"));
        assert_eq!(create_anchor("  Spaced   Out  "), "spaced-out");
        assert_eq!(create_anchor("(Optional) Setup"), "optional-setup");
        assert_eq!(create_anchor("Step 1 - Build"), "step-1---build");
        assert_eq!(create_anchor("What's new?"), "whats-new");
    }

    #[test]
    fn test_anchor_has_no_edge_hyphens_from_punctuation() {
        let anchor = create_anchor("!!! Release Notes ???");
        assert_eq!(anchor, "release-notes");
        assert!(anchor.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}
