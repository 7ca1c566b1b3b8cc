use crate::document::Document;
use crate::markdown::Heading;

/// Sub-headings are listed relative to H2.
pub const BASELINE_DEPTH: usize = 2;

/// The rendered, collapsible sidebar block for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub title: String,
    /// Resolved group, `None` when the page belongs to no declared group
    pub group: Option<String>,
    lines: Vec<String>,
}

impl SidebarEntry {
    pub fn new(document: &Document, base_url: &str, group: Option<String>) -> Self {
        let href = document.url(base_url);

        Self {
            title: document.title.clone(),
            group,
            lines: render_block(&document.title, &href, &document.headings),
        }
    }

    /// Block text; ends with a blank separator line.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Renders a `<details>` block linking to the page, with a nested `<ul>`
/// tree of links to each sub-heading.
///
/// Going deeper opens a single list no matter how many levels are skipped.
/// Going back up closes one list per level, but never more lists than are
/// open, so opening and closing tags always balance.
pub fn render_block(title: &str, href: &str, headings: &[Heading]) -> Vec<String> {
    let mut lines = vec![format!(
        "<details><summary><a href=\"{href}\">{title}</a></summary>"
    )];

    if headings.is_empty() {
        lines.push("</details>".to_string());
        lines.push("\n".to_string());
        return lines;
    }

    lines.push(format!("{}<ul>", indent(1)));
    let mut open_lists = 1;
    let mut prior = BASELINE_DEPTH;
    let mut item_indent = indent(BASELINE_DEPTH);

    for heading in headings {
        let depth = heading.depth;

        if depth > prior {
            lines.push(format!("{}<ul>", indent(depth)));
            open_lists += 1;
            item_indent = indent(depth + 1);
        } else if depth < prior {
            let closes = (prior - depth).min(open_lists);
            for level in (depth + 1..=prior).rev().take(closes) {
                lines.push(format!("{}</ul>", indent(level)));
            }
            open_lists -= closes;
            item_indent = indent(depth);
        }
        prior = depth;

        let anchor = heading.anchor();
        lines.push(format!(
            "{item_indent}<li><a href=\"{href}#{anchor}\">{}</a></li>",
            heading.text
        ));
    }

    for level in (1..=open_lists).rev() {
        lines.push(format!("{}</ul>", indent(level)));
    }
    lines.push("</details>".to_string());
    lines.push("\n".to_string());

    lines
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
