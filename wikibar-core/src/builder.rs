use std::collections::HashSet;
use std::io::Write;

use tracing::{debug, warn};

use crate::document::Document;
use crate::groups::GroupIndex;
use crate::sidebar::SidebarEntry;

pub const DEFAULT_GROUP: &str = "Ungrouped";

pub struct SidebarBuilder {
    base_url: String,
    groups: Option<GroupIndex>,
    ungrouped_label: String,
    documents: Vec<Document>,
}

impl Default for SidebarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarBuilder {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            groups: None,
            ungrouped_label: DEFAULT_GROUP.to_string(),
            documents: Vec::new(),
        }
    }

    /// Prefix of every link, e.g. `https://github.com/org/repo/wiki/`
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn groups(mut self, groups: Option<GroupIndex>) -> Self {
        self.groups = groups;
        self
    }

    pub fn ungrouped_label<S: Into<String>>(mut self, label: S) -> Self {
        self.ungrouped_label = label.into();
        self
    }

    // Documents are emitted in the order they are added
    pub fn add_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    pub fn add_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents.extend(documents);
        self
    }

    pub fn build(self) -> Sidebar {
        let mut seen = HashSet::new();
        let entries = self
            .documents
            .iter()
            .map(|doc| {
                if !seen.insert(doc.title.as_str()) && self.groups.is_some() {
                    warn!(
                        title = %doc.title,
                        path = %doc.path.display(),
                        "Duplicate page title, only the first page with this title can be grouped"
                    );
                }

                let group = self
                    .groups
                    .as_ref()
                    .and_then(|g| g.group_for(&doc.title))
                    .map(str::to_string);
                debug!(
                    title = %doc.title,
                    group = ?group,
                    headings = doc.headings.len(),
                    "Built sidebar entry"
                );

                SidebarEntry::new(doc, &self.base_url, group)
            })
            .collect();

        Sidebar {
            entries,
            groups: self.groups,
            ungrouped_label: self.ungrouped_label,
        }
    }
}

/// The finished sidebar, ready to be written out.
#[derive(Debug)]
pub struct Sidebar {
    entries: Vec<SidebarEntry>,
    groups: Option<GroupIndex>,
    ungrouped_label: String,
}

impl Sidebar {
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn ungrouped(&self) -> impl Iterator<Item = &SidebarEntry> {
        self.entries.iter().filter(|e| e.group.is_none())
    }

    /// Output pieces in emission order: a `## group` header line or one
    /// entry's block.
    pub fn chunks(&self) -> Vec<String> {
        let Some(groups) = &self.groups else {
            return self.entries.iter().map(SidebarEntry::render).collect();
        };

        let mut chunks = Vec::new();
        for (name, members) in groups.iter() {
            chunks.push(group_header(name));
            for member in members {
                match self.entries.iter().find(|e| &e.title == member) {
                    Some(entry) => chunks.push(entry.render()),
                    None => debug!(group = name, title = %member, "No page for group member"),
                }
            }
        }

        let mut ungrouped = self.ungrouped().peekable();
        if ungrouped.peek().is_some() {
            chunks.push(group_header(&self.ungrouped_label));
            chunks.extend(ungrouped.map(SidebarEntry::render));
        }

        chunks
    }

    pub fn render(&self) -> String {
        self.chunks().concat()
    }

    /// Writes the sidebar one chunk at a time.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> std::io::Result<()> {
        for chunk in self.chunks() {
            sink.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }
}

fn group_header(name: &str) -> String {
    format!("## {name}\n")
}
