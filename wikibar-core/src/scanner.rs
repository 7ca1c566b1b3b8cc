use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::document::Document;

/// The wiki's own sidebar page, never part of the input.
pub const SIDEBAR_PAGE: &str = "_Sidebar.md";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("could not find input directory {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub struct WikiScanner {
    source_dir: PathBuf,
    excluded: Vec<String>,
}

impl WikiScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
            excluded: vec![SIDEBAR_PAGE.to_lowercase()],
        }
    }

    /// Skip files with this name, compared case-insensitively.
    pub fn exclude<S: AsRef<str>>(mut self, file_name: S) -> Self {
        self.excluded.push(file_name.as_ref().to_lowercase());
        self
    }

    /// Every markdown page under the source directory, sorted by path.
    pub fn scan(&self) -> Result<Vec<Document>, ScanError> {
        debug!(dir = %self.source_dir.display(), "Scanning wiki pages");

        let mut documents = Vec::new();
        for path in self.markdown_files()? {
            let content = std::fs::read_to_string(&path).map_err(|source| ScanError::Read {
                path: path.clone(),
                source,
            })?;
            let relative_path = path
                .strip_prefix(&self.source_dir)
                .map_err(|_| ScanError::InvalidPath(path.clone()))?;

            let document = Document::parse(&content, relative_path);
            debug!(
                path = %relative_path.display(),
                title = %document.title,
                headings = document.headings.len(),
                "Parsed page"
            );
            documents.push(document);
        }

        Ok(documents)
    }

    fn markdown_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.source_dir.is_dir() {
            return Err(ScanError::MissingDirectory(self.source_dir.clone()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.source_dir) {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: self.source_dir.clone(),
                source,
            })?;
            let path = entry.path();

            if entry.file_type().is_file() && is_markdown(path) && !self.is_excluded(path) {
                paths.push(path.to_path_buf());
            }
        }
        // Plain string order, so `guides-old.md` comes before `guides/Setup.md`
        paths.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

        Ok(paths)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .is_some_and(|name| self.excluded.contains(&name))
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|ext| ext == "md").unwrap_or(false)
}
