use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::builder::SidebarBuilder;
use crate::config::{Config, ConfigError};
use crate::groups::GroupIndex;
use crate::scanner::{ScanError, WikiScanner};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not find input file directory: {}", .0.display())]
    MissingSourceDir(PathBuf),
    #[error("could not open output file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub pages: usize,
    pub ungrouped: usize,
    pub grouped: bool,
}

/// Scans `source_dir` and writes the sidebar to `output_path`.
///
/// The output file is created before anything is scanned. A missing or broken
/// group definition is logged and the sidebar is written ungrouped.
pub fn generate_sidebar(
    config: &Config,
    source_dir: &Path,
    output_path: &Path,
) -> Result<Report, GenerateError> {
    let base_url = config.wiki.base_url()?;

    if !source_dir.is_dir() {
        return Err(GenerateError::MissingSourceDir(source_dir.to_path_buf()));
    }

    let output_error = |source| GenerateError::Output {
        path: output_path.to_path_buf(),
        source,
    };
    let file = File::create(output_path).map_err(output_error)?;

    let groups = config.sidebar.groups.as_deref().and_then(load_groups);

    let mut scanner = WikiScanner::new(source_dir);
    if let Some(name) = output_path.file_name() {
        scanner = scanner.exclude(name.to_string_lossy());
    }
    let documents = scanner.scan()?;

    let grouped = groups.is_some();
    let sidebar = SidebarBuilder::new()
        .base_url(base_url)
        .groups(groups)
        .ungrouped_label(&config.sidebar.ungrouped_label)
        .add_documents(documents)
        .build();

    let mut sink = BufWriter::new(file);
    sidebar.write_to(&mut sink).map_err(output_error)?;
    sink.flush().map_err(output_error)?;

    let report = Report {
        output: output_path.to_path_buf(),
        pages: sidebar.entries().len(),
        ungrouped: if grouped { sidebar.ungrouped().count() } else { 0 },
        grouped,
    };
    info!(
        output = %report.output.display(),
        pages = report.pages,
        ungrouped = report.ungrouped,
        "Sidebar written"
    );

    Ok(report)
}

fn load_groups(path: &Path) -> Option<GroupIndex> {
    match GroupIndex::load(path) {
        Ok(groups) => Some(groups),
        Err(e) => {
            warn!("{e}. Files will not be grouped.");
            None
        }
    }
}
