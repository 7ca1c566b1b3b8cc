pub mod builder;
pub mod config;
pub mod document;
pub mod generate;
pub mod groups;
pub mod markdown;
pub mod scanner;
pub mod sidebar;

// Re-export main types
pub use builder::{Sidebar, SidebarBuilder};
pub use document::Document;
pub use generate::{GenerateError, Report, generate_sidebar};
pub use groups::{GroupIndex, GroupIndexError};
pub use markdown::{Heading, create_anchor, extract_headings};
pub use scanner::{ScanError, WikiScanner};
pub use sidebar::SidebarEntry;
