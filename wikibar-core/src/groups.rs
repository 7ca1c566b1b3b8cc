use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum GroupIndexError {
    #[error("could not find group definition file {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not read group definition file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in group definition: {0}")]
    Parsing(#[from] serde_json::Error),
}

/// Group name to the titles of the pages listed under it.
///
/// Both the groups and their members keep the order of the definition file:
///
/// ```json
/// {
///   "Getting Started": ["Home", "Install"],
///   "Reference": ["Config", "CLI"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GroupIndex {
    groups: IndexMap<String, Vec<String>>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GroupIndexError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GroupIndexError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, GroupIndexError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Appends a group, or extends it if the name is already declared.
    pub fn with_group<S, I, M>(mut self, name: S, members: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.groups
            .entry(name.into())
            .or_default()
            .extend(members.into_iter().map(Into::into));
        self
    }

    /// First group, in declared order, listing `title`. Matching is exact.
    pub fn group_for(&self, title: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|m| m == title))
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"{
        "Zeta": ["Home", "Install"],
        "Alpha": ["Config"],
        "Empty": []
    }"#;

    #[test]
    fn test_declared_order_is_kept() {
        let index = GroupIndex::from_json(DEFINITION).unwrap();
        let groups: Vec<(&str, &[String])> = index.iter().collect();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, "Zeta");
        assert_eq!(groups[0].1, ["Home", "Install"]);
        assert_eq!(groups[1].0, "Alpha");
        assert_eq!(groups[2], ("Empty", &[][..]));
    }

    #[test]
    fn test_group_for() {
        let index = GroupIndex::from_json(DEFINITION).unwrap();

        assert_eq!(index.group_for("Install"), Some("Zeta"));
        assert_eq!(index.group_for("Config"), Some("Alpha"));
        assert_eq!(index.group_for("config"), None);
        assert_eq!(index.group_for("Missing"), None);
    }

    #[test]
    fn test_first_group_wins_on_duplicate_membership() {
        let index = GroupIndex::new()
            .with_group("First", ["Shared"])
            .with_group("Second", ["Shared", "Other"]);

        assert_eq!(index.group_for("Shared"), Some("First"));
        assert_eq!(index.group_for("Other"), Some("Second"));
    }

    #[test]
    fn test_invalid_json() {
        let err = GroupIndex::from_json("{ \"Group\": [\"a\", ").unwrap_err();
        assert!(matches!(err, GroupIndexError::Parsing(_)));

        // Members must be a list of titles
        let err = GroupIndex::from_json(r#"{ "Group": "Home" }"#).unwrap_err();
        assert!(matches!(err, GroupIndexError::Parsing(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.json");

        let err = GroupIndex::load(&path).unwrap_err();
        assert!(matches!(err, GroupIndexError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.json");
        std::fs::write(&path, DEFINITION).unwrap();

        let index = GroupIndex::load(&path).unwrap();
        assert_eq!(index.group_for("Home"), Some("Zeta"));
    }
}
