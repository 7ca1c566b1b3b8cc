use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_GROUP;
use crate::document::join_url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parsing(#[from] toml::de::Error),
    #[error("no repository given, expected user_name/repos_name or an explicit base_url")]
    MissingRepository,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub wiki: WikiConfig,
    pub sidebar: SidebarConfig,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

/// Where the wiki lives.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct WikiConfig {
    pub host: String,
    /// `user_name/repos_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Used verbatim instead of `host` + `repository` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            host: "https://github.com/".to_string(),
            repository: None,
            base_url: None,
        }
    }
}

impl WikiConfig {
    /// Absolute URL every sidebar link starts with.
    ///
    /// GitHub wiki previews and the live wiki disagree on relative links, so
    /// links are always absolute.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.base_url {
            return Ok(url.clone());
        }

        match self.repository.as_deref().map(str::trim) {
            Some(repo) if !repo.is_empty() => {
                Ok(join_url(&[self.host.as_str(), repo, "/wiki/"]))
            }
            _ => Err(ConfigError::MissingRepository),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SidebarConfig {
    /// JSON file mapping group names to page titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<PathBuf>,
    pub ungrouped_label: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            groups: None,
            ungrouped_label: DEFAULT_GROUP.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_repository() {
        let wiki = WikiConfig {
            repository: Some("jeff/sidebar".to_string()),
            ..Default::default()
        };

        assert_eq!(wiki.base_url().unwrap(), "https://github.com/jeff/sidebar/wiki/");
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let wiki = WikiConfig {
            repository: Some("jeff/sidebar".to_string()),
            base_url: Some("https://example.com/org/repo/wiki/".to_string()),
            ..Default::default()
        };

        assert_eq!(wiki.base_url().unwrap(), "https://example.com/org/repo/wiki/");
    }

    #[test]
    fn test_missing_repository() {
        let wiki = WikiConfig {
            repository: Some("  ".to_string()),
            ..Default::default()
        };

        assert!(matches!(wiki.base_url(), Err(ConfigError::MissingRepository)));
    }

    #[test]
    fn test_read_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikibar.toml");
        std::fs::write(
            &path,
            concat!(
                "[wiki]\n",
                "host = \"https://git.example.com\"\n",
                "repository = \"team/docs\"\n",
                "\n",
                "[sidebar]\n",
                "groups = \"groups.json\"\n",
            ),
        )
        .unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(
            config.wiki.base_url().unwrap(),
            "https://git.example.com/team/docs/wiki/"
        );
        assert_eq!(config.sidebar.groups, Some(PathBuf::from("groups.json")));
        assert_eq!(config.sidebar.ungrouped_label, "Ungrouped");
    }

    #[test]
    fn test_read_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikibar.toml");
        std::fs::write(&path, "[wiki\n").unwrap();

        assert!(matches!(Config::read(&path), Err(ConfigError::Parsing(_))));
    }
}
