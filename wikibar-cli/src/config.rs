use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WikibarConfig {
    /// Run configuration
    pub build: BuildConfig,
    /// Wiki and sidebar configuration (from wikibar-core)
    #[serde(flatten)]
    pub site: wikibar_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Folder of markdown files
    pub source: String,
    /// Sidebar file to write
    pub output: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            output: "_Sidebar.md".to_string(),
            config: "./wikibar.toml".to_string(),
        }
    }
}

// CLI argument id -> configuration key
const CLI_OVERRIDES: &[(&str, &str)] = &[
    ("source", "build.source"),
    ("output", "build.output"),
    ("config", "build.config"),
    ("repository", "wiki.repository"),
    ("base_url", "wiki.base_url"),
    ("groups", "sidebar.groups"),
];

impl WikibarConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (WIKIBAR_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        Self::load_with_env(args, None)
    }

    /// Same as [`WikibarConfig::load`], reading `WIKIBAR_*` variables from
    /// `env` instead of the process environment when it is given.
    fn load_with_env(args: &ArgMatches, env: Option<Map<String, String>>) -> Result<Self> {
        let defaults = Self::default();
        let config_file = args
            .try_get_one::<String>("config")
            .unwrap_or(None)
            .cloned()
            .unwrap_or_else(|| defaults.build.config.clone());

        // 1. Start with defaults
        let mut builder = ConfigBuilder::builder().add_source(ConfigBuilder::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        }

        // 3. Add environment variables with WIKIBAR_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WIKIBAR")
                .prefix_separator("_")
                .separator("__") // Use double underscore for nested keys
                .source(env),
        );

        // 4. Override with CLI arguments (highest priority)
        for (arg, key) in CLI_OVERRIDES {
            if let Some(value) = args.try_get_one::<String>(arg).unwrap_or(None) {
                builder = builder.set_override(*key, value.trim())?;
            }
        }

        let config = builder.build()?;
        let wikibar_config: WikibarConfig = config.try_deserialize()?;

        Ok(wikibar_config)
    }

    /// Get just the wiki configuration for passing to wikibar-core
    pub fn site_config(&self) -> &wikibar_core::config::Config {
        &self.site
    }

    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}
