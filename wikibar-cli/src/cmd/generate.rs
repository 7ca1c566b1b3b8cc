use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing::debug;
use wikibar_core::generate_sidebar;
use crate::config::WikibarConfig;

pub fn add_generate_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("source")
                .value_name("MARKDOWN_FOLDER")
                .help("Path to the folder of markdown files [default: .]")
        )
        .arg(
            Arg::new("repository")
                .value_name("REPOSITORY")
                .help("Path to the github repository in the form user_name/repos_name")
        )
        .arg(
            Arg::new("groups")
                .short('s')
                .long("groups")
                .value_name("FILE")
                .help("Optional JSON group definition file")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Sidebar markdown result file [default: _Sidebar.md]")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./wikibar.toml]")
        )
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .value_name("URL")
                .help("Link prefix to use instead of https://github.com/<REPOSITORY>/wiki/")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
}

pub fn make_command() -> Command {
    add_generate_args(Command::new("wikibar"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a GitHub wiki sidebar from markdown files")
        .after_help("Pages are grouped and ordered by the optional JSON group definition.")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let wikibar_config = WikibarConfig::load(args)?;
    let build_config = wikibar_config.build_config();
    debug!(config = ?wikibar_config, "Loaded configuration");

    let source_dir = Path::new(&build_config.source);
    let output_path = Path::new(&build_config.output);

    let report = generate_sidebar(wikibar_config.site_config(), source_dir, output_path)?;

    println!("Sidebar generated: {}", report.output.display());

    Ok(())
}
