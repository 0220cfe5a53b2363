use adr_index::build::build_index;
use adr_index::config::Config;
use anyhow::{Context, Result};
use clap::{crate_version, App, Arg};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

fn main() -> Result<()> {
    let matches = App::new("adr-index")
        .version(crate_version!())
        .about("Generates a README index and per-tag index pages for Architectural Decision Records")
        .arg(
            Arg::with_name("root")
                .long("root")
                .value_name("DIR")
                .takes_value(true)
                .default_value(".")
                .help("The directory to search for `adr-index.yaml` from"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Loads this project file instead of searching for one"),
        )
        .arg(
            Arg::with_name("repo-url")
                .long("repo-url")
                .value_name("URL")
                .takes_value(true)
                .help("Overrides the repository URL that links point into"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs each document read and directory created"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("adr_index={}", level))),
        )
        .with_target(false)
        .init();

    let repo_url = match matches.value_of("repo-url") {
        Some(url) => Some(Url::parse(url).with_context(|| format!("Parsing `--repo-url` {}", url))?),
        None => None,
    };

    let config = match matches.value_of("config") {
        Some(path) => Config::from_project_file(&absolute(Path::new(path))?, repo_url)?,
        None => Config::from_directory(
            &absolute(Path::new(matches.value_of("root").unwrap_or(".")))?,
            repo_url,
        )?,
    };

    let summary = build_index(&config)?;
    info!(
        "Indexed {} ADRs from `{}` into {} tag pages",
        summary.documents,
        config.adr_directory.display(),
        summary.tags,
    );
    Ok(())
}

// Ancestor search needs a real path; `.` has no parent.
fn absolute(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("Resolving `{}`", path.display()))
}
