use std::io::{self, Write};
use std::path::Path;

use pkgfind_core::{PathFinder, SearchConfig, SearchOptions, SearchResult};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// One match as emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct MatchRecord {
    pub path: String,
    pub name: String,
}

impl MatchRecord {
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

pub fn run_find(options: SearchOptions, format: OutputFormat) -> Result<SearchResult, CliError> {
    let config = SearchConfig::resolve(options)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    find_to(config, format, &mut out)
}

/// Search and write every match to `out` as it is discovered.
pub fn find_to<W: Write>(
    config: SearchConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<SearchResult, CliError> {
    let finder = PathFinder::new(config);
    let result = finder.find(|path| {
        write_match(&mut *out, path, format)?;
        out.flush()
    })?;

    tracing::debug!(
        matches = result.matches.len(),
        visited_dirs = result.visited_dirs,
        "Search complete"
    );
    Ok(result)
}

pub fn format_match(path: &Path, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(path.display().to_string()),
        OutputFormat::Json => serde_json::to_string(&MatchRecord::from_path(path)),
    }
}

fn write_match<W: Write>(out: &mut W, path: &Path, format: OutputFormat) -> io::Result<()> {
    let line = format_match(path, format).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}
