//! Help bundle I/O and batch parsing of help dumps.
//!
//! A help dump directory holds one `<command>.txt` file per command. Each
//! file is parsed independently, so the directory is processed in parallel.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use help_explainer_core::HelpBundle;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::report::ParseRun;

/// File extension of help dumps picked up by [`parse_help_dir`].
pub const HELP_DUMP_EXTENSION: &str = "txt";

/// Loads a bundle from a JSON file.
pub fn load_bundle(path: impl AsRef<Path>) -> Result<HelpBundle> {
    let file = fs::File::open(path)?;
    let bundle = serde_json::from_reader(BufReader::new(file))?;
    Ok(bundle)
}

/// Writes a bundle as pretty-printed JSON.
pub fn save_bundle(bundle: &HelpBundle, path: impl AsRef<Path>) -> Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), bundle)?;
    Ok(())
}

/// Lists help dump files in `dir`, sorted by path.
pub fn collect_help_dumps(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == HELP_DUMP_EXTENSION)
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parses every help dump in `dir`, naming each command after its file stem.
///
/// Results are sorted by command name. The first unreadable file aborts the
/// batch.
pub fn parse_help_dir(dir: impl AsRef<Path>, config: &ParserConfig) -> Result<Vec<ParseRun>> {
    let paths = collect_help_dumps(&dir)?;
    debug!(dir = %dir.as_ref().display(), files = paths.len(), "Parsing help dumps");

    let mut runs = paths
        .par_iter()
        .map(|path| -> Result<ParseRun> {
            let help_text = fs::read_to_string(path)?;
            let command = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(crate::parse_help_text_with_report(
                &help_text, &command, config,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    runs.sort_by(|a, b| a.command.name.cmp(&b.command.name));
    info!(
        commands = runs.len(),
        with_issues = runs.iter().filter(|r| !r.report.issues.is_empty()).count(),
        "Parsed help dumps"
    );
    Ok(runs)
}
