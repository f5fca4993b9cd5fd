use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::processor::count_lines;
use crate::stats::RunTotals;
use ignore::WalkBuilder;
use std::path::Path;

/// Why a file was left out of the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip<'a> {
    /// Containing directory matched a deny-list entry.
    DeniedDir(&'a str),
    /// Extension missing or not in the allow-list.
    Extension,
}

/// Extension of a file name: the text after the last `.`, ignoring leading
/// dots, so `.bat` and `..bat` have none while `.config.lua` has `lua`.
#[must_use]
pub fn extension_of(name: &str) -> Option<&str> {
    name.trim_start_matches('.')
        .rsplit_once('.')
        .map(|(_, ext)| ext)
}

/// Decide whether `path` is counted under `config`.
///
/// The deny-list is checked against the full containing directory as given
/// (root prefix included), then the extension of the file name is looked up
/// as-is.
pub fn classify<'c>(path: &Path, config: &'c Config) -> std::result::Result<(), Skip<'c>> {
    let dir = path
        .parent()
        .map(|p| p.to_string_lossy())
        .unwrap_or_default();
    if let Some(entry) = config.denied_by(&dir) {
        return Err(Skip::DeniedDir(entry));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match extension_of(&name) {
        Some(ext) if config.is_allowed_ext(ext) => Ok(()),
        _ => Err(Skip::Extension),
    }
}

/// Sequential recursive walk of `root`, counting every qualifying file.
///
/// No gitignore or hidden-file filtering is applied and directory links are
/// not descended into. Symlinked files are counted like regular files; a
/// dangling link fails on read. Visiting order is whatever the directory
/// listing yields.
///
/// # Errors
///
/// Returns [`EngineError::NotADirectory`] if `root` is not a directory. Any
/// traversal or read error aborts the walk and the partial totals are lost.
pub fn walk(root: &Path, config: &Config) -> Result<RunTotals> {
    if !root.is_dir() {
        return Err(EngineError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut totals = RunTotals::new();
    for entry in builder.build() {
        let entry = entry?;
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir())
            || (entry.path_is_symlink() && entry.path().is_dir());
        if is_dir {
            continue;
        }

        let path = entry.path();
        match classify(path, config) {
            Ok(()) => {
                let lines = count_lines(path, config)?;
                log::trace!("{lines:>8}  {}", path.display());
                totals.add_file(lines);
            }
            Err(Skip::DeniedDir(pattern)) => {
                log::debug!("skip {} (folder matches '{pattern}')", path.display());
            }
            Err(Skip::Extension) => {
                log::debug!("skip {} (extension not counted)", path.display());
            }
        }
    }

    Ok(totals)
}
