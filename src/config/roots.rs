// Root list: one scan root per line, `~` expanded, glob patterns allowed.

use std::path::{Path, PathBuf};

use glob::glob;
use tracing::warn;

use crate::config::global::expand_home;
use crate::error::Error;
use crate::store;

/// Read and expand the root list. Any read failure is fatal for the run.
pub fn load_roots(path: &Path) -> Result<Vec<PathBuf>, Error> {
    let lines = store::read_lines(path)
        .map_err(|source| Error::ConfigUnreadable { path: path.to_path_buf(), source })?;
    Ok(lines.into_iter().flat_map(expand_root).collect())
}

fn is_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Expand one line into zero or more roots. An existing directory is taken
/// literally even when its name contains glob metacharacters.
pub fn expand_root(line: impl AsRef<Path>) -> Vec<PathBuf> {
    let line = line.as_ref();
    let expanded = expand_home(line);
    if !line.to_str().is_some_and(is_pattern) || expanded.is_dir() {
        return vec![expanded];
    }

    let pattern = expanded.to_string_lossy();
    let paths = match glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            warn!(pattern = %pattern, "invalid root pattern: {e}");
            return vec![];
        }
    };
    let dirs: Vec<PathBuf> = paths.filter_map(|p| p.ok()).filter(|p| p.is_dir()).collect();
    if dirs.is_empty() {
        warn!(pattern = %pattern, "root pattern matched no directories");
    }
    dirs
}
