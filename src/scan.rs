// Repository discovery below a set of roots.
// ref: walkdir — https://docs.rs/walkdir/

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend through symlinked directories. Loops are reported by walkdir
    /// as entry errors and skipped like any other.
    pub follow_symlinks: bool,
    /// Depth limit below each root (root itself is depth 0).
    pub max_depth: Option<usize>,
}

/// What to do with a directory after looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Descend,
    Prune,
}

/// A directory is a repository root when it has a `.git` child that is a directory.
pub fn is_repo_root(dir: &Path) -> bool {
    dir.join(".git").is_dir()
}

pub fn visit(dir: &Path) -> Visit {
    if is_repo_root(dir) {
        Visit::Prune
    } else {
        Visit::Descend
    }
}

/// Walk every root in order and collect repository roots, duplicate-free,
/// in discovery order. Never fails: unreadable entries and missing roots
/// just contribute nothing.
pub fn scan_repos(roots: &[PathBuf], opts: &ScanOptions) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    let mut seen = HashSet::new();
    for root in roots {
        let before = repos.len();
        scan_root(root, opts, &mut repos, &mut seen);
        debug!(root = %root.display(), found = repos.len() - before, "scanned root");
    }
    repos
}

fn scan_root(
    root: &Path,
    opts: &ScanOptions,
    repos: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) {
    let mut walker = WalkDir::new(root)
        .follow_links(opts.follow_symlinks)
        .sort_by_file_name();
    if let Some(depth) = opts.max_depth {
        walker = walker.max_depth(depth);
    }

    // Explicit loop so a found repository can cut off its own subtree.
    let mut it = walker.into_iter();
    loop {
        let entry = match it.next() {
            None => break,
            Some(Err(e)) => {
                debug!("{}", Error::from(e));
                continue;
            }
            Some(Ok(entry)) => entry,
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        match visit(entry.path()) {
            Visit::Descend => {}
            Visit::Prune => {
                let path = entry.into_path();
                if seen.insert(path.clone()) {
                    repos.push(path);
                }
                it.skip_current_dir();
            }
        }
    }
}
