// Error kinds for a pick-and-launch run.
// Only some are fatal; the rest are logged where they happen and swallowed.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No usable root list. Fatal.
    #[error("failed to read root list {}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// History could not be read. Degrades to an empty history.
    #[error("failed to read history {}: {source}", path.display())]
    HistoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One entry could not be visited during a scan. Always skipped.
    #[error("skipping entry during scan: {0}")]
    ScanEntry(#[from] walkdir::Error),

    #[error("no git repositories found")]
    NoRepositoriesFound,

    #[error("selection cancelled")]
    SelectionCancelled,

    /// History could not be persisted. Best-effort, the launch still happens.
    #[error("failed to write history {}: {source}", path.display())]
    HistoryWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("picker failed")]
    Picker(#[source] io::Error),

    #[error("failed to start {program}")]
    LaunchFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    LauncherExited { program: String, status: ExitStatus },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
