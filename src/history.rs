// Recently opened repositories, most recent first, capped.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Error;
use crate::merge::merge;
use crate::store;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Load history from `path`. Never fails: a missing file is an empty
/// history, anything else is logged and treated the same way.
pub fn load(path: &Path) -> Vec<PathBuf> {
    match store::read_lines(path) {
        Ok(lines) => {
            let entries: Vec<PathBuf> = lines.into_iter().map(PathBuf::from).collect();
            // hand-edited files may repeat entries
            merge(&entries, &[])
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no history yet");
            Vec::new()
        }
        Err(source) => {
            let err = Error::HistoryUnreadable { path: path.to_path_buf(), source };
            warn!("{err}, continuing with empty history");
            Vec::new()
        }
    }
}

/// New history with `selected` in front, its previous occurrences removed,
/// cut to at most `cap` entries (oldest dropped first). `cap` below 1 is
/// treated as 1 so the selection itself is always kept.
pub fn record_selection<T: PartialEq + Clone>(selected: &T, prior: &[T], cap: usize) -> Vec<T> {
    std::iter::once(selected)
        .chain(prior.iter().filter(|entry| *entry != selected))
        .take(cap.max(1))
        .cloned()
        .collect()
}

/// Persist `entries`, creating the parent directory if needed.
pub fn save(entries: &[PathBuf], path: &Path) -> Result<(), Error> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        store::write_lines(entries, path)
    };
    write().map_err(|source| Error::HistoryWriteFailed { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[test]
    fn selection_moves_to_front() {
        let prior = ["/x", "/y", "/z"];
        assert_eq!(record_selection(&"/y", &prior, 50), vec!["/y", "/x", "/z"]);
    }

    #[test]
    fn new_selection_is_prepended() {
        let prior = ["/x", "/y"];
        assert_eq!(record_selection(&"/new", &prior, 50), vec!["/new", "/x", "/y"]);
    }

    #[test]
    fn cap_drops_oldest_entries() {
        let prior: Vec<String> = (0..60).map(|i| format!("/r{i}")).collect();
        let next = record_selection(&"/fresh".to_string(), &prior, DEFAULT_HISTORY_LIMIT);
        assert_eq!(next.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(next[0], "/fresh");
        assert_eq!(next[1], "/r0");
        assert_eq!(next[49], "/r48");
    }

    #[test]
    fn zero_cap_still_keeps_selection() {
        assert_eq!(record_selection(&"/a", &["/b"], 0), vec!["/a"]);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let temp = TempDir::new().expect("tempdir");
        assert!(load(&temp.path().join("history")).is_empty());
    }

    #[test]
    fn load_unreadable_path_is_empty() {
        let temp = TempDir::new().expect("tempdir");
        // a directory cannot be read as a file
        assert!(load(temp.path()).is_empty());
    }

    #[test]
    fn load_drops_repeated_entries() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history");
        std::fs::write(&path, "/a\n/b\n/a\n\n/c\n").expect("write fixture");
        let expected = vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")];
        assert_eq!(load(&path), expected);
    }

    #[test]
    fn full_history_file_stays_at_cap_after_new_selection() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history");
        let original: Vec<String> = (0..51).map(|i| format!("/repos/r{i}")).collect();
        store::write_lines(&original, &path).expect("seed history");

        let prior = load(&path);
        assert_eq!(prior.len(), 51);
        let next = record_selection(&PathBuf::from("/repos/new"), &prior, DEFAULT_HISTORY_LIMIT);
        save(&next, &path).expect("save");

        let written = store::read_lines(&path).expect("read back");
        assert_eq!(written.len(), 50);
        assert_eq!(written[0], "/repos/new");
        let expected: Vec<OsString> = original[..49].iter().map(OsString::from).collect();
        assert_eq!(written[1..].to_vec(), expected);
    }

    #[test]
    fn save_creates_parent_directory() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("state/repopick/history");
        save(&[PathBuf::from("/a")], &path).expect("save");
        assert_eq!(std::fs::read_to_string(&path).expect("raw"), "/a\n");
    }

    #[test]
    fn save_into_unwritable_location_reports_write_failure() {
        let temp = TempDir::new().expect("tempdir");
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "file").expect("write blocker");

        let err = save(&[PathBuf::from("/a")], &blocker.join("history")).unwrap_err();
        assert!(matches!(err, Error::HistoryWriteFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_entry_does_not_wipe_history() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history");
        std::fs::write(&path, b"/a\n/b\xff\n/c\n").expect("write fixture");

        let odd = PathBuf::from(std::ffi::OsStr::from_bytes(b"/b\xff"));
        assert_eq!(load(&path), vec![PathBuf::from("/a"), odd.clone(), PathBuf::from("/c")]);

        let next = record_selection(&PathBuf::from("/c"), &load(&path), DEFAULT_HISTORY_LIMIT);
        save(&next, &path).expect("save");
        assert_eq!(std::fs::read(&path).expect("raw"), b"/c\n/a\n/b\xff\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_survives_save_and_load() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history");
        let repo = PathBuf::from(std::ffi::OsStr::from_bytes(b"/repos/caf\xe9"));

        save(&[repo.clone()], &path).expect("save");
        assert_eq!(load(&path), vec![repo]);
    }
}
