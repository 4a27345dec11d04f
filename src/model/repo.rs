use std::path::{Path, PathBuf};

/// A repository as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub path: PathBuf,
    /// Final path component, or the whole path when there is none.
    pub label: String,
}

impl DisplayItem {
    pub fn new(path: PathBuf) -> Self {
        let label = label_for(&path);
        Self { path, label }
    }
}

fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
