// ~/.config/repopick/config.toml
// ref: toml crate — https://docs.rs/toml/

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::scan::ScanOptions;

const APP_DIR: &str = "repopick";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Plain-text list of scan roots, one per line.
    pub roots_file: Option<PathBuf>,
    /// Plain-text history, most recent first.
    pub history_file: Option<PathBuf>,
    pub history_limit: usize,
    /// Program and arguments run inside the chosen repository.
    pub launcher: Vec<String>,
    pub prompt: String,
    pub follow_symlinks: bool,
    pub max_depth: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roots_file: None,
            history_file: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            launcher: vec!["lazygit".to_string()],
            prompt: "Select a repository > ".to_string(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Resolved locations of the two line files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub roots_file: PathBuf,
    pub history_file: PathBuf,
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path().context("no config dir")?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Self = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        if settings.launcher.is_empty() {
            bail!("{}: `launcher` must name a program", path.display());
        }
        Ok(settings)
    }

    pub fn paths(&self) -> Result<Paths> {
        let roots_file = match &self.roots_file {
            Some(p) => expand_home(p),
            None => dirs::config_dir().context("no config dir")?.join(APP_DIR).join("roots"),
        };
        let history_file = match &self.history_file {
            Some(p) => expand_home(p),
            None => dirs::data_dir().context("no data dir")?.join(APP_DIR).join("history"),
        };
        Ok(Paths { roots_file, history_file })
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_symlinks: self.follow_symlinks,
            max_depth: self.max_depth,
        }
    }
}

/// Expand a leading `~` or `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else { return path.to_path_buf() };
    if let Some(home) = dirs::home_dir() {
        if s == "~" {
            return home;
        }
        if let Some(rest) = s.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
