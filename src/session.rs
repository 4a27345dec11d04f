// One pick-and-launch run: roots + history -> scan -> merge -> pick -> record -> launch.

use std::io;
use std::path::PathBuf;

use anyhow::Result as AnyResult;
use tracing::{info, warn};

use crate::{
    config::{global::{Paths, Settings}, roots::load_roots},
    error::{Error, Result},
    history,
    launch::Launcher,
    merge::merge,
    model::repo::DisplayItem,
    scan::{scan_repos, ScanOptions},
    ui::{Choice, Picker},
};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub paths: Paths,
    pub scan: ScanOptions,
    pub history_limit: usize,
    pub prompt: String,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> AnyResult<Self> {
        Ok(Self {
            paths: settings.paths()?,
            scan: settings.scan_options(),
            history_limit: settings.history_limit,
            prompt: settings.prompt.clone(),
        })
    }
}

pub struct Session<P, L> {
    config: SessionConfig,
    picker: P,
    launcher: L,
}

impl<P: Picker, L: Launcher> Session<P, L> {
    pub fn new(config: SessionConfig, picker: P, launcher: L) -> Self {
        Self { config, picker, launcher }
    }

    /// Returns the repository that was opened.
    pub fn run(&mut self) -> Result<PathBuf> {
        let paths = &self.config.paths;
        let roots = load_roots(&paths.roots_file)?;
        let prior = history::load(&paths.history_file);
        let scanned = scan_repos(&roots, &self.config.scan);
        info!(
            roots = roots.len(),
            history = prior.len(),
            scanned = scanned.len(),
            "collected repositories"
        );

        let repos = merge(&prior, &scanned);
        if repos.is_empty() {
            return Err(Error::NoRepositoriesFound);
        }
        let items: Vec<DisplayItem> = repos.into_iter().map(DisplayItem::new).collect();

        let index = match self.picker.choose(&self.config.prompt, &items).map_err(Error::Picker)? {
            Choice::Selected(i) => i,
            Choice::Cancelled => return Err(Error::SelectionCancelled),
        };
        let selected = items.into_iter().nth(index).map(|item| item.path).ok_or_else(|| {
            let msg = format!("no item at index {index}");
            Error::Picker(io::Error::new(io::ErrorKind::InvalidData, msg))
        })?;
        println!("Opening: {}", selected.display());

        let next = history::record_selection(&selected, &prior, self.config.history_limit);
        if let Err(e) = history::save(&next, &paths.history_file) {
            warn!("{e}");
        }

        self.launcher.launch(&selected)?;
        Ok(selected)
    }
}
