// repopick — find a git repository under your source roots and open lazygit in it.
// Recently opened repositories are listed first.

mod action;
mod config;
mod error;
mod event;
mod history;
mod launch;
mod merge;
mod model;
mod scan;
mod session;
mod store;
mod tui;
mod ui;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use config::global::Settings;
use launch::CommandLauncher;
use session::{Session, SessionConfig};
use ui::TuiPicker;

const LOG_ENV: &str = "REPOPICK_LOG";

fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load().context("loading settings")?;
    let config = SessionConfig::from_settings(&settings)?;
    let launcher = CommandLauncher::from_argv(&settings.launcher)
        .context("`launcher` must name a program")?;

    let mut session = Session::new(config, TuiPicker, launcher);
    session.run()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
