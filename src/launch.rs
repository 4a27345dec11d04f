// Hand the terminal to an external program inside the chosen repository.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;

pub trait Launcher {
    fn launch(&mut self, dir: &Path) -> Result<(), Error>;
}

/// Runs `program args...` in the repository with inherited stdio and waits.
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
}

impl CommandLauncher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// First element is the program, the rest are arguments.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

impl Launcher for CommandLauncher {
    fn launch(&mut self, dir: &Path) -> Result<(), Error> {
        debug!(program = %self.program, dir = %dir.display(), "launching");
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::LaunchFailed { program: self.program.clone(), source })?;
        if !status.success() {
            return Err(Error::LauncherExited { program: self.program.clone(), status });
        }
        Ok(())
    }
}
