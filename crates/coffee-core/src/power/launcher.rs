//! Launcher for the system sleep-inhibitor process.
//!
//! Spawns `/usr/bin/caffeinate -d` as a long-running child that blocks
//! display idle sleep until it is terminated. The launcher sits behind a
//! small trait pair so the controller can be exercised in tests without
//! touching the OS.

use crate::{CoreResult, PowerError};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Default path of the macOS idle-sleep inhibitor.
pub(crate) const CAFFEINATE_PATH: &str = "/usr/bin/caffeinate";

/// Default arguments: `-d` prevents the display from sleeping.
pub(crate) const CAFFEINATE_ARGS: &[&str] = &["-d"];

/// Owned handle to a spawned inhibitor process.
pub trait ProcessHandle {
    /// Send a termination signal without waiting for exit.
    fn terminate(&mut self);
}

/// Spawns the long-running inhibitor process.
pub trait ProcessLauncher {
    /// Handle type returned by a successful launch.
    type Handle: ProcessHandle;

    /// Spawn the configured executable with its argument list.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::LaunchFailed`] if the process could not be
    /// started (missing executable, permission denied, resource limits).
    fn launch(&mut self) -> CoreResult<Self::Handle>;
}

/// Launches the system `caffeinate` binary.
pub struct CaffeinateLauncher {
    path: PathBuf,
    args: Vec<String>,
}

impl CaffeinateLauncher {
    /// Create a launcher for an arbitrary executable and argument list.
    pub fn new<P: AsRef<Path>>(path: P, args: Vec<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            args,
        }
    }

    /// Executable this launcher spawns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.path.display(), self.args.join(" "))
    }
}

impl Default for CaffeinateLauncher {
    /// `/usr/bin/caffeinate -d`: block display idle sleep until terminated.
    fn default() -> Self {
        Self::new(
            CAFFEINATE_PATH,
            CAFFEINATE_ARGS.iter().map(|arg| (*arg).to_owned()).collect(),
        )
    }
}

impl ProcessLauncher for CaffeinateLauncher {
    type Handle = Child;

    #[instrument(skip(self))]
    fn launch(&mut self) -> CoreResult<Child> {
        let child = Command::new(&self.path)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PowerError::LaunchFailed {
                command: self.command_line(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(pid = child.id(), command = %self.command_line(), "Inhibitor process started");

        Ok(child)
    }
}

impl ProcessHandle for Child {
    /// Fire-and-forget termination: no wait, no exit-status check.
    /// The child is reaped by the OS when this process exits.
    fn terminate(&mut self) {
        if let Err(e) = self.kill() {
            debug!(pid = self.id(), error = %e, "Termination signal not delivered");
        }
    }
}
