use crate::{
    CoreResult,
    power::{ProcessHandle, ProcessLauncher},
};

use tracing::{debug, info, instrument};

/// Toggles sleep prevention by owning the inhibitor child process.
///
/// The active flag is the presence of the child handle: a handle is stored
/// if and only if prevention is on, so the two cannot drift apart.
///
/// # Thread Safety
///
/// PowerManager is NOT thread-safe. It is designed to live on the UI main
/// thread, where the event loop already serializes every trigger.
pub struct PowerManager<L: ProcessLauncher> {
    launcher: L,
    child: Option<L::Handle>,
}

impl<L: ProcessLauncher> PowerManager<L> {
    /// Create an inactive manager around the given launcher.
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            child: None,
        }
    }

    /// Whether an inhibitor process is currently alive.
    pub fn is_active(&self) -> bool {
        self.child.is_some()
    }

    /// Start preventing sleep.
    ///
    /// No-op when already active; [`toggle`](Self::toggle) is the only
    /// transition entry point in the app, so the guard never fires there.
    ///
    /// # Errors
    ///
    /// Propagates the launch error untouched. No handle is stored and the
    /// state stays off; the caller may simply try again.
    #[instrument(skip(self))]
    pub fn activate(&mut self) -> CoreResult<()> {
        if self.child.is_some() {
            debug!("Sleep prevention already active");
            return Ok(());
        }

        let handle = self.launcher.launch()?;
        self.child = Some(handle);

        info!("Sleep prevention enabled");

        Ok(())
    }

    /// Stop preventing sleep.
    ///
    /// Idempotent: deactivating with no live child is a no-op. Termination
    /// is fire-and-forget; the child's exit is never awaited or verified.
    #[instrument(skip(self))]
    pub fn deactivate(&mut self) {
        if let Some(mut handle) = self.child.take() {
            handle.terminate();
            info!("Sleep prevention disabled");
        }
    }

    /// Flip the state and return the new active flag.
    ///
    /// # Errors
    ///
    /// Fails only when activation fails; deactivation is infallible.
    #[instrument(skip(self))]
    pub fn toggle(&mut self) -> CoreResult<bool> {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate()?;
        }

        Ok(self.is_active())
    }

    /// Pre-exit hook: make sure no inhibitor outlives the application.
    ///
    /// Equivalent to [`deactivate`](Self::deactivate) regardless of state.
    pub fn shutdown(&mut self) {
        debug!("Shutting down sleep prevention");
        self.deactivate();
    }
}

impl<L: ProcessLauncher> Drop for PowerManager<L> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
