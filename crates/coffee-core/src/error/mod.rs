use error_location::ErrorLocation;
use thiserror::Error;

/// Sleep-prevention errors with source location tracking.
#[derive(Error, Debug)]
pub enum PowerError {
    /// The inhibitor process could not be spawned.
    ///
    /// Covers a missing executable, permission denial, and resource
    /// exhaustion alike; callers log it and leave prevention off.
    #[error("Failed to launch {command}: {source} {location}")]
    LaunchFailed {
        /// The command line that failed to spawn.
        command: String,
        /// Underlying spawn error from the OS.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`PowerError`].
pub type Result<T> = std::result::Result<T, PowerError>;
