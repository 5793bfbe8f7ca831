use coffee_core::PowerError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the coffee binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Sleep-prevention error from coffee-core.
    #[error("Power error: {source} {location}")]
    Power {
        /// The underlying sleep-prevention error.
        #[source]
        source: PowerError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to build or update the tray icon or its menu.
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<PowerError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<PowerError> for AppError {
    #[track_caller]
    fn from(source: PowerError) -> Self {
        AppError::Power {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
