//! Coffee Core Library
//!
//! Sleep-prevention toggle built on the system `caffeinate` binary.
//!
//! # Example
//!
//! ```no_run
//! use coffee_core::{CaffeinateLauncher, CoreResult, PowerManager};
//!
//! fn main() -> CoreResult<()> {
//!     let mut manager = PowerManager::new(CaffeinateLauncher::default());
//!
//!     manager.toggle()?; // spawns `caffeinate -d`
//!     assert!(manager.is_active());
//!     manager.toggle()?; // terminates it
//!
//!     Ok(())
//! }
//! ```

mod error;
mod power;

pub use {
    error::{PowerError, Result as CoreResult},
    power::{CaffeinateLauncher, PowerManager, ProcessHandle, ProcessLauncher},
};

#[cfg(test)]
mod tests;
