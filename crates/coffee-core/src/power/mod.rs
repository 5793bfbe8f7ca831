mod launcher;
mod manager;

pub use {
    launcher::{CaffeinateLauncher, ProcessHandle, ProcessLauncher},
    manager::PowerManager,
};
