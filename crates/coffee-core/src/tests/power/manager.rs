use crate::{
    CoreResult, PowerError,
    power::{PowerManager, ProcessHandle, ProcessLauncher},
};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU32, Ordering},
    },
};

use error_location::ErrorLocation;

/// Launch and termination counters shared between a mock launcher,
/// its handles, and the test body.
#[derive(Clone, Default)]
struct LaunchLog {
    launches: Arc<AtomicU32>,
    terminations: Arc<AtomicU32>,
}

impl LaunchLog {
    fn launch_count(&self) -> u32 {
        self.launches.load(Ordering::SeqCst)
    }

    fn termination_count(&self) -> u32 {
        self.terminations.load(Ordering::SeqCst)
    }
}

struct MockHandle {
    log: LaunchLog,
}

impl ProcessHandle for MockHandle {
    fn terminate(&mut self) {
        self.log.terminations.fetch_add(1, Ordering::SeqCst);
    }
}

struct MockLauncher {
    log: LaunchLog,
    fail_next: Arc<AtomicBool>,
}

impl MockLauncher {
    fn new() -> (Self, LaunchLog, Arc<AtomicBool>) {
        let log = LaunchLog::default();
        let fail_next = Arc::new(AtomicBool::new(false));
        (
            Self {
                log: log.clone(),
                fail_next: Arc::clone(&fail_next),
            },
            log,
            fail_next,
        )
    }
}

impl ProcessLauncher for MockLauncher {
    type Handle = MockHandle;

    fn launch(&mut self) -> CoreResult<MockHandle> {
        if self.fail_next.load(Ordering::SeqCst) {
            return Err(PowerError::LaunchFailed {
                command: "mock-inhibitor".to_owned(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "simulated"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.log.launches.fetch_add(1, Ordering::SeqCst);
        Ok(MockHandle {
            log: self.log.clone(),
        })
    }
}

/// WHAT: Active flag equals the parity of the toggle call count
/// WHY: Toggle is the sole transition entry point and must alternate states
#[test]
#[allow(clippy::unwrap_used)]
fn given_successful_launches_when_toggling_then_active_tracks_parity() {
    // Given: A manager whose launcher always succeeds
    let (launcher, _log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);

    // When/Then: Each toggle flips the state; odd call counts are active
    for count in 1..=6u32 {
        let active = manager.toggle().unwrap();
        assert_eq!(active, count % 2 == 1);
        assert_eq!(manager.is_active(), count % 2 == 1);
    }
}

/// WHAT: A full off-on-off-on cycle spawns a fresh process each activation
/// WHY: Re-activation must not reuse a terminated child
#[test]
#[allow(clippy::unwrap_used)]
fn given_toggle_cycle_when_reactivated_then_new_process_spawned() {
    // Given: A manager whose launcher always succeeds
    let (launcher, log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);

    // When: Toggling on, off, and on again
    assert!(manager.toggle().unwrap());
    assert!(!manager.toggle().unwrap());
    assert!(manager.toggle().unwrap());

    // Then: Two launches and one termination were issued
    assert_eq!(log.launch_count(), 2);
    assert_eq!(log.termination_count(), 1);
    assert!(manager.is_active());
}

/// WHAT: Shutdown while active issues exactly one termination
/// WHY: No inhibitor process may outlive the application
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_manager_when_shut_down_then_one_termination_issued() {
    // Given: An active manager
    let (launcher, log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);
    manager.activate().unwrap();

    // When: Shutting down twice
    manager.shutdown();
    manager.shutdown();

    // Then: State is off and exactly one termination was issued
    assert!(!manager.is_active());
    assert_eq!(log.termination_count(), 1);
}

/// WHAT: Shutdown while inactive issues no termination
/// WHY: Terminating a missing child must be a no-op
#[test]
fn given_inactive_manager_when_shut_down_then_no_termination_issued() {
    // Given: A freshly created, inactive manager
    let (launcher, log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);

    // When: Shutting down without ever activating
    manager.shutdown();

    // Then: Nothing was launched or terminated
    assert!(!manager.is_active());
    assert_eq!(log.launch_count(), 0);
    assert_eq!(log.termination_count(), 0);
}

/// WHAT: A failed launch leaves the manager off with no handle stored
/// WHY: Launch failure is log-and-continue; the next toggle simply retries
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_launcher_when_toggled_then_state_stays_off_and_retry_works() {
    // Given: A launcher that fails the first launch
    let (launcher, log, fail_next) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);
    fail_next.store(true, Ordering::SeqCst);

    // When: Toggling while the launcher fails
    let result = manager.toggle();

    // Then: The error surfaces and no handle was stored
    assert!(matches!(result, Err(PowerError::LaunchFailed { .. })));
    assert!(!manager.is_active());
    assert_eq!(log.launch_count(), 0);

    // When: The launcher recovers and toggle is invoked again
    fail_next.store(false, Ordering::SeqCst);
    let active = manager.toggle().unwrap();

    // Then: Activation succeeds on the retry
    assert!(active);
    assert_eq!(log.launch_count(), 1);
}

/// WHAT: Activate while already active does not spawn a second process
/// WHY: The not-active precondition suppresses the self-loop
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_manager_when_activated_again_then_no_second_launch() {
    // Given: An active manager
    let (launcher, log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);
    manager.activate().unwrap();

    // When: Activating a second time
    manager.activate().unwrap();

    // Then: Only one process was ever launched
    assert!(manager.is_active());
    assert_eq!(log.launch_count(), 1);
}

/// WHAT: Repeated deactivation terminates the child only once
/// WHY: Deactivation is documented as idempotent
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_manager_when_deactivated_twice_then_one_termination_issued() {
    // Given: An active manager
    let (launcher, log, _fail) = MockLauncher::new();
    let mut manager = PowerManager::new(launcher);
    manager.activate().unwrap();

    // When: Deactivating twice
    manager.deactivate();
    manager.deactivate();

    // Then: Exactly one termination was issued
    assert_eq!(log.termination_count(), 1);
}

/// WHAT: Dropping an active manager terminates the child
/// WHY: RAII backstop for early-return paths that skip shutdown
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_manager_when_dropped_then_child_terminated() {
    // Given: An active manager inside a scope
    let (launcher, log, _fail) = MockLauncher::new();
    {
        let mut manager = PowerManager::new(launcher);
        manager.activate().unwrap();
    }

    // Then: Drop issued the termination
    assert_eq!(log.termination_count(), 1);
}
