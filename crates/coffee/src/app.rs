use crate::{AppResult, TrayIconState, TrayManager};

use coffee_core::{CaffeinateLauncher, PowerManager};
use tao::event_loop::ControlFlow;
use tracing::{error, info, instrument};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};

/// Main application state.
///
/// Owns the sleep-prevention controller and the status bar item. Both live
/// on the main thread (`TrayIcon` is `!Send` on all platforms); the tao
/// event loop serializes every trigger, so no locking is involved.
pub struct App {
    power: PowerManager<CaffeinateLauncher>,
    tray_manager: TrayManager,
}

impl App {
    /// Create the application with its status bar item in the off state.
    pub fn new(power: PowerManager<CaffeinateLauncher>) -> AppResult<Self> {
        let tray_manager = TrayManager::new()?;

        info!("Coffee starting");

        Ok(Self {
            power,
            tray_manager,
        })
    }

    /// Handle a context menu selection.
    #[instrument(skip(self, control_flow))]
    pub fn handle_menu_event(&mut self, event: MenuEvent, control_flow: &mut ControlFlow) {
        let event_id = &event.id;

        if *event_id == *self.tray_manager.toggle_item_id() {
            self.toggle();
        } else if *event_id == *self.tray_manager.quit_item_id() {
            info!("Quit requested from tray menu");
            self.shutdown();
            *control_flow = ControlFlow::Exit;
        }
    }

    /// Handle a click on the status bar item itself.
    ///
    /// A released left click is the toggle action. Everything else,
    /// including the right click that opens the menu, is ignored.
    #[instrument(skip(self))]
    pub fn handle_tray_event(&mut self, event: TrayIconEvent) {
        if let TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            self.toggle();
        }
    }

    /// Flip sleep prevention and refresh the icon.
    ///
    /// A failed caffeinate launch is logged and leaves the state off; the
    /// icon stays on the outline variant and the next toggle retries.
    #[instrument(skip(self))]
    fn toggle(&mut self) {
        match self.toggle_prevention() {
            Ok(active) => info!(active, "Toggled sleep prevention"),
            Err(e) => error!(error = ?e, "Failed to start caffeinate"),
        }

        self.update_presentation();
    }

    fn toggle_prevention(&mut self) -> AppResult<bool> {
        Ok(self.power.toggle()?)
    }

    /// Reflect the controller's active flag on the status surface.
    fn update_presentation(&mut self) {
        let state = TrayIconState::from_active(self.power.is_active());

        if let Err(e) = self.tray_manager.update_state(state) {
            error!(error = ?e, "Failed to update tray icon");
        }
    }

    /// Terminate any live inhibitor before the process exits.
    ///
    /// Invoked from the Quit menu entry and again when the event loop is
    /// destroyed; deactivation is idempotent, so the double call is fine.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        self.power.shutdown();
        self.update_presentation();

        info!("Coffee shut down");
    }
}
