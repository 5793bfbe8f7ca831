//! Status bar icon with state-based updates.
//!
//! Manages the menu bar item with two icon variants (outline cup when
//! inactive, filled cup while caffeinate runs) and a context menu with
//! Toggle Caffeinate and Quit entries.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Status bar icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    toggle_item_id: MenuId,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the status bar item in the inactive state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let toggle_item = MenuItem::new("Toggle Caffeinate", true, None);
        let quit_item = MenuItem::new("Quit", true, None);

        let toggle_id = toggle_item.id().clone();
        let quit_id = quit_item.id().clone();

        menu.append(&toggle_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add toggle menu entry: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu entry: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::load_icon(TrayIconState::Inactive)?;

        // Left click is the toggle action; the menu opens on right click.
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("Coffee - Caffeinate off")
            .with_menu(Box::new(menu))
            .with_show_menu_on_left_click(false)
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Status bar icon initialized");

        Ok(Self {
            tray_icon,
            toggle_item_id: toggle_id,
            quit_item_id: quit_id,
        })
    }

    /// Swap icon and tooltip to reflect a new state.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let (icon, tooltip) = match state {
            TrayIconState::Inactive => (Self::load_icon(state)?, "Coffee - Caffeinate off"),
            TrayIconState::Active => (Self::load_icon(state)?, "Coffee - Caffeinate on"),
        };

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Load an icon from compile-time embedded PNG bytes.
    ///
    /// Icons are embedded via include_bytes! so they work regardless of
    /// install location - no filesystem paths resolved at runtime.
    #[track_caller]
    pub(crate) fn load_icon(state: TrayIconState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            TrayIconState::Inactive => include_bytes!("../resources/icons/inactive.png"),
            TrayIconState::Active => include_bytes!("../resources/icons/active.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the toggle menu item ID.
    pub fn toggle_item_id(&self) -> &MenuId {
        &self.toggle_item_id
    }

    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}
