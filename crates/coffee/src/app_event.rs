use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events re-posted from the tray callbacks onto the main event loop.
///
/// tray-icon delivers menu and icon events through its own handler hooks;
/// both are forwarded through the tao event loop proxy so that all state
/// transitions run serialized on the main thread.
#[derive(Debug)]
pub enum AppEvent {
    /// A context menu entry was selected.
    Menu(MenuEvent),
    /// The tray icon itself was clicked.
    Tray(TrayIconEvent),
}
