//! Coffee: macOS menu bar toggle for the system `caffeinate` sleep inhibitor.

mod app;
mod app_event;
mod error;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_event::AppEvent,
    error::{AppError, Result as AppResult},
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use coffee_core::{CaffeinateLauncher, PowerManager};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("coffee=debug")
        .init();

    #[cfg(target_os = "macos")]
    let event_loop = {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};

        let mut event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
        // Accessory activation keeps the app out of the Dock.
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
        event_loop
    };
    #[cfg(not(target_os = "macos"))]
    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();

    // Menu and icon callbacks fire on tray-icon's own hooks; re-post them
    // onto the event loop so every transition runs on the main thread.
    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(AppEvent::Menu(event));
    }));

    let tray_proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = tray_proxy.send_event(AppEvent::Tray(event));
    }));

    // App lives on the main thread - TrayIcon is !Send on all platforms.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                // The tray icon can only be created once the loop is running.
                match App::new(PowerManager::new(CaffeinateLauncher::default())) {
                    Ok(a) => app = Some(a),
                    Err(e) => {
                        error!("Failed to initialize application: {:?}", e);
                        std::process::exit(1);
                    }
                }
            }
            Event::UserEvent(AppEvent::Menu(menu_event)) => {
                if let Some(app) = app.as_mut() {
                    app.handle_menu_event(menu_event, control_flow);
                }
            }
            Event::UserEvent(AppEvent::Tray(tray_event)) => {
                if let Some(app) = app.as_mut() {
                    app.handle_tray_event(tray_event);
                }
            }
            Event::LoopDestroyed => {
                if let Some(app) = app.as_mut() {
                    app.shutdown();
                }
            }
            _ => {}
        }
    });
}
