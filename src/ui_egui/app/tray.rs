use super::state::TrayHandle;
use super::FloatingCalendarApp;
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

const ICON_SIZE: u32 = 32;
const ICON_BACKGROUND: [u8; 4] = [0x0f, 0x17, 0x2a, 0xff];
const ICON_ACCENT: [u8; 4] = [0x3b, 0x82, 0xf6, 0xff];

/// RGBA pixels for the tray icon: a blue rounded square on the window
/// background color.
pub(super) fn tray_icon_rgba(size: u32) -> Vec<u8> {
    let inset = size / 8;
    let radius = (size / 8) as i64;
    let (lo, hi) = (inset as i64, (size - inset) as i64 - 1);

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let inside = x >= lo && x <= hi && y >= lo && y <= hi && {
                // Distance to the nearest corner centre, only near corners
                let cx = x.clamp(lo + radius, hi - radius);
                let cy = y.clamp(lo + radius, hi - radius);
                (x - cx).pow(2) + (y - cy).pow(2) <= radius * radius
            };
            rgba.extend_from_slice(if inside { &ICON_ACCENT } else { &ICON_BACKGROUND });
        }
    }
    rgba
}

impl FloatingCalendarApp {
    /// Attempt to create a system tray icon. Returns `None` if the tray is
    /// unavailable (e.g. GNOME without AppIndicator extension).
    pub(super) fn create_tray_icon() -> Option<TrayHandle> {
        // GTK must be initialised before tray-icon creates menus on Linux
        #[cfg(target_os = "linux")]
        {
            if gtk::init().is_err() {
                log::warn!("Failed to initialise GTK for system tray");
                return None;
            }
        }

        let show_item = MenuItem::new("Show", true, None);
        let hide_item = MenuItem::new("Hide", true, None);
        let on_top_item = MenuItem::new("Toggle Always On Top", true, None);
        let quit_item = MenuItem::new("Quit", true, None);

        let menu = Menu::new();
        if let Err(e) = menu.append_items(&[
            &show_item,
            &hide_item,
            &on_top_item,
            &PredefinedMenuItem::separator(),
            &quit_item,
        ]) {
            log::warn!("Failed to build tray context menu: {e}");
            return None;
        }

        let icon = match tray_icon::Icon::from_rgba(tray_icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE)
        {
            Ok(i) => i,
            Err(e) => {
                log::warn!("Failed to create tray icon from RGBA data: {e}");
                return None;
            }
        };

        match TrayIconBuilder::new()
            .with_tooltip("Floating Calendar")
            .with_icon(icon)
            .with_menu(Box::new(menu))
            .build()
        {
            Ok(tray) => {
                log::info!("System tray icon created successfully");
                Some(TrayHandle {
                    _icon: tray,
                    show_id: show_item.id().clone(),
                    hide_id: hide_item.id().clone(),
                    always_on_top_id: on_top_item.id().clone(),
                    quit_id: quit_item.id().clone(),
                })
            }
            Err(e) => {
                log::warn!(
                    "Failed to create system tray icon (tray host may not be available): {e}"
                );
                None
            }
        }
    }

    /// Drain tray menu and icon events. Call at the start of each frame.
    pub(super) fn poll_tray_events(&mut self, ctx: &egui::Context) {
        let Some(tray) = &self.tray else {
            return;
        };

        // libappindicator needs a turn of the GTK loop for D-Bus and menus
        #[cfg(target_os = "linux")]
        {
            while gtk::events_pending() {
                gtk::main_iteration();
            }
        }

        let mut commands = Vec::new();
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if event.id == tray.show_id {
                commands.push(TrayCommand::Show);
            } else if event.id == tray.hide_id {
                commands.push(TrayCommand::Hide);
            } else if event.id == tray.always_on_top_id {
                commands.push(TrayCommand::ToggleAlwaysOnTop);
            } else if event.id == tray.quit_id {
                commands.push(TrayCommand::Quit);
            }
        }

        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                commands.push(TrayCommand::ToggleMode);
            }
        }

        for command in commands {
            log::debug!("Tray command: {:?}", command);
            match command {
                TrayCommand::Show => self.restore_from_bar(ctx),
                TrayCommand::Hide => self.minimize_to_bar(ctx),
                TrayCommand::ToggleAlwaysOnTop => self.toggle_always_on_top(ctx),
                TrayCommand::ToggleMode => self.toggle_window_mode(ctx),
                TrayCommand::Quit => self.request_quit(ctx),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrayCommand {
    Show,
    Hide,
    ToggleAlwaysOnTop,
    ToggleMode,
    Quit,
}
