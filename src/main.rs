// Floating Calendar Application
// Main entry point

use std::path::PathBuf;

use chrono::Local;
use floating_calendar::models::project::DateProjectIndex;
use floating_calendar::models::settings::Settings;
use floating_calendar::services::projects::load_projects;
use floating_calendar::services::settings::SettingsService;
use floating_calendar::ui_egui::{FloatingCalendarApp, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Floating Calendar");

    let settings_service = SettingsService::from_default_location();
    let settings = settings_service.load_or_default();
    log::info!("Settings file: {}", settings_service.path().display());

    let projects_path = std::env::args_os().nth(1).map(PathBuf::from);
    let projects = initial_projects(&settings, projects_path);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Floating Calendar")
        .with_inner_size([settings.window_width, settings.window_height])
        .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT])
        .with_decorations(false)
        .with_transparent(true)
        .with_taskbar(false);
    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Floating Calendar",
        options,
        Box::new(move |cc| {
            Ok(Box::new(FloatingCalendarApp::new(
                cc,
                settings,
                settings_service,
                projects,
            )))
        }),
    )
}

/// Projects from the command-line file, then the configured file, then demo
/// data when enabled.
fn initial_projects(settings: &Settings, cli_path: Option<PathBuf>) -> DateProjectIndex {
    if let Some(path) = cli_path.or_else(|| settings.projects_file.clone()) {
        match load_projects(&path) {
            Ok(index) => return index,
            Err(e) => log::warn!("Failed to load projects: {:#}", e),
        }
    }

    if settings.show_demo_projects {
        log::info!("Using demo project data");
        DateProjectIndex::demo(Local::now().date_naive())
    } else {
        DateProjectIndex::new()
    }
}
