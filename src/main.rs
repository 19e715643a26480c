#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod error;
mod io;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dir = io::paths::data_dir();
    let today = chrono::Local::now().date_naive();
    let workspace = match model::Workspace::open(&dir, today) {
        Ok(ws) => ws,
        Err(e) => {
            log::error!("Failed to open {}: {}", dir.display(), e);
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Assignment Tracker")
                .set_description(format!("Could not load your classes:\n{}", e))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            return Ok(());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 560.0])
            .with_min_inner_size([640.0, 320.0])
            .with_title("Assignment Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Assignment Tracker",
        options,
        Box::new(|cc| Ok(Box::new(app::TrackerApp::new(cc, workspace)))),
    )
}
