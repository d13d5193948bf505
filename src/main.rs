mod app;
mod ui;

use app::RustyTideApp;
use clap::Parser;
use eframe::egui;
use rusty_tide::cli::Cli;
use rusty_tide::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let state = AppState::from_cli(&cli);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Tide – Water Quality Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyTideApp::new(state)))),
    )
}
