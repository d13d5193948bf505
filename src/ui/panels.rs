use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot};
use rusty_tide::art::ArtMode;
use rusty_tide::color::{hex, indicator_color};
use rusty_tide::data::stats::{Summary, histogram};
use rusty_tide::state::{AppState, View};

const SELECTED_MODE: &str = "#FFD700";
const IDLE_MODE: &str = "#444444";
const TABLE_EXTENSIONS: &[&str] = &["csv", "json", "parquet", "pq"];

// ---------------------------------------------------------------------------
// Left side panel – indicator and mode buttons, statistics
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let names = dataset.names();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Indicator buttons ----
            ui.heading("Indicators");
            ui.separator();
            for name in &names {
                let current = state.current_indicator.as_deref() == Some(name.as_str());
                let (fill, text) = if current {
                    (Color32::WHITE, Color32::BLACK)
                } else {
                    (indicator_color(name), Color32::WHITE)
                };
                let button = egui::Button::new(RichText::new(name).strong().color(text))
                    .fill(fill)
                    .min_size(egui::vec2(ui.available_width(), 24.0));
                if ui.add(button).clicked() && !current {
                    state.change_indicator(name);
                }
            }

            // ---- Art modes ----
            if state.view == View::Art {
                ui.add_space(8.0);
                ui.heading("Art mode");
                ui.separator();
                for mode in ArtMode::ALL {
                    let fill = hex(if mode == state.art_mode {
                        SELECTED_MODE
                    } else {
                        IDLE_MODE
                    });
                    let button = egui::Button::new(RichText::new(mode.label()).strong())
                        .fill(fill)
                        .min_size(egui::vec2(ui.available_width(), 24.0));
                    if ui.add(button).clicked() && mode != state.art_mode {
                        state.change_mode(mode);
                    }
                }
            }

            ui.add_space(8.0);
            stats_panel(ui, state);
        });
}

/// Statistics of the current indicator and a small histogram.
fn stats_panel(ui: &mut Ui, state: &AppState) {
    let Some(name) = state.current_indicator.as_deref() else {
        return;
    };
    let Some(indicator) = state.dataset.as_ref().and_then(|ds| ds.indicator(name)) else {
        return;
    };
    let Some(summary) = Summary::of(&indicator.values) else {
        return;
    };
    let color = indicator_color(name);

    ui.heading(format!("{name} statistics"));
    ui.separator();
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (label, value) in summary.rows() {
                ui.label(RichText::new(label).strong());
                ui.label(RichText::new(value).color(color));
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.strong("Distribution");
    let bars: Vec<Bar> = histogram(&indicator.values, 20)
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(color.gamma_multiply(0.7))
        })
        .collect();
    Plot::new("side_distribution")
        .height(140.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars)));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, view tabs and animation controls.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open water-quality data…").clicked() {
                if let Some(path) = pick_file("Open water-quality data", TABLE_EXTENSIONS) {
                    open_with(state, &path, AppState::open_data);
                }
                ui.close_menu();
            }
            if ui.button("Open line-chart table…").clicked() {
                if let Some(path) = pick_file("Open table", TABLE_EXTENSIONS) {
                    open_with(state, &path, AppState::open_line_table);
                }
                ui.close_menu();
            }
            if ui.button("Open tide page…").clicked() {
                if let Some(path) = pick_file("Open tide page", &["html", "htm"]) {
                    open_with(state, &path, AppState::open_tides);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        for view in View::ALL {
            if ui.selectable_label(state.view == view, view.label()).clicked() {
                state.view = view;
            }
        }

        ui.separator();

        if matches!(state.view, View::Art | View::Tides) {
            let label = if state.playing { "⏸ Pause" } else { "▶ Play" };
            if ui.button(label).clicked() {
                state.playing = !state.playing;
            }
            if ui.button("⟲ Restart").clicked() {
                state.restart();
            }
            ui.separator();
        }

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} samples, {} indicators",
                ds.len(),
                ds.indicators.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn pick_file(title: &str, extensions: &[&str]) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Supported files", extensions)
        .pick_file()
}

/// Run a loader, logging failures and showing them in the status line.
fn open_with(
    state: &mut AppState,
    path: &Path,
    open: fn(&mut AppState, &Path) -> anyhow::Result<()>,
) {
    match open(state, path) {
        Ok(()) => state.status_message = None,
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
