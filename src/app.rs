use std::time::Duration;

use eframe::egui;
use rusty_tide::state::{AppState, View};

use crate::ui::{art, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyTideApp {
    pub state: AppState,
    /// egui time of the last animation frame.
    last_tick: f64,
}

impl RustyTideApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            last_tick: 0.0,
        }
    }

    /// Advance the animation when a frame interval has passed and schedule
    /// the next repaint.
    fn drive_animation(&mut self, ctx: &egui::Context) {
        if !self.state.animating() {
            return;
        }
        let interval = self.state.frame_interval();
        let now = ctx.input(|i| i.time);
        if now - self.last_tick >= interval {
            self.state.tick();
            self.last_tick = now;
        }
        ctx.request_repaint_after(Duration::from_secs_f64(interval));
    }
}

impl eframe::App for RustyTideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: indicators, modes, statistics ----
        if matches!(self.state.view, View::Art | View::Distributions) {
            egui::SidePanel::left("indicator_panel")
                .default_width(240.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: current view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Line => plot::line_chart(ui, &mut self.state),
            View::Distributions => plot::distributions(ui, &self.state),
            View::Correlation => plot::correlation_heatmap(ui, &self.state),
            View::Potability => plot::potability_counts(ui, &self.state),
            View::Art => art::art_view(ui, &self.state),
            View::Tides => plot::tide_chart(ui, &self.state),
            View::Table => table::table_view(ui, &self.state),
        });

        self.drive_animation(ctx);
    }
}
