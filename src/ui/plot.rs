use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};
use rusty_tide::color::{COOLWARM, generate_palette, hex};
use rusty_tide::data::stats::{gaussian_kde, histogram};
use rusty_tide::state::AppState;

const HIST_BINS: usize = 30;
const KDE_POINTS: usize = 80;
const GRID_COLUMNS: usize = 3;
const SET2: &[&str] = &["#66C2A5", "#FC8D62", "#8DA0CB", "#E78AC3"];

fn placeholder(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(text);
    });
}

/// Tick label for integer marks only; empty between categories.
fn category_label(labels: &[String], value: f64) -> String {
    if value.fract().abs() > 1e-9 || value < 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

/// One column against another, with point markers.
pub fn line_chart(ui: &mut Ui, state: &mut AppState) {
    let Some(table) = &state.line_table else {
        placeholder(ui, "Open a table to draw a line chart  (File → Open line-chart table…)");
        return;
    };
    let names = table.column_names();
    let mut x = state.line_x.clone().unwrap_or_default();
    let mut y = state.line_y.clone().unwrap_or_default();

    ui.horizontal(|ui: &mut Ui| {
        column_picker(ui, "line_x", "x", &names, &mut x);
        column_picker(ui, "line_y", "y", &names, &mut y);
    });

    let Some(series) = table.xy_series(&x, &y) else {
        placeholder(ui, "Selected columns are not in the table");
        state.set_line_columns(Some(x), Some(y));
        return;
    };

    ui.heading(format!("{y} vs {x}"));
    let labels = series.x_labels.clone();
    let mut plot = Plot::new("line_chart")
        .x_axis_label(x.clone())
        .y_axis_label(y.clone())
        .legend(Legend::default());
    if let Some(labels) = labels {
        plot = plot.x_axis_formatter(move |mark: GridMark, _| category_label(&labels, mark.value));
    }
    plot.show(ui, |plot_ui| {
        let points: Vec<[f64; 2]> = series.points.clone();
        plot_ui.line(
            Line::new(PlotPoints::from(points.clone()))
                .name(&y)
                .width(1.5),
        );
        plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0));
    });

    state.set_line_columns(Some(x), Some(y));
}

fn column_picker(ui: &mut Ui, id: &str, label: &str, names: &[String], selected: &mut String) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for name in names {
                ui.selectable_value(selected, name.clone(), name);
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram grid
// ---------------------------------------------------------------------------

/// Histogram with a density curve for every indicator.
pub fn distributions(ui: &mut Ui, state: &AppState) {
    if state.columns.is_empty() {
        placeholder(ui, "Open a water-quality file  (File → Open water-quality data…)");
        return;
    }

    let skyblue = hex("#87CEEB");
    let spacing = ui.spacing().item_spacing.x;
    let width = (ui.available_width() - spacing * GRID_COLUMNS as f32) / GRID_COLUMNS as f32;
    let rows = state.columns.len().div_ceil(GRID_COLUMNS).max(1);
    let height = ((ui.available_height() - 30.0 * rows as f32) / rows as f32).max(120.0);

    egui::ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        egui::Grid::new("distribution_grid")
            .num_columns(GRID_COLUMNS)
            .show(ui, |ui: &mut Ui| {
                for (i, indicator) in state.columns.iter().enumerate() {
                    let bins = histogram(&indicator.values, HIST_BINS);
                    let bin_width = bins.first().map_or(1.0, |b| b.width());
                    let scale = indicator.values.len() as f64 * bin_width;
                    let kde: Vec<[f64; 2]> = gaussian_kde(&indicator.values, KDE_POINTS)
                        .into_iter()
                        .map(|(x, d)| [x, d * scale])
                        .collect();
                    let bars: Vec<Bar> = bins
                        .iter()
                        .map(|b| {
                            Bar::new(b.center(), b.count as f64)
                                .width(b.width())
                                .fill(skyblue.gamma_multiply(0.8))
                        })
                        .collect();

                    ui.vertical(|ui: &mut Ui| {
                        ui.strong(&indicator.name);
                        Plot::new(format!("hist_{}", indicator.name))
                            .width(width)
                            .height(height)
                            .allow_drag(false)
                            .allow_scroll(false)
                            .show(ui, |plot_ui| {
                                plot_ui.bar_chart(BarChart::new(bars));
                                plot_ui.line(
                                    Line::new(PlotPoints::from(kde))
                                        .color(skyblue)
                                        .width(2.0),
                                );
                            });
                    });

                    if (i + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Annotated Pearson correlation matrix of the indicators.
pub fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    let Some(matrix) = &state.correlation else {
        placeholder(ui, "Open a water-quality file  (File → Open water-quality data…)");
        return;
    };
    let n = matrix.names.len();

    ui.heading("Correlation of Water Quality Indicators");
    let x_names = matrix.names.clone();
    let y_names: Vec<String> = matrix.names.iter().rev().cloned().collect();

    Plot::new("correlation")
        .data_aspect(1.0)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _| category_label(&x_names, mark.value))
        .y_axis_formatter(move |mark: GridMark, _| category_label(&y_names, mark.value))
        .show(ui, |plot_ui| {
            for row in 0..n {
                for col in 0..n {
                    let r = matrix.get(row, col).unwrap_or(f64::NAN);
                    let (cx, cy) = (col as f64, (n - 1 - row) as f64);
                    let square = vec![
                        [cx - 0.5, cy - 0.5],
                        [cx + 0.5, cy - 0.5],
                        [cx + 0.5, cy + 0.5],
                        [cx - 0.5, cy + 0.5],
                    ];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(square))
                            .fill_color(COOLWARM.sample((r + 1.0) / 2.0))
                            .stroke(Stroke::new(0.5, Color32::from_gray(40))),
                    );
                    let text_color = if r.abs() > 0.6 {
                        Color32::WHITE
                    } else {
                        Color32::BLACK
                    };
                    let text = if r.is_nan() {
                        "nan".to_string()
                    } else {
                        format!("{r:.2}")
                    };
                    plot_ui.text(
                        Text::new(PlotPoint::new(cx, cy), RichText::new(text).size(11.0))
                            .color(text_color),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Label counts
// ---------------------------------------------------------------------------

/// Bar per label class.
pub fn potability_counts(ui: &mut Ui, state: &AppState) {
    let Some(counts) = state.label_counts() else {
        placeholder(ui, "The dataset has no label column");
        return;
    };
    let label = &state.label_column;

    ui.heading(format!("{label} Distribution (0=Not Potable, 1=Potable)"));
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (class, count))| {
            Bar::new(*class as f64, *count as f64)
                .width(0.8)
                .name(class.to_string())
                .fill(hex(SET2[i % SET2.len()]))
        })
        .collect();

    Plot::new("potability")
        .x_axis_label(label.clone())
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .x_axis_formatter(|mark: GridMark, _| {
            if mark.value.fract().abs() < 1e-9 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars)));
}

// ---------------------------------------------------------------------------
// Tide heights
// ---------------------------------------------------------------------------

/// Bars growing one per frame, in document order.
pub fn tide_chart(ui: &mut Ui, state: &AppState) {
    if state.tides.is_empty() {
        placeholder(ui, "Open a tide page  (File → Open tide page…)");
        return;
    }

    ui.heading(format!("{} Chek Lap Kok Tide Height", state.year));

    let labels: Vec<String> = match &state.tide_times {
        Some(times) => times
            .iter()
            .map(|t| t.format("%m-%d\n%H:%M").to_string())
            .collect(),
        None => state.tides.iter().map(|r| r.label()).collect(),
    };
    let max_height = state
        .tides
        .iter()
        .map(|r| r.height)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_height = state
        .tides
        .iter()
        .map(|r| r.height)
        .fold(f64::INFINITY, f64::min);

    let palette = generate_palette(state.tides.len());
    let bars: Vec<Bar> = state
        .tide_bar_heights()
        .into_iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (h, color))| Bar::new(i as f64, h).width(1.0).fill(color))
        .collect();

    Plot::new("tides")
        .legend(Legend::default())
        .x_axis_label("Date-Time")
        .y_axis_label("Tide Height (m)")
        .include_x(-0.5)
        .include_x(state.tides.len() as f64 - 0.5)
        .include_y(max_height)
        .include_y(min_height.min(0.0))
        .x_axis_formatter(move |mark: GridMark, _| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Tide Height"));
        });
}
