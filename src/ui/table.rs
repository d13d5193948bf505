use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use rusty_tide::state::AppState;

const PREVIEW_ROWS: usize = 20;

/// Column info and the first rows of the water-quality table.
pub fn table_view(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.data_table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a water-quality file  (File → Open water-quality data…)");
        });
        return;
    };

    let info = table.column_info();
    ui.heading(format!(
        "{} entries, {} columns",
        table.n_rows(),
        info.len()
    ));
    if let Some(ds) = &state.dataset {
        ui.label(format!(
            "{} rows with missing values dropped, {} samples used",
            ds.dropped_rows,
            ds.len()
        ));
    }

    ui.push_id("column_info", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(220.0)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Column");
                });
                header.col(|ui| {
                    ui.strong("Non-Null Count");
                });
                header.col(|ui| {
                    ui.strong("Dtype");
                });
            })
            .body(|mut body| {
                for col in &info {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&col.name);
                        });
                        row.col(|ui| {
                            ui.label(format!("{} non-null", col.non_missing));
                        });
                        row.col(|ui| {
                            ui.label(col.kind.to_string());
                        });
                    });
                }
            });
    });

    ui.separator();
    ui.label(RichText::new(format!("First {PREVIEW_ROWS} rows")).strong());

    let names = table.column_names();
    ui.push_id("head", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(80.0), names.len())
            .header(20.0, |mut header| {
                for name in &names {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for cells in table.head(PREVIEW_ROWS) {
                    body.row(18.0, |mut row| {
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                }
            });
    });
}
