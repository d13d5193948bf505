use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::art::{ArtMode, Scene, SceneInput};
use crate::cli::Cli;
use crate::data::loader;
use crate::data::model::{Indicator, IndicatorDataset, Table};
use crate::data::normalize::NormalizedDataset;
use crate::data::stats::{CorrelationMatrix, value_counts};
use crate::data::tide::{self, TideRecord};

/// Frame interval of the art scenes, in seconds.
pub const ART_FRAME_INTERVAL: f64 = 0.060;
/// Frame interval of the tide bar animation, in seconds.
pub const TIDE_FRAME_INTERVAL: f64 = 0.008;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    Line,
    Distributions,
    Correlation,
    Potability,
    #[default]
    Art,
    Tides,
    Table,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Art,
        View::Distributions,
        View::Correlation,
        View::Potability,
        View::Table,
        View::Line,
        View::Tides,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Line => "Line chart",
            View::Distributions => "Distributions",
            View::Correlation => "Correlation",
            View::Potability => "Potability",
            View::Art => "Art",
            View::Tides => "Tides",
            View::Table => "Table",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub view: View,

    /// Water-quality table as loaded, for the preview.
    pub data_table: Option<Table>,
    /// Indicators after dropping incomplete rows.
    pub dataset: Option<IndicatorDataset>,
    pub normalized: NormalizedDataset,
    /// The same indicators with missing cells dropped per column instead of
    /// per row, for the distribution grid.
    pub columns: Vec<Indicator>,
    /// Pairwise-complete correlation of the indicators.
    pub correlation: Option<CorrelationMatrix>,
    /// Label column excluded from the indicators.
    pub label_column: String,

    /// Table for the line chart and its selected columns.
    pub line_table: Option<Table>,
    pub line_x: Option<String>,
    pub line_y: Option<String>,

    pub current_indicator: Option<String>,
    pub art_mode: ArtMode,
    pub scene: Option<Scene>,
    pub seed: u64,

    pub tides: Vec<TideRecord>,
    /// Present only when every reading resolved to a date and time.
    pub tide_times: Option<Vec<NaiveDateTime>>,
    /// Index of the last revealed tide bar.
    pub tide_frame: usize,
    pub year: i32,

    pub playing: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::default(),
            data_table: None,
            dataset: None,
            normalized: NormalizedDataset::default(),
            columns: Vec::new(),
            correlation: None,
            label_column: crate::cli::DEFAULT_LABEL.to_string(),
            line_table: None,
            line_x: None,
            line_y: None,
            current_indicator: None,
            art_mode: ArtMode::default(),
            scene: None,
            seed: crate::cli::DEFAULT_SEED,
            tides: Vec::new(),
            tide_times: None,
            tide_frame: 0,
            year: crate::cli::DEFAULT_YEAR,
            playing: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Initial state from the command line. Files that are missing or fail to
    /// load leave their view empty and add a line to the status message.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut state = AppState {
            view: cli.view,
            label_column: cli.label.clone(),
            line_x: Some(cli.x_column.clone()),
            line_y: Some(cli.y_column.clone()),
            seed: cli.seed,
            year: cli.year,
            ..AppState::default()
        };

        let mut problems = Vec::new();
        try_open(&cli.data, &mut problems, |p| state.open_data(p));
        try_open(&cli.table, &mut problems, |p| state.open_line_table(p));
        try_open(&cli.tides, &mut problems, |p| state.open_tides(p));

        if !problems.is_empty() {
            state.status_message = Some(problems.join("; "));
        }
        state
    }

    // -- Loading --

    pub fn open_data(&mut self, path: &Path) -> Result<()> {
        let table = loader::load_file(path)?;
        self.set_data_table(table)?;
        Ok(())
    }

    pub fn open_line_table(&mut self, path: &Path) -> Result<()> {
        let table = loader::load_file(path)?;
        self.set_line_table(table);
        Ok(())
    }

    pub fn open_tides(&mut self, path: &Path) -> Result<()> {
        let records = tide::load_tide_file(path)?;
        self.set_tides(records);
        Ok(())
    }

    /// Ingest a water-quality table: drop incomplete rows for the art
    /// scenes, keep per-column values for the charts, normalize, pick the
    /// first indicator and rebuild the scene.
    pub fn set_data_table(&mut self, table: Table) -> Result<()> {
        let dataset = IndicatorDataset::from_table(&table, &self.label_column)?;
        log::info!(
            "{} samples, {} indicators ({} rows dropped)",
            dataset.len(),
            dataset.indicators.len(),
            dataset.dropped_rows
        );

        let names = dataset.names();
        self.columns = names
            .iter()
            .filter_map(|name| {
                Some(Indicator {
                    name: name.clone(),
                    values: table.present_values(name)?,
                })
            })
            .collect();
        self.correlation = Some(CorrelationMatrix::pairwise(&table, &names));
        self.normalized = NormalizedDataset::new(&dataset);
        self.current_indicator = dataset.names().into_iter().next();
        self.dataset = Some(dataset);
        self.data_table = Some(table);
        self.status_message = None;
        self.rebuild_scene();
        Ok(())
    }

    /// Keep the selected columns when the new table has them, otherwise
    /// fall back to the first two columns.
    pub fn set_line_table(&mut self, table: Table) {
        let names = table.column_names();
        let has = |c: &Option<String>| c.as_ref().is_some_and(|c| names.contains(c));
        if !has(&self.line_x) {
            self.line_x = names.first().cloned();
        }
        if !has(&self.line_y) {
            self.line_y = names.get(1).or(names.first()).cloned();
        }
        self.line_table = Some(table);
    }

    /// Count per label class over every row that has a label, including
    /// rows the indicator dataset dropped.
    pub fn label_counts(&self) -> Option<BTreeMap<i64, usize>> {
        let values = self.data_table.as_ref()?.present_values(&self.label_column)?;
        (!values.is_empty()).then(|| value_counts(&values))
    }

    pub fn set_line_columns(&mut self, x: Option<String>, y: Option<String>) {
        if x.is_some() {
            self.line_x = x;
        }
        if y.is_some() {
            self.line_y = y;
        }
    }

    pub fn set_tides(&mut self, records: Vec<TideRecord>) {
        self.tide_times = tide::resolve_timestamps(&records, self.year);
        if self.tide_times.is_none() && !records.is_empty() {
            log::info!("Tide readings have no usable timestamps, using an index axis");
        }
        self.tides = records;
        self.tide_frame = 0;
    }

    // -- Art controls --

    /// Switch indicator and restart the animation.
    pub fn change_indicator(&mut self, indicator: &str) {
        let known = self
            .dataset
            .as_ref()
            .is_some_and(|ds| ds.indicator(indicator).is_some());
        if !known {
            return;
        }
        log::info!("Switched to indicator: {indicator}");
        self.current_indicator = Some(indicator.to_string());
        self.rebuild_scene();
    }

    /// Switch art mode and restart the animation.
    pub fn change_mode(&mut self, mode: ArtMode) {
        log::info!("Switched to mode: {mode:?}");
        self.art_mode = mode;
        self.rebuild_scene();
    }

    pub fn rebuild_scene(&mut self) {
        self.scene = self.dataset.as_ref().and_then(|dataset| {
            let input = SceneInput {
                dataset,
                normalized: &self.normalized,
                indicator: self.current_indicator.as_deref().unwrap_or_default(),
            };
            Scene::new(self.art_mode, &input, self.seed)
        });
    }

    // -- Animation --

    /// Whether the current view has something left to animate.
    pub fn animating(&self) -> bool {
        self.playing
            && match self.view {
                View::Art => self.scene.is_some(),
                View::Tides => self.tide_frame + 1 < self.tides.len(),
                _ => false,
            }
    }

    /// Seconds between frames of the current view.
    pub fn frame_interval(&self) -> f64 {
        match self.view {
            View::Tides => TIDE_FRAME_INTERVAL,
            _ => ART_FRAME_INTERVAL,
        }
    }

    /// Advance the current view one frame. The art loops forever; the tide
    /// bars stop once every bar is shown.
    pub fn tick(&mut self) {
        match self.view {
            View::Art => {
                if let Some(scene) = &mut self.scene {
                    scene.step();
                }
            }
            View::Tides => {
                if self.tide_frame + 1 < self.tides.len() {
                    self.tide_frame += 1;
                }
            }
            _ => {}
        }
    }

    /// Restart the current view's animation from frame 0.
    pub fn restart(&mut self) {
        match self.view {
            View::Art => self.rebuild_scene(),
            View::Tides => self.tide_frame = 0,
            _ => {}
        }
        self.playing = true;
    }

    /// Bar heights at the current frame: bars up to `tide_frame` are
    /// revealed, the rest are zero.
    pub fn tide_bar_heights(&self) -> Vec<f64> {
        self.tides
            .iter()
            .enumerate()
            .map(|(i, r)| if i <= self.tide_frame { r.height } else { 0.0 })
            .collect()
    }
}

fn try_open(path: &Path, problems: &mut Vec<String>, load: impl FnOnce(&Path) -> Result<()>) {
    if !path.exists() {
        log::warn!("{} not found", path.display());
        problems.push(format!("{} not found", path.display()));
    } else if let Err(e) = load(path) {
        log::error!("Failed to load file: {e:#}");
        problems.push(format!("Error: {e:#}"));
    }
}
