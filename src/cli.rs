//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::state::View;

pub const DEFAULT_DATA: &str = "water_potability.csv";
pub const DEFAULT_TABLE: &str = "data.csv";
pub const DEFAULT_TIDES: &str = "crawled-page-2023.html";
pub const DEFAULT_LABEL: &str = "Potability";
pub const DEFAULT_X: &str = "日期";
pub const DEFAULT_Y: &str = "数值";
pub const DEFAULT_YEAR: i32 = 2023;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-tide")]
#[command(
    author,
    version,
    about = "Water-quality and tide-table chart viewer"
)]
/// Files opened at start-up and the viewer's initial settings
pub struct Cli {
    /// Water-quality table (.csv, .json or .parquet)
    #[arg(short, long, default_value = DEFAULT_DATA)]
    pub data: PathBuf,

    /// Table for the line chart
    #[arg(short, long, default_value = DEFAULT_TABLE)]
    pub table: PathBuf,

    /// Line-chart x column
    #[arg(short = 'x', long = "x", default_value = DEFAULT_X)]
    pub x_column: String,

    /// Line-chart y column
    #[arg(short = 'y', long = "y", default_value = DEFAULT_Y)]
    pub y_column: String,

    /// Scraped HTML tide page
    #[arg(long, default_value = DEFAULT_TIDES)]
    pub tides: PathBuf,

    /// Label column excluded from the indicators
    #[arg(short, long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Year used to date the tide readings
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    pub year: i32,

    /// Random seed for the art scenes
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// View shown first
    #[arg(long, value_enum, default_value_t = View::Art)]
    pub view: View,
}
