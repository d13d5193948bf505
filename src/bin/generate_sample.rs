use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const SAMPLES: usize = 3276;

/// (name, mean, std, chance of a missing cell)
const INDICATORS: &[(&str, f64, f64, f64)] = &[
    ("ph", 7.08, 1.59, 0.15),
    ("Hardness", 196.37, 32.88, 0.0),
    ("Solids", 22014.09, 8768.57, 0.0),
    ("Chloramines", 7.12, 1.58, 0.0),
    ("Sulfate", 333.78, 41.42, 0.24),
    ("Conductivity", 426.21, 80.82, 0.0),
    ("Organic_carbon", 14.28, 3.31, 0.0),
    ("Trihalomethanes", 66.40, 16.18, 0.05),
    ("Turbidity", 3.97, 0.78, 0.0),
];

/// Water-quality columns, `None` for a missing cell. The last column is the
/// 0/1 potability label.
fn water_columns(rng: &mut StdRng) -> Result<Vec<(&'static str, Vec<Option<f64>>)>> {
    let mut columns = Vec::with_capacity(INDICATORS.len() + 1);
    for &(name, mean, std, missing) in INDICATORS {
        let normal = Normal::new(mean, std).with_context(|| format!("distribution of {name}"))?;
        let values: Vec<Option<f64>> = (0..SAMPLES)
            .map(|_| {
                let v = normal.sample(rng).max(0.0);
                (rng.random::<f64>() >= missing).then_some(v)
            })
            .collect();
        columns.push((name, values));
    }
    let label = (0..SAMPLES)
        .map(|_| Some(if rng.random::<f64>() < 0.39 { 1.0 } else { 0.0 }))
        .collect();
    columns.push(("Potability", label));
    Ok(columns)
}

fn write_water_csv(path: &str, columns: &[(&str, Vec<Option<f64>>)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(columns.iter().map(|(name, _)| *name))?;
    for row in 0..SAMPLES {
        writer.write_record(columns.iter().map(|(name, values)| match values[row] {
            Some(v) if *name == "Potability" => format!("{v}"),
            Some(v) => format!("{v:.6}"),
            None => String::new(),
        }))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_water_parquet(path: &str, columns: &[(&str, Vec<Option<f64>>)]) -> Result<()> {
    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, _)| Field::new(*name, DataType::Float64, true))
            .collect::<Vec<_>>(),
    ));
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|(_, values)| Arc::new(Float64Array::from(values.clone())) as ArrayRef)
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

/// Thirty days of a slowly rising series for the line chart.
fn write_line_table(path: &str, rng: &mut StdRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(["日期", "数值"])?;
    let step = Normal::new(0.8, 3.0)?;
    let mut value = 100.0;
    for day in 1..=30 {
        value += step.sample(rng);
        writer.write_record([format!("2023-06-{day:02}"), format!("{value:.2}")])?;
    }
    writer.flush()?;
    Ok(())
}

/// A tide-table page: month, day, then time/height pairs. Some height
/// cells are blank (`&nbsp;`), as on real scraped pages.
fn tide_page(rng: &mut StdRng) -> Result<String> {
    let noise = Normal::new(0.0, 0.05)?;
    let mut html = String::from(
        "<html><head><meta charset=\"utf-8\"><title>Chek Lap Kok 2023</title></head><body>\n<table>\n",
    );
    html.push_str("<tr><th>Month</th><th>Day</th><th>Time</th><th>Height</th></tr>\n");
    for month in 1..=2u32 {
        for day in 1..=28u32 {
            let _ = write!(html, "<tr><td>{month:02}</td><td>{day:02}</td>");
            let base_hour = (day * 50 / 60) % 6;
            for k in 0..4u32 {
                let hour = base_hour + k * 6;
                let minute = (day * 13 + k * 7) % 60;
                let phase = (day as f64 + k as f64 * 0.5) * std::f64::consts::PI;
                let height = 1.4 + 0.9 * phase.sin() + noise.sample(rng);
                if rng.random::<f64>() < 0.05 {
                    html.push_str("<td></td><td>&nbsp;</td>");
                } else {
                    let _ = write!(html, "<td>{hour:02}:{minute:02}</td><td>{height:.1}</td>");
                }
            }
            html.push_str("</tr>\n");
        }
    }
    html.push_str("</table>\n</body></html>\n");
    Ok(html)
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let columns = water_columns(&mut rng)?;
    write_water_csv("water_potability.csv", &columns)?;
    write_water_parquet("water_potability.parquet", &columns)?;
    write_line_table("data.csv", &mut rng)?;
    std::fs::write("crawled-page-2023.html", tide_page(&mut rng)?)
        .context("writing crawled-page-2023.html")?;

    println!(
        "Wrote {SAMPLES} samples to water_potability.csv / .parquet, data.csv and crawled-page-2023.html"
    );
    Ok(())
}
