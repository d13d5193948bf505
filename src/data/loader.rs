use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Cell, Column, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one sample per line (the usual case)
/// * `.json`    – `[{ "ph": 7.1, "Hardness": 204.9, ... }, ...]`
/// * `.parquet` – flat scalar columns
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.n_rows(),
        table.column_names(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every cell type-guessed.
/// Ragged rows are accepted; missing trailing cells become `Missing`.
pub fn load_csv(path: &Path) -> Result<Table> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    read_csv(reader)
}

/// Parse CSV text already in memory.
pub fn parse_csv(text: &str) -> Result<Table> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(Cell::guess).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "ph": 7.08, "Hardness": 204.89, "Potability": 0 },
///   { "ph": null, "Hardness": 129.42, "Potability": 1 }
/// ]
/// ```
///
/// Columns appear in first-seen order.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<BTreeMap<String, Cell>> = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = BTreeMap::new();
        for (key, val) in obj {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        rows.push(row);
    }

    let rows = rows
        .into_iter()
        .map(|mut row| {
            headers
                .iter()
                .map(|h| row.remove(h).unwrap_or(Cell::Missing))
                .collect()
        })
        .collect();
    Ok(Table::from_rows(headers, rows))
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::Number(n) => n.as_f64().map_or(Cell::Missing, Cell::Number),
        JsonValue::String(s) => Cell::guess(s),
        JsonValue::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        JsonValue::Null => Cell::Missing,
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Nulls become `Missing`.
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<Column> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema
                .fields()
                .iter()
                .map(|f| Column {
                    name: f.name().clone(),
                    cells: Vec::new(),
                })
                .collect();
        }

        for (col_idx, column) in columns.iter_mut().enumerate() {
            let array = as_float64(batch.column(col_idx))
                .with_context(|| format!("converting column {}", column.name))?;
            for row in 0..batch.num_rows() {
                column.cells.push(extract_cell(&array, row));
            }
        }
    }

    Ok(Table::from_columns(columns))
}

/// Every numeric (and boolean) column is cast to `Float64` once, whatever
/// its integer width or signedness. Other columns pass through unchanged.
fn as_float64(col: &ArrayRef) -> Result<ArrayRef> {
    let dt = col.data_type();
    if *dt == DataType::Float64 || !(dt.is_numeric() || *dt == DataType::Boolean) {
        return Ok(Arc::clone(col));
    }
    Ok(cast(col.as_ref(), &DataType::Float64)?)
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Missing;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map_or(Cell::Missing, |a| Cell::Number(a.value(row))),
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map_or(Cell::Missing, |a| Cell::guess(a.value(row))),
        DataType::LargeUtf8 => Cell::guess(col.as_string::<i64>().value(row)),
        other => Cell::Text(format!("{other:?}")),
    }
}
