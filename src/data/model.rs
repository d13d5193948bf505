use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Cell – a single parsed value of a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, guessed from the raw text of the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Guess the type of a raw text cell.
    ///
    /// Empty strings and the usual data-frame spellings of NaN are missing.
    pub fn guess(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || matches!(s, "NaN" | "nan" | "NA" | "N/A" | "null") {
            return Cell::Missing;
        }
        match s.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(s.to_string()),
        }
    }

    /// The numeric value, if this is a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Number(v) => !v.is_finite(),
            Cell::Text(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Missing => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the raw loaded file
// ---------------------------------------------------------------------------

/// One named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Inferred kind of a column, for the info listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    Mixed,
    Empty,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnKind::Numeric => "float64",
            ColumnKind::Text => "object",
            ColumnKind::Mixed => "mixed",
            ColumnKind::Empty => "empty",
        };
        f.write_str(s)
    }
}

/// Per-column summary, like a data-frame `info()` listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_missing: usize,
    pub kind: ColumnKind,
}

/// A loaded tabular file: ordered columns of equal length.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from columns. Short columns are padded with `Missing`.
    pub fn from_columns(mut columns: Vec<Column>) -> Self {
        let n_rows = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for col in &mut columns {
            col.cells.resize(n_rows, Cell::Missing);
        }
        Table { columns, n_rows }
    }

    /// Build a table from a header and row-major cells.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::with_capacity(rows.len()),
            })
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for col in &mut columns {
                col.cells.push(cells.next().unwrap_or(Cell::Missing));
            }
        }
        Self::from_columns(columns)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The column as optional finite numbers (text and missing become `None`).
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|c| c.cells.iter().map(Cell::as_f64).collect())
    }

    /// Finite values of a column, each missing or text cell dropped on its
    /// own rather than with its row.
    pub fn present_values(&self, name: &str) -> Option<Vec<f64>> {
        Some(self.numeric_column(name)?.into_iter().flatten().collect())
    }

    /// The first `n` rows, row-major.
    pub fn head(&self, n: usize) -> Vec<Vec<&Cell>> {
        (0..self.n_rows.min(n))
            .map(|row| self.columns.iter().map(|c| &c.cells[row]).collect())
            .collect()
    }

    pub fn column_info(&self) -> Vec<ColumnInfo> {
        self.columns
            .iter()
            .map(|c| {
                let non_missing = c.cells.iter().filter(|v| !v.is_missing()).count();
                let has_num = c.cells.iter().any(|v| matches!(v, Cell::Number(_)));
                let has_text = c.cells.iter().any(|v| matches!(v, Cell::Text(_)));
                let kind = match (has_num, has_text) {
                    (true, false) => ColumnKind::Numeric,
                    (false, true) => ColumnKind::Text,
                    (true, true) => ColumnKind::Mixed,
                    (false, false) => ColumnKind::Empty,
                };
                ColumnInfo {
                    name: c.name.clone(),
                    non_missing,
                    kind,
                }
            })
            .collect()
    }
}

/// `y` against `x` for a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    pub points: Vec<[f64; 2]>,
    /// Set when `x` is not numeric: points sit at the row index and these
    /// are the tick labels, one per row.
    pub x_labels: Option<Vec<String>>,
}

impl Table {
    /// Rows whose `y` cell is not a finite number are left out.
    pub fn xy_series(&self, x: &str, y: &str) -> Option<XySeries> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        let numeric_x = xs
            .cells
            .iter()
            .all(|c| matches!(c, Cell::Number(_) | Cell::Missing));

        let points = xs
            .cells
            .iter()
            .zip(&ys.cells)
            .enumerate()
            .filter_map(|(row, (xc, yc))| {
                let yv = yc.as_f64()?;
                let xv = if numeric_x { xc.as_f64()? } else { row as f64 };
                Some([xv, yv])
            })
            .collect();

        let x_labels = (!numeric_x).then(|| xs.cells.iter().map(Cell::to_string).collect());
        Some(XySeries { points, x_labels })
    }
}

// ---------------------------------------------------------------------------
// IndicatorDataset – numeric indicators plus an optional label column
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("no rows left after dropping rows with missing values")]
    Empty,
    #[error("table has no numeric indicator columns")]
    NoIndicators,
    #[error("label column '{0}' contains non-numeric values")]
    NonNumericLabel(String),
}

/// A named column of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub name: String,
    pub values: Vec<f64>,
}

/// Rows are samples, columns are numeric indicators; every value is finite.
#[derive(Debug, Clone)]
pub struct IndicatorDataset {
    pub indicators: Vec<Indicator>,
    /// Label column (e.g. potability), if present in the source table.
    pub label: Option<Indicator>,
    /// Rows dropped because a cell was missing.
    pub dropped_rows: usize,
}

impl IndicatorDataset {
    /// Drop every row with a missing cell, then keep the numeric columns.
    ///
    /// Columns that still contain text after the drop are skipped.
    pub fn from_table(table: &Table, label: &str) -> Result<Self, DatasetError> {
        let keep: Vec<usize> = (0..table.n_rows())
            .filter(|&row| table.columns().iter().all(|c| !c.cells[row].is_missing()))
            .collect();
        let dropped_rows = table.n_rows() - keep.len();
        if dropped_rows > 0 {
            log::debug!("Dropped {dropped_rows} rows with missing values");
        }
        if keep.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut indicators = Vec::new();
        let mut label_col = None;
        for col in table.columns() {
            let values: Option<Vec<f64>> = keep.iter().map(|&row| col.cells[row].as_f64()).collect();
            match (values, col.name == label) {
                (Some(values), true) => {
                    label_col = Some(Indicator {
                        name: col.name.clone(),
                        values,
                    })
                }
                (None, true) => return Err(DatasetError::NonNumericLabel(col.name.clone())),
                (Some(values), false) => indicators.push(Indicator {
                    name: col.name.clone(),
                    values,
                }),
                (None, false) => log::debug!("Column '{}' is not numeric, skipped", col.name),
            }
        }

        if indicators.is_empty() {
            return Err(DatasetError::NoIndicators);
        }
        Ok(IndicatorDataset {
            indicators,
            label: label_col,
            dropped_rows,
        })
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.indicators.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<String> {
        self.indicators.iter().map(|c| c.name.clone()).collect()
    }

    pub fn indicator(&self, name: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|c| c.name == name)
    }
}
