use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::model::Table;

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics of one indicator, as shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl Summary {
    /// Returns `None` for an empty slice.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = if count < 2 {
            0.0
        } else {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        let min = sorted[0];
        let max = sorted[count - 1];

        Some(Summary {
            count,
            mean,
            median,
            std,
            min,
            max,
            range: max - min,
        })
    }

    /// Label/value rows for display, two decimals like the stats panel.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Count", self.count.to_string()),
            ("Mean", format!("{:.2}", self.mean)),
            ("Median", format!("{:.2}", self.median)),
            ("Std", format!("{:.2}", self.std)),
            ("Min", format!("{:.2}", self.min)),
            ("Max", format!("{:.2}", self.max)),
            ("Range", format!("{:.2}", self.range)),
        ]
    }
}

// ---------------------------------------------------------------------------
// Histogram + density
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width bins over `[min, max]`; the last bin includes `max`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![HistBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistBin> = (0..bins)
        .map(|i| HistBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Gaussian kernel density estimate sampled at `points` evenly spaced
/// positions over `[min, max]`, with Scott's bandwidth.
///
/// Returns `(x, density)` pairs; empty when the bandwidth would be zero.
pub fn gaussian_kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    let Some(summary) = Summary::of(values) else {
        return Vec::new();
    };
    let n = values.len() as f64;
    let bandwidth = summary.std * n.powf(-0.2);
    if bandwidth <= 0.0 || points < 2 {
        return Vec::new();
    }

    let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
    let step = summary.range / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = summary.min + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum();
            (x, density * norm)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pearson correlation of two equally long slices. `NaN` when either side
/// has zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return f64::NAN;
    }
    let mean_a = a[..n].iter().sum::<f64>() / n as f64;
    let mean_b = b[..n].iter().sum::<f64>() / n as f64;
    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for (x, y) in a[..n].iter().zip(&b[..n]) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    (cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0)
}

/// Pearson over the rows where both sides are present (pairwise-complete).
pub fn pearson_pairwise(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();
    pearson(&xs, &ys)
}

/// Square correlation matrix over the indicators, row-major in the given
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficients of the named columns of `table`. Each pair uses every
    /// row where both cells are numbers, so a missing cell only affects the
    /// pairs of its own column.
    pub fn pairwise(table: &Table, names: &[String]) -> Self {
        let cols: Vec<Vec<Option<f64>>> = names
            .iter()
            .map(|n| table.numeric_column(n).unwrap_or_default())
            .collect();
        let values = (0..cols.len())
            .map(|i| {
                (0..cols.len())
                    .map(|j| if i == j { 1.0 } else { pearson_pairwise(&cols[i], &cols[j]) })
                    .collect()
            })
            .collect();
        CorrelationMatrix {
            names: names.to_vec(),
            values,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }
}

// ---------------------------------------------------------------------------
// Label counts
// ---------------------------------------------------------------------------

/// Count of each distinct label value (rounded to an integer class).
pub fn value_counts(values: &[f64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &v in values {
        *counts.entry(v.round() as i64).or_insert(0) += 1;
    }
    counts
}
