use super::model::IndicatorDataset;

/// Added to every range so a constant column never divides by zero.
pub const EPSILON: f64 = 1e-8;

/// Min-max rescale to approximately `[0, 1]`.
///
/// `EPSILON` is added to the range unconditionally, so the largest value maps
/// slightly below 1 and a constant column maps to all zeros.
pub fn min_max(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let denom = max - min + EPSILON;
    values.iter().map(|&v| (v - min) / denom).collect()
}

/// Normalized copy of every indicator, same order as the dataset.
#[derive(Debug, Clone, Default)]
pub struct NormalizedDataset {
    columns: Vec<(String, Vec<f64>)>,
}

impl NormalizedDataset {
    pub fn new(dataset: &IndicatorDataset) -> Self {
        let columns = dataset
            .indicators
            .iter()
            .map(|ind| (ind.name.clone(), min_max(&ind.values)))
            .collect();
        Self { columns }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// `(name, values)` pairs in indicator order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
