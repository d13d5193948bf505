/// Data layer: core types, loading, normalization and statistics.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet              .html
///        │                                │
///        ▼                                ▼
///   ┌──────────┐                     ┌──────────┐
///   │  loader   │  file → Table       │   tide    │  tables → TideRecord
///   └──────────┘                     └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ IndicatorDataset  │  drop missing rows, numeric columns
///   └──────────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌──────────┐
///   │ normalize  │  │  stats    │  summary, histogram, correlation
///   └───────────┘  └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod normalize;
pub mod stats;
pub mod tide;
