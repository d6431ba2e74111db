pub mod registry;
pub mod report;
pub mod series;

pub use registry::{LabelStats, StatsRegistry};
pub use report::ReportOptions;
pub use series::{SampleSeries, SeriesStats};

use serde::Serialize;

/// Semantic interpretation of a series' values.
/// This is the "write" side tag — call sites pick it when recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SampleKind {
    /// Duration in seconds (fractional).
    Time,
    /// Raw numeric count.
    Count,
    /// Ratio in [0, 1] by convention (not enforced).
    Percentage,
}
