use serde::Serialize;

use super::SampleKind;

/// One labeled measurement series: the raw values plus their kind.
///
/// Values are append-only and keep insertion order. All aggregates are
/// computed on read; nothing is cached.
#[derive(Debug, Clone, Serialize)]
pub struct SampleSeries {
    values: Vec<f64>,
    kind: SampleKind,
}

impl SampleSeries {
    pub(crate) fn new(kind: SampleKind) -> Self {
        Self {
            values: Vec::new(),
            kind,
        }
    }

    /// Append one value and retag the series (last writer wins on reuse).
    pub(crate) fn push(&mut self, value: f64, kind: SampleKind) {
        self.values.push(value);
        self.kind = kind;
    }

    /// Drop all values but keep the kind.
    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }

    pub fn kind(&self) -> SampleKind {
        self.kind
    }

    /// Recorded values in insertion order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all recorded values; 0.0 for an empty series.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Sum divided by max(count, 1), so an empty series averages to 0.0.
    pub fn average(&self) -> f64 {
        self.sum() / self.values.len().max(1) as f64
    }

    /// Largest recorded value, `None` when nothing has been recorded.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Smallest recorded value, `None` when nothing has been recorded.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }
}

/// A complete aggregate breakdown for one series.
/// Owned and serializable — the machine-facing snapshot row.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub kind: SampleKind,
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SeriesStats {
    /// Reduce a series to its summary statistics.
    pub fn from_series(series: &SampleSeries) -> Self {
        Self {
            kind: series.kind(),
            count: series.len(),
            sum: series.sum(),
            average: series.average(),
            min: series.min(),
            max: series.max(),
        }
    }

    /// Convenience: is this summary backed by at least one observation?
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducers_match_hand_computation() {
        let mut s = SampleSeries::new(SampleKind::Count);
        for v in [4.0, 1.0, 7.0, 2.0] {
            s.push(v, SampleKind::Count);
        }
        assert_eq!(s.sum(), 14.0);
        assert_eq!(s.average(), 3.5);
        assert_eq!(s.max(), Some(7.0));
        assert_eq!(s.min(), Some(1.0));
        assert_eq!(s.values(), &[4.0, 1.0, 7.0, 2.0]);
    }

    #[test]
    fn empty_series_is_safe_to_reduce() {
        let s = SampleSeries::new(SampleKind::Time);
        assert_eq!(s.sum(), 0.0);
        assert_eq!(s.average(), 0.0);
        assert_eq!(s.max(), None);
        assert_eq!(s.min(), None);
    }

    #[test]
    fn last_writer_wins_on_kind() {
        let mut s = SampleSeries::new(SampleKind::Count);
        s.push(1.0, SampleKind::Count);
        s.push(0.5, SampleKind::Percentage);
        assert_eq!(s.kind(), SampleKind::Percentage);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn clear_keeps_the_kind() {
        let mut s = SampleSeries::new(SampleKind::Time);
        s.push(0.25, SampleKind::Time);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.kind(), SampleKind::Time);
    }

    #[test]
    fn stats_snapshot_of_empty_series() {
        let s = SampleSeries::new(SampleKind::Count);
        let stats = SeriesStats::from_series(&s);
        assert!(!stats.has_data());
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.average, 0.0);
    }
}
