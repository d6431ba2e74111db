use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Instant;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace};

use super::report::{self, ReportOptions};
use super::series::{SampleSeries, SeriesStats};
use super::SampleKind;
use crate::error::{Result, StatsError};

// ─── Public types ────────────────────────────────────────────────

/// Label-keyed measurement engine.
/// Call sites record samples, readers pull aggregates or a text report.
///
/// All methods take `&self`; one internal mutex guards the whole state, so a
/// process-wide instance is just an `Arc<StatsRegistry>` handed to whoever
/// instruments — no hidden global.
pub struct StatsRegistry {
    inner: Mutex<Inner>,
}

/// One label-sorted row of a registry snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct LabelStats {
    pub label: String,
    pub stats: SeriesStats,
}

// ─── Internal state ──────────────────────────────────────────────

struct Inner {
    // BTreeMap gives the lexical label order the report relies on.
    series: BTreeMap<String, SampleSeries>,

    // Last instant captured by `start_timer` / `record_elapsed`; the anchor
    // the next elapsed sample is measured from.
    checkpoint: Option<Instant>,
}

// ─── StatsRegistry impl ──────────────────────────────────────────

impl StatsRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                series: BTreeMap::new(),
                checkpoint: None,
            }),
        }
    }

    /// Append `value` to the series for `label`, creating the series if
    /// absent and retagging it with `kind`. Always succeeds.
    pub fn record_value(&self, label: &str, value: f64, kind: SampleKind) {
        self.inner.lock().record(label, value, kind);
    }

    /// [`record_value`](Self::record_value) with the conventional
    /// [`SampleKind::Count`] tag.
    pub fn record_count(&self, label: &str, value: f64) {
        self.record_value(label, value, SampleKind::Count);
    }

    /// Capture the current instant as the checkpoint and return it.
    /// Marks the beginning of a measured interval.
    pub fn start_timer(&self) -> Instant {
        let now = Instant::now();
        self.inner.lock().checkpoint = Some(now);
        now
    }

    /// Record the time since the last checkpoint under `label` (seconds,
    /// kind [`SampleKind::Time`]), then advance the checkpoint. Consecutive
    /// calls therefore partition wall time into successive labeled segments
    /// rather than measuring from the original `start_timer`.
    ///
    /// Without a prior checkpoint the sample is 0.0 and this call becomes
    /// the anchor for the next one.
    pub fn record_elapsed(&self, label: &str) -> Instant {
        let mut inner = self.inner.lock();
        let now = Instant::now();
        let last = inner.checkpoint.unwrap_or(now);
        let elapsed = now.duration_since(last).as_secs_f64();
        inner.record(label, elapsed, SampleKind::Time);
        inner.checkpoint = Some(now);
        now
    }

    /// The series recorded under `label`, as an owned copy.
    /// Fails with [`StatsError::UnknownLabel`] if it was never recorded.
    pub fn get(&self, label: &str) -> Result<SampleSeries> {
        self.inner
            .lock()
            .series
            .get(label)
            .cloned()
            .ok_or_else(|| StatsError::UnknownLabel(label.to_string()))
    }

    /// Sum of all values recorded under `label` (0.0 for a cleared series).
    pub fn sum(&self, label: &str) -> Result<f64> {
        Ok(self.get(label)?.sum())
    }

    /// Average of all values recorded under `label` (0.0 for a cleared
    /// series; the divisor is clamped to 1).
    pub fn average(&self, label: &str) -> Result<f64> {
        Ok(self.get(label)?.average())
    }

    /// Largest value recorded under `label`.
    /// Fails with [`StatsError::EmptySeries`] on a cleared series.
    pub fn max(&self, label: &str) -> Result<f64> {
        self.get(label)?
            .max()
            .ok_or_else(|| StatsError::EmptySeries(label.to_string()))
    }

    /// Smallest value recorded under `label`.
    /// Fails with [`StatsError::EmptySeries`] on a cleared series.
    pub fn min(&self, label: &str) -> Result<f64> {
        self.get(label)?
            .min()
            .ok_or_else(|| StatsError::EmptySeries(label.to_string()))
    }

    /// Drop every series, returning the registry to its freshly-built
    /// state. The checkpoint is left untouched.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.series.clear();
        debug!("registry reset");
    }

    /// Clear only the values recorded under `label`; its kind survives.
    /// Unknown labels are a silent no-op, distinguishing clearing from
    /// querying.
    pub fn reset_label(&self, label: &str) {
        let mut inner = self.inner.lock();
        if let Some(series) = inner.series.get_mut(label) {
            series.clear();
            debug!(label, "series cleared");
        }
    }

    /// Label-sorted aggregate rows for every series, including empty ones.
    pub fn snapshot(&self) -> Vec<LabelStats> {
        let inner = self.inner.lock();
        inner
            .series
            .iter()
            .map(|(label, series)| LabelStats {
                label: label.clone(),
                stats: SeriesStats::from_series(series),
            })
            .collect()
    }

    /// Write the aligned per-label report to `out` with default options.
    /// Read-only: repeated calls without intervening writes produce
    /// byte-identical output.
    pub fn report(&self, out: &mut dyn Write) -> io::Result<()> {
        self.report_with(out, &ReportOptions::default())
    }

    /// [`report`](Self::report) with explicit rendering options.
    pub fn report_with(
        &self,
        out: &mut dyn Write,
        opts: &ReportOptions,
    ) -> io::Result<()> {
        let inner = self.inner.lock();
        let entries: Vec<(&str, &SampleSeries)> = inner
            .series
            .iter()
            .map(|(label, series)| (label.as_str(), series))
            .collect();
        report::render(out, &entries, opts)
    }

    /// Convenience: report to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.report(&mut io::stdout().lock())
    }
}

impl Default for StatsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Inner impl ──────────────────────────────────────────────────

impl Inner {
    fn record(&mut self, label: &str, value: f64, kind: SampleKind) {
        trace!(label, value, ?kind, "sample recorded");
        self.series
            .entry(label.to_string())
            .or_insert_with(|| SampleSeries::new(kind))
            .push(value, kind);
    }
}

// ─── Tests ───────────────────────────────────────────────────────
