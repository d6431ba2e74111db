//! In-process measurement registry.
//!
//! [`StatsRegistry`] accumulates named samples — elapsed time, raw counts,
//! or percentages — derives sum/average/min/max on demand, and renders an
//! aligned per-label text report. Everything is synchronous and in-memory:
//! the only external resources are the clock (read) and the report sink
//! (write).
//!
//! Call sites that want one registry per process share an
//! `Arc<StatsRegistry>` explicitly; construction and teardown belong to the
//! host.
//!
//! ```
//! use perfstats::StatsRegistry;
//!
//! let stats = StatsRegistry::new();
//! stats.start_timer();
//! // ... load inputs ...
//! stats.record_elapsed("load");
//! // ... solve ...
//! stats.record_elapsed("solve");
//! stats.record_count("iterations", 12.0);
//!
//! let mut out = Vec::new();
//! stats.report(&mut out).unwrap();
//! ```

pub mod error;
pub mod stats;

pub use error::{Result, StatsError};
pub use stats::{
    LabelStats, ReportOptions, SampleKind, SampleSeries, SeriesStats,
    StatsRegistry,
};
