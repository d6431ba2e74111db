//! Human-readable report rendering.
//!
//! One line per label, labels lexically sorted, values starting at a common
//! column. The numeric style follows iostream's default float output:
//! significant digits rather than fixed decimals, trailing zeros trimmed.

use std::io::{self, Write};

use super::series::SampleSeries;
use super::SampleKind;

/// Significant digits carried by every rendered value.
const SIG_DIGITS: i32 = 10;

/// Gap between the label column and the value column.
const COLUMN_GAP: usize = 2;

/// Rendering knobs for [`crate::StatsRegistry::report_with`].
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Reproduce the historical report, which tagged `Count` averages with a
    /// spurious `ms` suffix. Off by default; the corrected report leaves
    /// counts unit-less.
    pub legacy_count_suffix: bool,
}

/// Write one aligned line per entry. Entries must already be label-sorted.
pub(crate) fn render(
    out: &mut dyn Write,
    entries: &[(&str, &SampleSeries)],
    opts: &ReportOptions,
) -> io::Result<()> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len() + 1)
        .max()
        .unwrap_or(0);

    for &(label, series) in entries {
        let tag = format!("{label}:");
        write!(out, "{tag:<width$}", width = label_width + COLUMN_GAP)?;
        writeln!(out, "{}", render_value(series, opts))?;
    }
    Ok(())
}

/// The value column for one series. Never fails: an empty series renders a
/// neutral placeholder instead of propagating an error into the report path.
fn render_value(series: &SampleSeries, opts: &ReportOptions) -> String {
    let Some(max) = series.max() else {
        return "(no samples)".to_string();
    };
    let avg = series.average();

    match series.kind() {
        SampleKind::Time => format!(
            "{} ms  (max = {} ms)",
            sig(avg * 1000.0),
            sig(max * 1000.0)
        ),
        SampleKind::Count if opts.legacy_count_suffix => {
            format!("{} ms  (max = {} ms)", sig(avg), sig(max))
        }
        SampleKind::Count => format!("{}  (max = {})", sig(avg), sig(max)),
        SampleKind::Percentage => {
            format!("{} %  (max = {} %)", sig(avg * 100.0), sig(max * 100.0))
        }
    }
}

/// Format with [`SIG_DIGITS`] significant digits, trailing zeros trimmed.
fn sig(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_DIGITS - 1 - magnitude).max(0) as usize;
    let rendered = format!("{value:.decimals$}");
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sig_trims_trailing_zeros() {
        assert_eq!(sig(2.0), "2");
        assert_eq!(sig(0.5), "0.5");
        assert_eq!(sig(1500.0), "1500");
        assert_eq!(sig(0.0), "0");
    }

    #[test]
    fn sig_keeps_ten_significant_digits() {
        assert_eq!(sig(1.0 / 3.0), "0.3333333333");
        assert_eq!(sig(12.3456789012), "12.3456789");
        assert_eq!(sig(-0.25), "-0.25");
    }

    #[test]
    fn labels_align_to_the_longest() {
        let mut short = SampleSeries::new(SampleKind::Count);
        short.push(1.0, SampleKind::Count);
        let mut longer = SampleSeries::new(SampleKind::Count);
        longer.push(2.0, SampleKind::Count);

        let mut buf = Vec::new();
        render(
            &mut buf,
            &[("a", &short), ("longer-label", &longer)],
            &ReportOptions::default(),
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let first = lines.next().unwrap();
        let second = lines.next().unwrap();
        // Both value columns start at the same offset.
        assert_eq!(first.find('1'), second.find('2'));
    }

    #[test]
    fn time_series_render_in_milliseconds() {
        let mut s = SampleSeries::new(SampleKind::Time);
        s.push(0.010, SampleKind::Time);
        s.push(0.030, SampleKind::Time);
        let line = render_value(&s, &ReportOptions::default());
        assert_eq!(line, "20 ms  (max = 30 ms)");
    }

    #[test]
    fn count_suffix_is_gated_by_the_legacy_flag() {
        let mut s = SampleSeries::new(SampleKind::Count);
        s.push(3.0, SampleKind::Count);
        assert_eq!(
            render_value(&s, &ReportOptions::default()),
            "3  (max = 3)"
        );
        let legacy = ReportOptions {
            legacy_count_suffix: true,
        };
        assert_eq!(render_value(&s, &legacy), "3 ms  (max = 3 ms)");
    }

    #[test]
    fn percentages_scale_by_one_hundred() {
        let mut s = SampleSeries::new(SampleKind::Percentage);
        for v in [1.0, 2.0, 3.0] {
            s.push(v, SampleKind::Percentage);
        }
        assert_eq!(
            render_value(&s, &ReportOptions::default()),
            "200 %  (max = 300 %)"
        );
    }

    #[test]
    fn empty_series_renders_a_placeholder() {
        let s = SampleSeries::new(SampleKind::Time);
        assert_eq!(render_value(&s, &ReportOptions::default()), "(no samples)");
    }
}
