//! Run statistics reporting.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// One `label: count` line per non-zero counter, grouped under a heading for
/// skipped records and one for lookup warnings. Empty when nothing was counted.
pub fn statistics_summary(stats: &ProcessingStats) -> Vec<String> {
    let mut lines = Vec::new();

    let skipped: Vec<_> = ErrorType::iter()
        .map(|e| (e.as_str(), stats.get_error_count(e)))
        .filter(|(_, count)| *count > 0)
        .collect();
    if !skipped.is_empty() {
        lines.push(format!("Skipped records ({} total):", stats.total_errors()));
        lines.extend(skipped.iter().map(|(label, count)| format!("   {label}: {count}")));
    }

    let warnings: Vec<_> = WarningType::iter()
        .map(|w| (w.as_str(), stats.get_warning_count(w)))
        .filter(|(_, count)| *count > 0)
        .collect();
    if !warnings.is_empty() {
        lines.push(format!("Lookup warnings ({} total):", stats.total_warnings()));
        lines.extend(warnings.iter().map(|(label, count)| format!("   {label}: {count}")));
    }

    lines.extend(
        InfoType::iter()
            .map(|i| (i.as_str(), stats.get_info_count(i)))
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| format!("{label}: {count}")),
    );

    lines
}

/// Logs the run's statistics at info level.
pub fn print_error_statistics(stats: &ProcessingStats) {
    for line in statistics_summary(stats) {
        info!("{}", line);
    }
}
