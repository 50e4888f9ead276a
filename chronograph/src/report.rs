use crate::split::Split;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Renders the multi-line summary printed by `Chronograph::report`.
///
/// ```text
/// Chronograph: build
///   compile: 1.250000s
///   split 2: 0.500000s
///   Total: 1.750000s
/// ```
///
/// An open split is shown as running with its duration so far, and is left
/// out of the total.
pub fn format(name: &str, splits: &[Split], now: DateTime<Utc>) -> String {
    let mut text = format!("Chronograph: {}", name);

    for (index, split) in splits.iter().enumerate() {
        let label = split_label(split.label(), index + 1);
        let line = match split.elapsed() {
            Some(elapsed) => format!("\n  {}: {}", label, seconds(elapsed)),
            None => format!(
                "\n  {}: {} (running)",
                label,
                seconds(split.elapsed_until(now))
            ),
        };
        text.push_str(&line);
    }

    let total: Duration = splits.iter().filter_map(Split::elapsed).sum();
    text.push_str(&format!("\n  Total: {}", seconds(total)));

    text
}

/// Label to display for the split at 1-based `position`.
pub fn split_label(label: Option<&str>, position: usize) -> String {
    match label {
        Some(label) => label.to_string(),
        None => format!("split {}", position),
    }
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.6}s", duration.as_secs_f64())
}
