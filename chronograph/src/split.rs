use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One start-to-stop interval of a chronograph.
///
/// A split is open while `stop` is absent and becomes immutable once it is
/// closed. Serializes as `{"start": .., "stop": .., "label": ..}` with
/// RFC 3339 timestamps, so a JSON dump parses back to the same instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    start: DateTime<Utc>,
    stop: Option<DateTime<Utc>>,
    label: Option<String>,
}

impl Split {
    pub(crate) fn open(start: DateTime<Utc>, label: Option<String>) -> Self {
        Self {
            start,
            stop: None,
            label,
        }
    }

    pub(crate) fn close(&mut self, stop: DateTime<Utc>) {
        if self.stop.is_none() {
            self.stop = Some(stop);
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn stop(&self) -> Option<DateTime<Utc>> {
        self.stop
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.stop.is_some()
    }

    /// Duration of a closed split, `None` while it is still running.
    pub fn elapsed(&self) -> Option<Duration> {
        self.stop.map(|stop| between(self.start, stop))
    }

    /// Duration up to `now` for an open split, or the closed duration.
    pub fn elapsed_until(&self, now: DateTime<Utc>) -> Duration {
        between(self.start, self.stop.unwrap_or(now))
    }
}

// A wall clock may step backwards; such splits count as zero.
fn between(start: DateTime<Utc>, stop: DateTime<Utc>) -> Duration {
    (stop - start).to_std().unwrap_or(Duration::ZERO)
}

/// Named snapshot of a chronograph's splits, as written by the JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingData {
    pub name: String,
    pub splits: Vec<Split>,
}

impl TimingData {
    pub fn total_elapsed_time(&self) -> Duration {
        self.splits.iter().filter_map(Split::elapsed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap() + TimeDelta::milliseconds(millis)
    }

    #[test]
    fn test_open_split_has_no_elapsed() {
        let split = Split::open(at(0), Some("first".to_string()));

        assert!(!split.is_closed());
        assert_eq!(split.elapsed(), None);
        assert_eq!(split.elapsed_until(at(40)), Duration::from_millis(40));
        assert_eq!(split.label(), Some("first"));
    }

    #[test]
    fn test_close_is_final() {
        let mut split = Split::open(at(0), None);
        split.close(at(250));
        split.close(at(900));

        assert_eq!(split.stop(), Some(at(250)));
        assert_eq!(split.elapsed(), Some(Duration::from_millis(250)));
        assert_eq!(split.elapsed_until(at(5000)), Duration::from_millis(250));
    }

    #[test]
    fn test_backwards_clock_counts_as_zero() {
        let mut split = Split::open(at(100), None);
        split.close(at(0));

        assert_eq!(split.elapsed(), Some(Duration::ZERO));
    }

    #[test]
    fn test_timing_data_ignores_open_splits() {
        let mut first = Split::open(at(0), None);
        first.close(at(500));
        let open = Split::open(at(500), None);

        let data = TimingData {
            name: "data".to_string(),
            splits: vec![first, open],
        };

        assert_eq!(data.total_elapsed_time(), Duration::from_millis(500));
    }
}
