use crate::error::{Action, ChronographError};
use crate::options::ChronographOptions;
use crate::output::Output;
use crate::report;
use crate::split::{Split, TimingData};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Stopped,
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Idle => write!(f, "idle"),
            State::Running => write!(f, "running"),
            State::Stopped => write!(f, "stopped"),
        }
    }
}

/// A named stopwatch that records an ordered list of [`Split`]s.
///
/// The state is read off the split list: no splits is `Idle`, an open last
/// split is `Running`, anything else is `Stopped`. Splits are only ever
/// appended, and only [`reset`](Chronograph::reset) removes them.
#[derive(Debug)]
pub struct Chronograph {
    name: String,
    splits: Vec<Split>,
    options: ChronographOptions,
    output: Output,
}

impl Default for Chronograph {
    fn default() -> Self {
        Self::with_options(ChronographOptions::default())
    }
}

impl Chronograph {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(ChronographOptions::new(name))
    }

    pub fn with_options(options: ChronographOptions) -> Self {
        let output = Output::new(options.logger.clone(), options.log_level);
        let mut chronograph = Self {
            name: options.name.clone(),
            splits: Vec::new(),
            options,
            output,
        };

        if chronograph.options.start_timing {
            let now = chronograph.now();
            chronograph.open(None, now);
        }

        chronograph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ChronographOptions {
        &self.options
    }

    pub fn state(&self) -> State {
        match self.splits.last() {
            None => State::Idle,
            Some(split) if split.is_closed() => State::Stopped,
            Some(_) => State::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == State::Running
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Opens a new split. Valid while idle or stopped.
    ///
    /// Returns `Ok(false)` when the call was ignored because the chronograph
    /// is lenient about misuse.
    pub fn start(&mut self, label: Option<&str>) -> Result<bool, ChronographError> {
        if self.is_running() {
            return self.misuse(Action::Start);
        }

        let now = self.now();
        self.open(label, now);
        Ok(true)
    }

    /// Closes the running split.
    pub fn stop(&mut self) -> Result<bool, ChronographError> {
        if !self.is_running() {
            return self.misuse(Action::Stop);
        }

        let now = self.now();
        self.close(now);
        Ok(true)
    }

    /// Closes the running split and opens the next one at the same instant.
    ///
    /// An idle chronograph is simply started. Splitting a stopped one is a
    /// misuse, like stopping it would be.
    pub fn split(&mut self, label: Option<&str>) -> Result<bool, ChronographError> {
        let now = self.now();

        match self.state() {
            State::Idle => self.open(label, now),
            State::Running => {
                self.close(now);
                self.open(label, now);
            }
            State::Stopped => return self.misuse(Action::Split),
        }

        Ok(true)
    }

    pub fn reset(&mut self) {
        self.splits.clear();

        if self.options.verbosity >= 2 {
            self.output.emit(&format!("Chronograph {} was reset", self.name));
        }
    }

    /// Sum of all closed splits.
    pub fn total_elapsed_time(&self) -> Duration {
        self.splits.iter().filter_map(Split::elapsed).sum()
    }

    /// Like [`total_elapsed_time`](Self::total_elapsed_time), plus the time
    /// the running split has accumulated so far.
    pub fn live_elapsed_time(&self) -> Duration {
        let now = self.now();
        self.splits.iter().map(|split| split.elapsed_until(now)).sum()
    }

    /// Duration of the most recently closed split.
    pub fn last_split_time(&self) -> Option<Duration> {
        self.splits.iter().rev().find_map(Split::elapsed)
    }

    /// Total elapsed time in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.total_elapsed_time().as_secs_f64()
    }

    pub fn timing_data(&self) -> TimingData {
        TimingData {
            name: self.name.clone(),
            splits: self.splits.clone(),
        }
    }

    /// Formats the summary and, if `printout` is set, writes it to the
    /// logger (or stdout when there is none).
    pub fn report(&self, printout: bool) -> String {
        let text = report::format(&self.name, &self.splits, self.now());

        if printout {
            self.output.emit(&text);
        }

        text
    }

    /// Starts a split that is stopped when the returned guard goes out of
    /// scope, including on early return or panic.
    pub fn scope(&mut self, label: Option<&str>) -> Result<Scope<'_>, ChronographError> {
        self.start(label)?;
        Ok(Scope { chronograph: self })
    }

    /// Closes the running split, if any. Used by guards on scope exit.
    pub(crate) fn release(&mut self) {
        if self.is_running() {
            let now = self.now();
            self.close(now);
        }
    }

    /// Sends a warning to this chronograph's logger, or stdout.
    pub(crate) fn warn(&self, message: &str) {
        self.output.warn(message);
    }

    fn now(&self) -> DateTime<Utc> {
        self.options.clock.now()
    }

    fn open(&mut self, label: Option<&str>, now: DateTime<Utc>) {
        self.splits.push(Split::open(now, label.map(str::to_string)));

        match self.options.verbosity {
            0 => {}
            1 => self.output.emit(&format!("Chronograph {} started", self.name)),
            _ => self.output.emit(&format!(
                "Chronograph {} started split {} at {}",
                self.name,
                report::split_label(label, self.splits.len()),
                now.to_rfc3339()
            )),
        }
    }

    fn close(&mut self, now: DateTime<Utc>) {
        let index = self.splits.len();
        let Some(split) = self.splits.last_mut() else {
            return;
        };
        split.close(now);

        match self.options.verbosity {
            0 => {}
            1 => self.output.emit(&format!("Chronograph {} stopped", self.name)),
            _ => {
                let elapsed = split.elapsed().unwrap_or_default();
                let message = format!(
                    "Chronograph {} stopped split {} after {}",
                    self.name,
                    report::split_label(split.label(), index),
                    report::seconds(elapsed)
                );
                self.output.emit(&message);
            }
        }
    }

    fn misuse(&self, action: Action) -> Result<bool, ChronographError> {
        let err = ChronographError::invalid_state(&self.name, action, self.state());

        if self.options.throw_exceptions {
            return Err(err);
        }

        self.warn(&err.to_string());
        Ok(false)
    }
}

/// Guard returned by [`Chronograph::scope`].
///
/// Derefs to the chronograph so the scope body can still split it.
#[must_use]
#[derive(Debug)]
pub struct Scope<'a> {
    chronograph: &'a mut Chronograph,
}

impl Scope<'_> {
    /// Stops the chronograph now and returns the last split's duration.
    pub fn finish(self) -> Option<Duration> {
        self.chronograph.release();
        self.chronograph.last_split_time()
    }
}

impl Deref for Scope<'_> {
    type Target = Chronograph;

    fn deref(&self) -> &Chronograph {
        self.chronograph
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Chronograph {
        self.chronograph
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.chronograph.release();
    }
}
