use crate::clock::{system_clock, Clock};
use crate::settings::Settings;
use std::sync::Arc;
use tracing::{Dispatch, Level};

pub const DEFAULT_NAME: &str = "Default";

/// Construction options for a [`Chronograph`](crate::Chronograph).
///
/// `Default` starts from [`Settings::global`], so the environment decides the
/// default verbosity, misuse policy and log level.
#[derive(Debug, Clone)]
pub struct ChronographOptions {
    pub name: String,
    pub start_timing: bool,
    pub verbosity: u8,
    pub logger: Option<Dispatch>,
    pub log_level: Level,
    pub throw_exceptions: bool,
    pub clock: Arc<dyn Clock>,
}

impl Default for ChronographOptions {
    fn default() -> Self {
        Self::from_settings(Settings::global())
    }
}

impl ChronographOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            start_timing: false,
            verbosity: settings.verbosity,
            logger: None,
            log_level: settings.log_level,
            throw_exceptions: settings.throw_exceptions,
            clock: system_clock(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_start_timing(mut self, start_timing: bool) -> Self {
        self.start_timing = start_timing;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Send messages and printed reports to `logger` instead of stdout.
    pub fn with_logger(mut self, logger: Dispatch) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_log_level(mut self, log_level: Level) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_throw_exceptions(mut self, throw_exceptions: bool) -> Self {
        self.throw_exceptions = throw_exceptions;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
