use tracing::{Dispatch, Level};

/// Where a chronograph writes its messages and reports.
///
/// With a logger attached, messages become `tracing` events dispatched to
/// that subscriber; otherwise they go to standard output.
#[derive(Debug, Clone)]
pub(crate) enum Output {
    Stdout,
    Logger { dispatch: Dispatch, level: Level },
}

impl Output {
    pub(crate) fn new(logger: Option<Dispatch>, level: Level) -> Self {
        match logger {
            Some(dispatch) => Output::Logger { dispatch, level },
            None => Output::Stdout,
        }
    }

    pub(crate) fn emit(&self, message: &str) {
        match self {
            Output::Stdout => println!("{}", message),
            Output::Logger { dispatch, level } => {
                tracing::dispatcher::with_default(dispatch, || log_at(*level, message))
            }
        }
    }

    pub(crate) fn warn(&self, message: &str) {
        match self {
            Output::Stdout => println!("Warning: {}", message),
            Output::Logger { dispatch, .. } => {
                tracing::dispatcher::with_default(dispatch, || log_at(Level::WARN, message))
            }
        }
    }
}

fn log_at(level: Level, message: &str) {
    match level {
        Level::ERROR => tracing::error!(target: "chronograph", "{}", message),
        Level::WARN => tracing::warn!(target: "chronograph", "{}", message),
        Level::INFO => tracing::info!(target: "chronograph", "{}", message),
        Level::DEBUG => tracing::debug!(target: "chronograph", "{}", message),
        _ => tracing::trace!(target: "chronograph", "{}", message),
    }
}
