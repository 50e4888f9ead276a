use once_cell::sync::Lazy;
use std::env;
use tracing::{debug, Level};

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::load);

#[derive(Debug, Clone)]
pub struct Settings {
    /**
     * Default verbosity
     *
     * 0 is silent, 1 logs every start and stop, 2 adds labels and split times.
     * Environment variable: CHRONOGRAPH_VERBOSITY
     * Default: 0
     */
    pub verbosity: u8,
    /**
     * Default misuse policy
     *
     * When true an out-of-order start, stop or split returns an error.
     * When false it is logged as a warning and ignored.
     * Environment variable: CHRONOGRAPH_THROW_EXCEPTIONS
     * Default: true
     */
    pub throw_exceptions: bool,
    /**
     * Default log level used when a logger is attached
     *
     * Environment variable: CHRONOGRAPH_LOG_LEVEL
     * Default: info
     */
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbosity: 0,
            throw_exceptions: true,
            log_level: Level::INFO,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let defaults = Settings::default();

        let verbosity = env::var("CHRONOGRAPH_VERBOSITY")
            .ok()
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(defaults.verbosity);

        let throw_exceptions = env::var("CHRONOGRAPH_THROW_EXCEPTIONS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.throw_exceptions);

        let log_level = match env::var("CHRONOGRAPH_LOG_LEVEL") {
            Ok(level) => level.parse::<Level>().unwrap_or(defaults.log_level),
            Err(_) => defaults.log_level,
        };

        debug!("CHRONOGRAPH_VERBOSITY = {}", verbosity);
        debug!("CHRONOGRAPH_THROW_EXCEPTIONS = {}", throw_exceptions);
        debug!("CHRONOGRAPH_LOG_LEVEL = {}", log_level);

        Self {
            verbosity,
            throw_exceptions,
            log_level,
        }
    }

    /// Settings read from the environment the first time they are needed.
    pub fn global() -> &'static Settings {
        &SETTINGS
    }
}
