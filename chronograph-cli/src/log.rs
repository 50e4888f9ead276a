use tracing::Level;
use tracing_core::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

fn get_log_level() -> Level {
    match std::env::var("CHRONOGRAPH_LOG") {
        Ok(level) => level.parse::<Level>().unwrap_or(Level::INFO),
        Err(_) => Level::INFO,
    }
}

// Logs go to stderr so a JSON dump on stdout stays parseable.
pub fn init_tracing() {
    Registry::default()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::from_level(get_log_level())),
        )
        .init()
}
