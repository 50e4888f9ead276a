//! # chronograph - A Stopwatch for Timing Rust Code
//!
//! `chronograph` measures wall-clock time across one or more labeled
//! intervals ("splits") and reports the results.
//!
//! ## Features
//! - **Start / stop / split** state machine with an append-only split history
//! - **Named instances** shared through a process-wide registry
//! - **Scoped timing** with guards that stop on every exit path
//! - **Function wrapping** with a combinator or the [`chronograph_fn!`] macro
//! - **Reports and JSON dumps** of the recorded splits
//!
//! ## Example
//!
//! ```rust
//! use chronograph::prelude::*;
//!
//! let mut cg = Chronograph::new("Testing Chronograph");
//!
//! cg.start(Some("first section")).unwrap();
//! // ... work ...
//! cg.split(Some("second section")).unwrap();
//! // ... more work ...
//! cg.stop().unwrap();
//!
//! assert_eq!(cg.splits().len(), 2);
//! assert_eq!(cg.state(), State::Stopped);
//! println!("{}", cg.report(false));
//! ```
//!
//! ## Named chronographs
//!
//! ```rust
//! use chronograph::prelude::*;
//!
//! fn func1() {
//!     let cg = get_chronograph("my first chronograph");
//!     let _scope = cg.scope(None).unwrap();
//!     // ... timed until the end of the function ...
//! }
//!
//! func1();
//! func1();
//! assert_eq!(get_chronograph("my first chronograph").lock().splits().len(), 2);
//! ```
//!
//! ## Misuse
//!
//! Starting a running chronograph, or stopping one that is not running,
//! returns [`ChronographError::InvalidState`]. With `throw_exceptions` turned
//! off the call is logged as a warning and ignored instead:
//!
//! ```rust
//! use chronograph::prelude::*;
//!
//! let mut cg = Chronograph::with_options(
//!     ChronographOptions::new("lenient").with_throw_exceptions(false),
//! );
//! cg.start(None).unwrap();
//! assert_eq!(cg.start(None), Ok(false));
//! ```
//!
//! ## Modules
//!
//! - [`chronograph`] - The timer state machine and its scope guard.
//! - [`split`] - Split records and serializable timing data.
//! - [`registry`] - Named, shared chronographs.
//! - [`decorator`] - Timing wrappers for functions.
//! - [`report`] - Text summaries.
//! - [`json`] - JSON dumps.
//! - [`settings`] - Environment defaults.
//!
//! ## License
//!
//! This project is licensed under the **MIT License**.
pub mod chronograph;
pub mod clock;
pub mod decorator;
pub mod error;
pub mod json;
mod macros;
pub mod options;
mod output;
pub mod registry;
pub mod report;
pub mod settings;
pub mod split;

pub use chronograph::{Chronograph, Scope, State};
pub use clock::{Clock, SystemClock};
pub use decorator::{add_chronograph, add_chronograph_with, DecoratorOptions};
pub use error::{Action, ChronographError};
pub use options::ChronographOptions;
pub use registry::{
    get_chronograph, get_chronograph_with, ChronographHandle, HandleScope, Registry,
};
pub use settings::Settings;
pub use split::{Split, TimingData};
pub use tracing;

pub mod prelude {
    pub use crate::chronograph_fn;
    pub use crate::json::{splits_from_json, timing_data_from_json};
    pub use crate::{
        add_chronograph, add_chronograph_with, get_chronograph, get_chronograph_with, Action,
        Chronograph, ChronographError, ChronographHandle, ChronographOptions, Clock,
        DecoratorOptions, HandleScope, Registry, Scope, Settings, Split, State, SystemClock,
        TimingData,
    };
}
