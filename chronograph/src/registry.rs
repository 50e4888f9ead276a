//! Named chronographs shared across a program.
//!
//! A [`Registry`] maps names to [`ChronographHandle`]s and creates an
//! instance the first time a name is asked for. Creation options only count
//! on that first request; later lookups return the existing instance as is.
//!
//! [`Registry::global`] is the process-wide registry behind
//! [`get_chronograph`]. It is built on first use and lives until the process
//! exits, unless entries are removed with [`Registry::remove`] or
//! [`Registry::clear`]. Code that wants isolation (tests, libraries) can
//! create its own `Registry` and pass it around instead.
use crate::chronograph::{Chronograph, State};
use crate::error::ChronographError;
use crate::options::ChronographOptions;
use crate::split::TimingData;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared reference to a chronograph held by a registry.
#[derive(Debug, Clone)]
pub struct ChronographHandle {
    inner: Arc<Mutex<Chronograph>>,
}

impl ChronographHandle {
    pub fn new(chronograph: Chronograph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chronograph)),
        }
    }

    /// Locks the chronograph for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Chronograph> {
        lock(&self.inner)
    }

    /// True when both handles point at the same chronograph.
    pub fn ptr_eq(&self, other: &ChronographHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn name(&self) -> String {
        self.lock().name().to_string()
    }

    pub fn state(&self) -> State {
        self.lock().state()
    }

    pub fn start(&self, label: Option<&str>) -> Result<bool, ChronographError> {
        self.lock().start(label)
    }

    pub fn stop(&self) -> Result<bool, ChronographError> {
        self.lock().stop()
    }

    pub fn split(&self, label: Option<&str>) -> Result<bool, ChronographError> {
        self.lock().split(label)
    }

    pub fn reset(&self) {
        self.lock().reset()
    }

    pub fn total_elapsed_time(&self) -> Duration {
        self.lock().total_elapsed_time()
    }

    pub fn last_split_time(&self) -> Option<Duration> {
        self.lock().last_split_time()
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.lock().as_secs_f64()
    }

    pub fn timing_data(&self) -> TimingData {
        self.lock().timing_data()
    }

    pub fn report(&self, printout: bool) -> String {
        self.lock().report(printout)
    }

    /// Starts a split that is stopped when the guard is dropped.
    ///
    /// The lock is only held while starting and stopping, not for the life
    /// of the guard.
    pub fn scope(&self, label: Option<&str>) -> Result<HandleScope, ChronographError> {
        self.start(label)?;
        Ok(HandleScope::armed(self.clone()))
    }
}

/// Guard returned by [`ChronographHandle::scope`].
#[must_use]
#[derive(Debug)]
pub struct HandleScope {
    handle: ChronographHandle,
}

impl HandleScope {
    pub(crate) fn armed(handle: ChronographHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &ChronographHandle {
        &self.handle
    }

    pub fn finish(self) -> Option<Duration> {
        let mut chronograph = self.handle.lock();
        chronograph.release();
        chronograph.last_split_time()
    }
}

impl Drop for HandleScope {
    fn drop(&mut self) {
        self.handle.lock().release();
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    chronographs: Mutex<HashMap<String, ChronographHandle>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Returns the chronograph called `name`, building it from `options` if
    /// it does not exist yet. `options.name` is replaced by `name`.
    pub fn get_chronograph(&self, name: &str, options: ChronographOptions) -> ChronographHandle {
        let mut chronographs = lock(&self.chronographs);

        if let Some(handle) = chronographs.get(name) {
            return handle.clone();
        }

        debug!(target: "chronograph", "Creating chronograph {}", name);

        let handle = ChronographHandle::new(Chronograph::with_options(options.with_name(name)));
        chronographs.insert(name.to_string(), handle.clone());
        handle
    }

    pub fn get_or_default(&self, name: &str) -> ChronographHandle {
        self.get_chronograph(name, ChronographOptions::default())
    }

    /// Looks `name` up without creating it.
    pub fn get(&self, name: &str) -> Option<ChronographHandle> {
        lock(&self.chronographs).get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        lock(&self.chronographs).contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Option<ChronographHandle> {
        lock(&self.chronographs).remove(name)
    }

    pub fn clear(&self) {
        lock(&self.chronographs).clear()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = lock(&self.chronographs).keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        lock(&self.chronographs).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.chronographs).is_empty()
    }
}

/// Chronograph `name` from the global registry, created with default options
/// if needed.
pub fn get_chronograph(name: &str) -> ChronographHandle {
    Registry::global().get_or_default(name)
}

/// Chronograph `name` from the global registry. `options` are used only if
/// this call creates it.
pub fn get_chronograph_with(name: &str, options: ChronographOptions) -> ChronographHandle {
    Registry::global().get_chronograph(name, options)
}
