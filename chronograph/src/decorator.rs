use crate::options::ChronographOptions;
use crate::registry::{HandleScope, Registry};

/// How a wrapped function is timed.
///
/// `name` is the registry key, `label` the label given to each call's split
/// (the name when absent) and `init` the options used if the chronograph has
/// to be created.
#[derive(Debug, Clone)]
pub struct DecoratorOptions {
    pub name: String,
    pub label: Option<String>,
    pub init: ChronographOptions,
}

impl DecoratorOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            init: ChronographOptions::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_init(mut self, init: ChronographOptions) -> Self {
        self.init = init;
        self
    }
}

/// Wraps `f` so every call is recorded as one split of the global
/// chronograph `name`.
///
/// ```
/// use chronograph::{add_chronograph, get_chronograph};
///
/// let mut work = add_chronograph("doc::work", || 21 * 2);
/// assert_eq!(work(), 42);
/// assert_eq!(work(), 42);
///
/// assert_eq!(get_chronograph("doc::work").lock().splits().len(), 2);
/// ```
pub fn add_chronograph<F, R>(name: impl Into<String>, f: F) -> impl FnMut() -> R
where
    F: FnMut() -> R,
{
    add_chronograph_with(DecoratorOptions::new(name), f)
}

pub fn add_chronograph_with<F, R>(options: DecoratorOptions, mut f: F) -> impl FnMut() -> R
where
    F: FnMut() -> R,
{
    move || {
        let _scope = enter(&options);
        f()
    }
}

/// Opens the split for one call of a wrapped function.
///
/// The split closes when the returned guard drops. Returns `None`, and times
/// nothing, when the chronograph is already running: the call then falls
/// inside the split that is already open.
pub fn enter(options: &DecoratorOptions) -> Option<HandleScope> {
    let handle = Registry::global().get_chronograph(&options.name, options.init.clone());
    let label = options.label.as_deref().unwrap_or(&options.name);

    {
        let mut chronograph = handle.lock();

        if chronograph.is_running() {
            chronograph.warn(&format!(
                "Chronograph {} is already running, call to {} is not timed separately",
                options.name, label
            ));
            return None;
        }

        match chronograph.start(Some(label)) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                chronograph.warn(&err.to_string());
                return None;
            }
        }
    }

    Some(HandleScope::armed(handle))
}
