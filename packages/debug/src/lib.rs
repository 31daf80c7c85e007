//! Namespaced debug output.
//!
//! A [`Debugger`] is one named scope in a hierarchy such as `app:db:pool`.
//! Whether it prints is decided once, when it is created, by matching its
//! full name against the filter pattern in the `DEBUG` environment variable.
//! See [`filter`] for the pattern syntax.
//!
//! ```rust
//! use nsdebug::{Debugger, sink::NoopSink};
//! use nsdebug_env::simulator::SimulatorEnv;
//!
//! let env = SimulatorEnv::new();
//! env.set_var("DEBUG", "app:*:pool");
//!
//! let app = Debugger::builder("app").env(env).sink(NoopSink).build();
//! let db = app.child("db");
//! let pool = db.child("pool");
//!
//! assert_eq!(pool.full_name(), "app:db:pool");
//! assert!(pool.enabled());
//! assert!(!db.enabled());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt::{self, Display};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nsdebug_env::{EnvProvider, standard::StandardEnv};

pub mod config;
pub mod filter;
pub mod sink;

#[cfg(feature = "macros")]
mod macros;

pub use config::DebuggerConfig;
pub use filter::Filter;
pub use nsdebug_env;
pub use sink::Sink;

/// One node in the naming hierarchy.
///
/// Children borrow their parent, so a parent always outlives its children.
pub struct Debugger<'a> {
    label: String,
    config: Arc<DebuggerConfig>,
    parent: Option<&'a Debugger<'a>>,
    enabled: AtomicBool,
    env: Arc<dyn EnvProvider>,
    sink: Arc<dyn Sink>,
}

/// Creates a root debugger with the default configuration, the process
/// environment and the default sink.
#[must_use]
pub fn create_debugger(label: impl Into<String>) -> Debugger<'static> {
    Debugger::new(label, DebuggerConfig::default())
}

impl Debugger<'static> {
    /// Creates a root debugger with the given config, the process
    /// environment and the default sink.
    #[must_use]
    pub fn new(label: impl Into<String>, config: DebuggerConfig) -> Self {
        Debugger::builder(label).config(config).build()
    }
}

impl<'a> Debugger<'a> {
    /// Starts a [`DebuggerBuilder`] for a debugger labelled `label`.
    #[must_use]
    pub fn builder(label: impl Into<String>) -> DebuggerBuilder<'a> {
        DebuggerBuilder::new(label)
    }

    fn construct(
        label: String,
        config: Arc<DebuggerConfig>,
        parent: Option<&'a Self>,
        env: Arc<dyn EnvProvider>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        let mut debugger = Self {
            label,
            config,
            parent,
            enabled: AtomicBool::new(false),
            env,
            sink,
        };

        let pattern = debugger.env.var_opt(&debugger.config.filter_var);
        let enabled = debugger.should_log(pattern.as_deref());
        *debugger.enabled.get_mut() = enabled;

        debugger
    }

    fn should_log(&self, pattern: Option<&str>) -> bool {
        let name = self.full_name();

        let Some(pattern) = pattern else {
            log::trace!(
                "{name}: {} is not set, disabled",
                self.config.filter_var
            );
            return false;
        };

        let enabled = Filter::new(pattern, &self.config.separator).matches(&name);
        log::trace!(
            "{name}: {}={pattern:?} enabled={enabled}",
            self.config.filter_var
        );

        enabled
    }

    /// The local name segment.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The config shared with every child of this debugger.
    #[must_use]
    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    /// The debugger this one was created below, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'a Debugger<'a>> {
        self.parent
    }

    /// Ancestor labels followed by this label, joined with this debugger's
    /// separator. The separators configured on ancestors are not used.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut segments = vec![self.label.as_str()];
        let mut parent = self.parent;

        while let Some(node) = parent {
            segments.push(node.label.as_str());
            parent = node.parent;
        }

        segments.reverse();
        segments.join(&self.config.separator)
    }

    /// Whether [`Self::debug`] currently writes to the sink.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns output on, regardless of the filter.
    ///
    /// ```rust
    /// use nsdebug::{Debugger, sink::NoopSink};
    /// use nsdebug_env::simulator::SimulatorEnv;
    ///
    /// let app = Debugger::builder("app").env(SimulatorEnv::new()).sink(NoopSink).build();
    /// assert!(!app.enabled());
    ///
    /// app.enable();
    /// assert!(app.enabled());
    ///
    /// app.disable();
    /// assert!(!app.enabled());
    /// ```
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    /// Turns output off, regardless of the filter.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    /// Hands `[full:name]` and `values` to the sink if enabled.
    pub fn debug(&self, values: &[&dyn Display]) {
        if self.enabled() {
            let prefix = format!("[{}]", self.full_name());
            self.sink.write(&prefix, values);
        }
    }

    /// Returns a closure that forwards to [`Self::debug`].
    pub fn as_fn(&self) -> impl Fn(&[&dyn Display]) + '_ {
        move |values: &[&dyn Display]| self.debug(values)
    }

    /// Creates a child scope.
    ///
    /// The first occurrence of this debugger's full name is removed from
    /// `label`, then every separator, so `"child"`, `"app:child"` and
    /// `"ch:ild"` all name the same child of `app`.
    ///
    /// The child shares this debugger's config, environment and sink, and
    /// reads the filter again instead of inheriting [`Self::enabled`].
    #[must_use]
    pub fn child(&self, label: &str) -> Debugger<'_> {
        let separator = self.config.separator.as_str();
        let label = label.replacen(&self.full_name(), "", 1);
        let label = if separator.is_empty() {
            label
        } else {
            label.replace(separator, "")
        };

        Debugger::construct(
            label,
            Arc::clone(&self.config),
            Some(self),
            Arc::clone(&self.env),
            Arc::clone(&self.sink),
        )
    }
}

impl fmt::Debug for Debugger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debugger")
            .field("name", &self.full_name())
            .field("enabled", &self.enabled())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Debugger`], optionally below an existing parent.
///
/// Unset pieces default to [`DebuggerConfig::default`], the process
/// environment and [`sink::default_sink`]. With a parent, environment and
/// sink default to the parent's instead.
pub struct DebuggerBuilder<'a> {
    label: String,
    config: DebuggerConfig,
    parent: Option<&'a Debugger<'a>>,
    env: Option<Arc<dyn EnvProvider>>,
    sink: Option<Arc<dyn Sink>>,
}

impl<'a> DebuggerBuilder<'a> {
    /// Starts a builder for a root debugger labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            config: DebuggerConfig::default(),
            parent: None,
            env: None,
            sink: None,
        }
    }

    /// Replaces the whole config.
    #[must_use]
    pub fn config(mut self, config: DebuggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the separator used to join and clean name segments.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Sets the environment variable the filter pattern is read from.
    #[must_use]
    pub fn filter_var(mut self, filter_var: impl Into<String>) -> Self {
        self.config.filter_var = filter_var.into();
        self
    }

    /// The label is used as given; unlike [`Debugger::child`] it is not
    /// cleaned of the parent's name.
    #[must_use]
    pub fn parent(mut self, parent: &'a Debugger<'a>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Reads the filter through `env` instead of the process environment.
    #[must_use]
    pub fn env(mut self, env: impl EnvProvider + 'static) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    /// Writes output to `sink`.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Writes output to a sink already shared with other debuggers.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Creates the debugger, reading the filter once.
    #[must_use]
    pub fn build(self) -> Debugger<'a> {
        let env = self
            .env
            .or_else(|| self.parent.map(|p| Arc::clone(&p.env)))
            .unwrap_or_else(|| Arc::new(StandardEnv::new()) as Arc<dyn EnvProvider>);
        let sink = self
            .sink
            .or_else(|| self.parent.map(|p| Arc::clone(&p.sink)))
            .unwrap_or_else(sink::default_sink);

        Debugger::construct(self.label, Arc::new(self.config), self.parent, env, sink)
    }
}
