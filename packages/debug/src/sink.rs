//! Output sinks.
//!
//! A [`Sink`] receives the `[full:name]` prefix and the values handed to
//! [`Debugger::debug`](crate::Debugger::debug). Formatting is left to the sink.

use std::fmt::{self, Display};
use std::io::Write as _;
use std::sync::{Arc, LazyLock};

pub const LOG_TARGET: &str = "nsdebug";

pub trait Sink: Send + Sync {
    fn write(&self, prefix: &str, values: &[&dyn Display]);
}

/// One output line: the prefix followed by each value, space separated.
pub struct Line<'a, 'b> {
    prefix: &'a str,
    values: &'a [&'b dyn Display],
}

impl<'a, 'b> Line<'a, 'b> {
    #[must_use]
    pub const fn new(prefix: &'a str, values: &'a [&'b dyn Display]) -> Self {
        Self { prefix, values }
    }
}

impl Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix)?;
        for value in self.values {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// Forwards to the `log` facade at `Debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn write(&self, prefix: &str, values: &[&dyn Display]) {
        log::debug!(target: LOG_TARGET, "{}", Line::new(prefix, values));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, prefix: &str, values: &[&dyn Display]) {
        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(stderr, "{}", Line::new(prefix, values));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn write(&self, _prefix: &str, _values: &[&dyn Display]) {}
}

/// Adapts a closure into a [`Sink`].
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(&str, &[&dyn Display]) + Send + Sync,
{
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Sink for FnSink<F>
where
    F: Fn(&str, &[&dyn Display]) + Send + Sync,
{
    fn write(&self, prefix: &str, values: &[&dyn Display]) {
        (self.0)(prefix, values);
    }
}

static DEFAULT_SINK: LazyLock<Arc<dyn Sink>> = LazyLock::new(|| {
    if log::log_enabled!(target: LOG_TARGET, log::Level::Debug) {
        Arc::new(LogSink)
    } else {
        Arc::new(StderrSink)
    }
});

/// The sink debuggers use unless one is given explicitly.
///
/// Resolved once, on first use: the `log` facade when an installed logger
/// accepts `Debug` records for the `nsdebug` target, stderr otherwise. A
/// logger installed after that point is not picked up.
#[must_use]
pub fn default_sink() -> Arc<dyn Sink> {
    Arc::clone(&DEFAULT_SINK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[test_log::test]
    fn line_joins_values_with_spaces() {
        let values: [&dyn Display; 3] = [&"hello", &42, &'x'];
        assert_eq!(Line::new("[app]", &values).to_string(), "[app] hello 42 x");
    }

    #[test_log::test]
    fn line_without_values_is_just_the_prefix() {
        assert_eq!(Line::new("[app]", &[]).to_string(), "[app]");
    }

    #[test_log::test]
    fn fn_sink_passes_values_through() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            FnSink::new(move |prefix: &str, values: &[&dyn Display]| {
                seen.lock().unwrap().push((
                    prefix.to_string(),
                    values.iter().map(ToString::to_string).collect::<Vec<_>>(),
                ));
            })
        };

        sink.write("[a:b]", &[&"one", &2]);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(
                "[a:b]".to_string(),
                vec!["one".to_string(), "2".to_string()]
            )]
        );
    }

    #[test_log::test]
    fn default_sink_is_stable() {
        assert!(Arc::ptr_eq(&default_sink(), &default_sink()));
    }

    #[test_log::test]
    fn noop_sink_never_formats_values() {
        struct Panics;

        impl Display for Panics {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("noop sink formatted a value");
            }
        }

        NoopSink.write("[noop]", &[&Panics]);
    }
}
