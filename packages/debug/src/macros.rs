/// Writes the given values through a debugger when it is enabled.
///
/// ```rust
/// let debugger = nsdebug::Debugger::builder("app").sink(nsdebug::sink::NoopSink).build();
/// nsdebug::debug!(debugger, "listening on", 8080);
/// ```
#[macro_export]
macro_rules! debug {
    ($debugger:expr $(, $value:expr)* $(,)?) => {
        $debugger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
