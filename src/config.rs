/// Settings that the entry point resolves once and threads into
/// [`crate::run`].
///
/// The pipeline never reads process-wide state; everything it needs to know
/// about how to run comes through this value.
///
/// # Examples
/// ```
/// use ban::Config;
///
/// let config = Config::default().with_debug(true);
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Dump the token stream and the parsed statements before execution.
    pub debug: bool,
}

impl Config {
    /// Returns a copy of this configuration with the debug dump switched on or
    /// off.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
