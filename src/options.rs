//! Stage configuration: caller-supplied options merged with defaults.
//!
//! `DebugOptions` is what callers hand to a stage; `DebugConfig` is the
//! fully resolved form, fixed for the lifetime of one stage instance.
//! Resolution is lenient by design: absent fields fall back to defaults,
//! nothing errors.

use std::sync::Arc;

use crate::mutex::OutputMutex;

/// Sink for formatted diagnostic lines. Called synchronously, fire and
/// forget; the default prints to stdout with auto-detected color support.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// Title used when the caller supplies none.
pub const DEFAULT_TITLE: &str = "pipetap:";

/// Caller-supplied stage options. All fields are optional; unset fields
/// take defaults at resolution time.
#[derive(Clone, Default)]
pub struct DebugOptions {
    pub logger: Option<Logger>,
    pub title: Option<String>,
    pub minimal: Option<bool>,
    pub show_files: Option<bool>,
    pub show_count: Option<bool>,
    pub verbose: bool,
    pub mutex: Option<OutputMutex>,
}

impl DebugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// When true (the default), per-item lines carry only the relative
    /// path. When false, each item gets a multi-line block.
    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = Some(minimal);
        self
    }

    pub fn show_files(mut self, show_files: bool) -> Self {
        self.show_files = Some(show_files);
        self
    }

    pub fn show_count(mut self, show_count: bool) -> Self {
        self.show_count = Some(show_count);
        self
    }

    /// Force full per-item blocks including the stat section. Overrides
    /// `minimal`, `show_files`, and `show_count`. Callers wanting the
    /// conventional `--verbose` process flag should pass
    /// `verbose_flag(std::env::args())` here; the stage itself never
    /// inspects process state.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Serialize output with other stages sharing the same mutex.
    pub fn mutex(mut self, mutex: OutputMutex) -> Self {
        self.mutex = Some(mutex);
        self
    }
}

/// Scan an argument list for `--verbose`.
///
/// Split out as a pure helper so configuration stays testable without
/// process-wide state: the caller decides which argument list (if any)
/// feeds the verbose switch.
pub fn verbose_flag<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| arg.as_ref() == "--verbose")
}

/// Fully resolved configuration, immutable per stage instance.
#[derive(Clone)]
pub(crate) struct DebugConfig {
    pub logger: Logger,
    pub title: String,
    pub minimal: bool,
    pub show_files: bool,
    pub show_count: bool,
    pub verbose: bool,
    pub mutex: Option<OutputMutex>,
}

impl DebugConfig {
    pub fn resolve(options: DebugOptions) -> Self {
        let mut config = Self {
            logger: options
                .logger
                .unwrap_or_else(|| Arc::new(|message: &str| crate::styling::println!("{message}"))),
            title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            minimal: options.minimal.unwrap_or(true),
            show_files: options.show_files.unwrap_or(true),
            show_count: options.show_count.unwrap_or(true),
            verbose: options.verbose,
            mutex: options.mutex,
        };

        // Verbose wins over explicit minimal/show_files/show_count
        if config.verbose {
            config.minimal = false;
            config.show_files = true;
            config.show_count = true;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DebugConfig::resolve(DebugOptions::new());
        assert_eq!(config.title, "pipetap:");
        assert!(config.minimal);
        assert!(config.show_files);
        assert!(config.show_count);
        assert!(!config.verbose);
        assert!(config.mutex.is_none());
    }

    #[test]
    fn explicit_options_override_defaults() {
        let config = DebugConfig::resolve(
            DebugOptions::new()
                .title("unicorn:")
                .minimal(false)
                .show_files(false)
                .show_count(false),
        );
        assert_eq!(config.title, "unicorn:");
        assert!(!config.minimal);
        assert!(!config.show_files);
        assert!(!config.show_count);
    }

    #[test]
    fn verbose_overrides_explicit_settings() {
        let config = DebugConfig::resolve(
            DebugOptions::new()
                .minimal(true)
                .show_files(false)
                .show_count(false)
                .verbose(true),
        );
        assert!(config.verbose);
        assert!(!config.minimal);
        assert!(config.show_files);
        assert!(config.show_count);
    }

    #[test]
    fn verbose_flag_scans_explicit_args() {
        assert!(verbose_flag(["build", "--verbose"]));
        assert!(!verbose_flag(["build", "--release"]));
        assert!(!verbose_flag(Vec::<String>::new()));
    }
}
