//! crates/fieldlog/src/config.rs
//! The process-wide logging configuration and its access point.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::level::{Level, LevelFilter};

/// Process-wide logging configuration.
///
/// One instance exists for the lifetime of the process, reachable through
/// [`global`]. It bundles the global [`LevelFilter`] with the colour-errors
/// toggle so all shared mutable state lives in a single documented place;
/// every field is updated with single-word atomics, making the config safe
/// to read and write from any thread without locking.
///
/// # Examples
///
/// ```
/// use fieldlog::{config, Level};
///
/// let previous = config::global().set_level(Level::None);
/// assert!(!config::global().enabled(Level::System));
/// config::global().set_level(previous);
/// ```
#[derive(Debug)]
pub struct Config {
    level: LevelFilter,
    colour_errors: AtomicBool,
}

impl Config {
    const fn new() -> Self {
        Self {
            level: LevelFilter::new(Level::User),
            colour_errors: AtomicBool::new(false),
        }
    }

    /// Returns true when `level` is at or above the global threshold.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.level.enabled(level)
    }

    /// Installs a new global threshold and returns the previous one.
    pub fn set_level(&self, level: Level) -> Level {
        self.level.set(level)
    }

    /// Returns the current global threshold.
    #[must_use]
    pub fn get_level(&self) -> Level {
        self.level.get()
    }

    /// Returns whether error output is colourised.
    #[must_use]
    pub fn colour_errors(&self) -> bool {
        self.colour_errors.load(Ordering::Relaxed)
    }

    /// Enables or disables red colourisation of error output.
    pub fn set_colour_errors(&self, enabled: bool) {
        self.colour_errors.store(enabled, Ordering::Relaxed);
    }
}

static GLOBAL: Config = Config::new();

/// Returns the process-wide [`Config`].
#[must_use]
pub fn global() -> &'static Config {
    &GLOBAL
}

/// Serialises unit tests that mutate the process-wide config; they run on
/// separate threads within one test binary.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
