//! crates/fieldlog/src/level.rs
//! Severity levels and the atomically updated threshold that gates them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Severity of a logged event, and of the thresholds that gate emission.
///
/// Levels are backed by a `u64` with each variant at its own ascending bit
/// position. The values are compared purely as ranks; they are never
/// combined as masks. [`Level::None`] sits above every real level and
/// silences all output when installed as a threshold.
///
/// # Examples
///
/// ```
/// use fieldlog::Level;
///
/// assert!(Level::Trace < Level::Debug);
/// assert!(Level::System < Level::None);
/// assert_eq!(Level::Error.to_string(), "ERROR");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u64)]
pub enum Level {
    /// The most verbose setting: fine detail of variable values and every
    /// step of the program's control flow.
    Trace = 1 << 0,
    /// Information that is helpful for most debugging cases.
    Debug = 1 << 1,
    /// Messages that are also shown to the user; the default threshold.
    User = 1 << 2,
    /// The program's routine output.
    Info = 1 << 3,
    /// Errors that should normally always reach the log; the recommended
    /// minimum threshold.
    Error = 1 << 4,
    /// A system level error: something really bad has happened.
    System = 1 << 5,
    /// Sentinel above all real levels; silences all output. Events are
    /// never logged at this level.
    None = 1 << 6,
}

impl Level {
    /// Returns the upper-case tag used in formatted output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::User => "USER",
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::System => "SYSTEM",
            Self::None => "NONE",
        }
    }

    // Only values produced by `Level as u64` are ever stored in a filter,
    // so the fallback arm is unreachable in practice.
    fn from_bits(bits: u64) -> Self {
        match bits {
            1 => Self::Trace,
            2 => Self::Debug,
            4 => Self::User,
            8 => Self::Info,
            16 => Self::Error,
            32 => Self::System,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An atomically updated [`Level`] threshold.
///
/// A filter passes every event whose level is at or above the stored
/// threshold. Reads and writes use single-word atomics only, so concurrent
/// [`set`](Self::set) and [`enabled`](Self::enabled) calls never observe a
/// torn value; no ordering with other memory is required.
///
/// # Examples
///
/// ```
/// use fieldlog::{Level, LevelFilter};
///
/// let filter = LevelFilter::new(Level::Info);
/// assert!(filter.enabled(Level::Error));
/// assert!(!filter.enabled(Level::Debug));
///
/// let previous = filter.set(Level::None);
/// assert_eq!(previous, Level::Info);
/// assert!(!filter.enabled(Level::System));
/// ```
#[derive(Debug)]
pub struct LevelFilter(AtomicU64);

impl LevelFilter {
    /// Creates a filter with the given initial threshold.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(AtomicU64::new(level as u64))
    }

    /// Returns true when `level` is at or above the current threshold.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level as u64 >= self.0.load(Ordering::Relaxed)
    }

    /// Installs a new threshold and returns the previous one, allowing
    /// temporary override/restore patterns.
    pub fn set(&self, level: Level) -> Level {
        Level::from_bits(self.0.swap(level as u64, Ordering::Relaxed))
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn get(&self) -> Level {
        Level::from_bits(self.0.load(Ordering::Relaxed))
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Level::User)
    }
}
