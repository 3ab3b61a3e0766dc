//! crates/fieldlog-sink/src/flags.rs
//! Header metadata flags controlling [`TextSink`](crate::TextSink) line prefixes.

use std::ops::BitOr;

/// Selects which metadata fields a [`TextSink`](crate::TextSink) writes in
/// front of every line.
///
/// Flags combine with `|`. The header fields always appear in a fixed order
/// regardless of the order the flags were combined in: prefix, date, time,
/// caller file and line.
///
/// # Examples
///
/// ```
/// use fieldlog_sink::SinkFlags;
///
/// let flags = SinkFlags::DATE | SinkFlags::TIME | SinkFlags::SHORT_FILE;
/// assert!(flags.contains(SinkFlags::DATE));
/// assert!(flags.contains(SinkFlags::STD));
/// assert!(!flags.contains(SinkFlags::LONG_FILE));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinkFlags(u32);

impl SinkFlags {
    /// No header metadata; lines carry the prefix only.
    pub const NONE: Self = Self(0);
    /// Date in the local (or UTC) time zone: `2026/08/23`.
    pub const DATE: Self = Self(1 << 0);
    /// Time of day: `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Self::TIME`].
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full caller file path and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final file name element and line number: `d.rs:23`.
    /// Overrides [`Self::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Use UTC rather than the local time zone for date and time fields.
    pub const UTC: Self = Self(1 << 5);
    /// The standard header: [`Self::DATE`] and [`Self::TIME`].
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    /// Returns true when every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reconstructs a flag set from raw bits. Unknown bits are retained but
    /// have no effect on header rendering.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }
}

impl BitOr for SinkFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl Default for SinkFlags {
    fn default() -> Self {
        Self::STD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_combines_date_and_time() {
        assert!(SinkFlags::STD.contains(SinkFlags::DATE));
        assert!(SinkFlags::STD.contains(SinkFlags::TIME));
        assert!(!SinkFlags::STD.contains(SinkFlags::SHORT_FILE));
    }

    #[test]
    fn none_contains_only_itself() {
        assert!(SinkFlags::NONE.contains(SinkFlags::NONE));
        assert!(!SinkFlags::NONE.contains(SinkFlags::DATE));
    }

    #[test]
    fn bitor_unions_flags() {
        let flags = SinkFlags::DATE | SinkFlags::SHORT_FILE;
        assert!(flags.contains(SinkFlags::DATE));
        assert!(flags.contains(SinkFlags::SHORT_FILE));
        assert!(!flags.contains(SinkFlags::TIME));
    }

    #[test]
    fn bits_round_trip() {
        let flags = SinkFlags::TIME | SinkFlags::UTC;
        assert_eq!(SinkFlags::from_bits(flags.bits()), flags);
    }

    #[test]
    fn default_is_std() {
        assert_eq!(SinkFlags::default(), SinkFlags::STD);
    }
}
