//! crates/fieldlog-sink/src/sink.rs
//! The [`TextSink`] writer wrapper and the [`LineOutput`] trait it implements.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::flags::SinkFlags;

/// A line-oriented output target that prefixes caller-location metadata.
///
/// Implementors receive one complete line per call together with the source
/// location of the true call site, allowing the sink to render a `file:line`
/// header that points at the caller rather than at the logging layer that
/// assembled the text. Implementations must be safe for concurrent
/// invocation; ordering between lines emitted by different threads is
/// whatever the implementation's own serialisation provides.
pub trait LineOutput: Send + Sync {
    /// Writes one line, prefixed according to the sink's configuration.
    fn output(&self, caller: &'static Location<'static>, line: &str) -> io::Result<()>;
}

#[derive(Debug)]
struct Inner<W> {
    writer: W,
    prefix: String,
    flags: SinkFlags,
}

/// Streaming text sink that renders a metadata header in front of each line.
///
/// The sink owns an [`io::Write`] implementor behind a [`Mutex`] so that
/// concurrent callers never interleave partial lines. Each call to
/// [`output`](Self::output) writes `prefix date time file:line: text`
/// followed by a newline; which header fields appear is controlled by the
/// configured [`SinkFlags`].
///
/// # Examples
///
/// Collect a headerless line into a byte buffer:
///
/// ```
/// use std::panic::Location;
/// use fieldlog_sink::{SinkFlags, TextSink};
///
/// let sink = TextSink::with_options(Vec::<u8>::new(), "", SinkFlags::NONE);
/// sink.output(Location::caller(), "ready")?;
/// assert_eq!(sink.into_writer(), b"ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Prefix every line and include the caller's file name:
///
/// ```
/// use std::panic::Location;
/// use fieldlog_sink::{SinkFlags, TextSink};
///
/// let sink = TextSink::with_options(Vec::<u8>::new(), "web ", SinkFlags::SHORT_FILE);
/// sink.output(Location::caller(), "listening")?;
/// let text = String::from_utf8(sink.into_writer()).unwrap();
/// assert!(text.starts_with("web "));
/// assert!(text.contains(".rs:"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TextSink<W> {
    inner: Mutex<Inner<W>>,
}

impl<W> TextSink<W> {
    /// Creates a sink with an empty prefix and the standard date/time header.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, "", SinkFlags::STD)
    }

    /// Creates a sink with an explicit prefix and header flag set.
    #[must_use]
    pub fn with_options(writer: W, prefix: impl Into<String>, flags: SinkFlags) -> Self {
        Self {
            inner: Mutex::new(Inner {
                writer,
                prefix: prefix.into(),
                flags,
            }),
        }
    }

    /// Returns the current header flags.
    #[must_use]
    pub fn flags(&self) -> SinkFlags {
        self.lock().flags
    }

    /// Replaces the header flags used for subsequent lines.
    pub fn set_flags(&self, flags: SinkFlags) {
        self.lock().flags = flags;
    }

    /// Returns a copy of the current line prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Replaces the line prefix used for subsequent lines.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<W>> {
        // A panic while holding the lock leaves the writer usable; recover
        // the guard rather than propagating the poison.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> TextSink<W> {
    /// Writes one header-prefixed line to the underlying writer.
    ///
    /// A trailing newline is appended when `line` does not already end with
    /// one. The header is rendered and the write issued under a single lock
    /// acquisition so concurrent callers never interleave output.
    pub fn output(&self, caller: &'static Location<'static>, line: &str) -> io::Result<()> {
        let mut inner = self.lock();
        let mut rendered = String::with_capacity(inner.prefix.len() + line.len() + 48);
        render_header(&mut rendered, &inner.prefix, inner.flags, caller);
        rendered.push_str(line);
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        inner.writer.write_all(rendered.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl<W: Write + Send> LineOutput for TextSink<W> {
    fn output(&self, caller: &'static Location<'static>, line: &str) -> io::Result<()> {
        Self::output(self, caller, line)
    }
}

fn render_header(buf: &mut String, prefix: &str, flags: SinkFlags, caller: &Location<'_>) {
    buf.push_str(prefix);

    let wants_clock = flags.contains(SinkFlags::DATE)
        || flags.contains(SinkFlags::TIME)
        || flags.contains(SinkFlags::MICROSECONDS);
    if wants_clock {
        let now: DateTime<FixedOffset> = if flags.contains(SinkFlags::UTC) {
            Utc::now().fixed_offset()
        } else {
            Local::now().fixed_offset()
        };
        if flags.contains(SinkFlags::DATE) {
            let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
        }
        if flags.contains(SinkFlags::TIME) || flags.contains(SinkFlags::MICROSECONDS) {
            let _ = write!(buf, "{}", now.format("%H:%M:%S"));
            if flags.contains(SinkFlags::MICROSECONDS) {
                let _ = write!(buf, "{}", now.format("%.6f"));
            }
            buf.push(' ');
        }
    }

    if flags.contains(SinkFlags::SHORT_FILE) || flags.contains(SinkFlags::LONG_FILE) {
        let file = caller.file();
        let file = if flags.contains(SinkFlags::SHORT_FILE) {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        } else {
            file
        };
        let _ = write!(buf, "{file}:{line}: ", line = caller.line());
    }
}
