//! crates/fieldlog/src/logger.rs
//! The instance-scoped [`Logger`] and its builder.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;
use std::process;

use fieldlog_sink::{SinkFlags, TextSink};
use is_terminal::IsTerminal;

use crate::colour;
use crate::event::Event;
use crate::identity::Identity;
use crate::level::{Level, LevelFilter};
use crate::record;

/// A logger with its own sink, threshold, and colour setting.
///
/// Each logger pairs a [`TextSink`] with an independent [`LevelFilter`];
/// changing one logger's threshold never affects another logger or the
/// process-wide entry points. All methods take `&self`, so a logger can be
/// shared across threads behind an `Arc` without additional locking.
///
/// When colour is enabled the level tag of every emitted line is painted in
/// the default tag colour (white), while error lines paint both the tag and
/// the event text red.
///
/// # Examples
///
/// Gate output with the logger's own threshold:
///
/// ```
/// use fieldlog::{Level, Logger, SinkFlags};
///
/// let logger = Logger::builder(Vec::new())
///     .flags(SinkFlags::NONE)
///     .level(Level::Info)
///     .build();
///
/// logger.debug(None, "poll", "worker", "suppressed", &[]);
/// logger.info(None, "poll", "worker", "emitted", &[]);
///
/// let text = String::from_utf8(logger.into_writer()).unwrap();
/// assert_eq!(text, "INFO:[action:poll][fname:worker][event:emitted]\n");
/// ```
#[derive(Debug)]
pub struct Logger<W> {
    sink: TextSink<W>,
    level: LevelFilter,
    colour: bool,
}

/// Configures and constructs a [`Logger`].
///
/// Obtained from [`Logger::builder`]. Unset options fall back to an empty
/// prefix, [`SinkFlags::STD`], [`Level::User`], and colour off.
#[derive(Debug)]
pub struct LoggerBuilder<W> {
    writer: W,
    prefix: String,
    flags: SinkFlags,
    level: Level,
    colour: bool,
}

impl<W> LoggerBuilder<W> {
    /// Sets the line prefix written in front of every header.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Selects which metadata fields the sink prefixes.
    #[must_use]
    pub const fn flags(mut self, flags: SinkFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the initial threshold.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables colourised output.
    #[must_use]
    pub const fn colour(mut self, enabled: bool) -> Self {
        self.colour = enabled;
        self
    }

    /// Constructs the logger.
    #[must_use]
    pub fn build(self) -> Logger<W> {
        Logger {
            sink: TextSink::with_options(self.writer, self.prefix, self.flags),
            level: LevelFilter::new(self.level),
            colour: self.colour,
        }
    }
}

impl Logger<io::Stderr> {
    /// Creates a logger on standard error with the standard date/time
    /// header; colour is enabled when stderr is a terminal.
    #[must_use]
    pub fn stderr() -> Self {
        Self::builder(io::stderr())
            .colour(io::stderr().is_terminal())
            .build()
    }
}

impl<W> Logger<W> {
    /// Starts building a logger around `writer`.
    #[must_use]
    pub fn builder(writer: W) -> LoggerBuilder<W> {
        LoggerBuilder {
            writer,
            prefix: String::new(),
            flags: SinkFlags::STD,
            level: Level::User,
            colour: false,
        }
    }

    /// Creates a logger with an explicit prefix and header flags, a
    /// [`Level::User`] threshold, and colour off.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, flags: SinkFlags) -> Self {
        Self::builder(writer).prefix(prefix).flags(flags).build()
    }

    /// Returns true when `level` is at or above this logger's threshold.
    #[must_use]
    pub fn level(&self, level: Level) -> bool {
        self.level.enabled(level)
    }

    /// Installs a new threshold and returns the previous one.
    pub fn set_level(&self, level: Level) -> Level {
        self.level.set(level)
    }

    /// Returns this logger's current threshold.
    #[must_use]
    pub fn get_level(&self) -> Level {
        self.level.get()
    }

    /// Replaces the sink's header flags.
    pub fn set_flags(&self, flags: SinkFlags) {
        self.sink.set_flags(flags);
    }

    /// Replaces the sink's line prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.sink.set_prefix(prefix);
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.sink.into_writer()
    }

    fn decorate<'a>(&self, level: Level, text: Cow<'a, str>) -> (Cow<'static, str>, Cow<'a, str>) {
        if !self.colour {
            return (Cow::Borrowed(level.tag()), text);
        }
        if level == Level::Error {
            let painted = colour::red(&text);
            (Cow::Owned(colour::red(level.tag())), Cow::Owned(painted))
        } else {
            (Cow::Owned(colour::white(level.tag())), text)
        }
    }
}

impl<W: Write + Send> Logger<W> {
    fn dispatch(
        &self,
        caller: &'static Location<'static>,
        level: Level,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: &Event<'_>,
        extras: &[&dyn Display],
    ) {
        if !self.level.enabled(level) {
            return;
        }
        let (tag, text) = self.decorate(level, event.render());
        record::write_record(&self.sink, caller, &tag, id, action, fname, &text, extras);
    }

    /// Logs an event at [`Level::Trace`].
    #[track_caller]
    pub fn trace<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::Trace,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Logs an event at [`Level::Debug`].
    #[track_caller]
    pub fn debug<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::Debug,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Logs an event at [`Level::Debug`] on behalf of `caller`; used by
    /// wrappers that capture their own call site with `#[track_caller]`.
    pub fn debug_at<'a>(
        &self,
        caller: &'static Location<'static>,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(caller, Level::Debug, id, action, fname, &event.into(), extras);
    }

    /// Logs an event at [`Level::User`].
    #[track_caller]
    pub fn user<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::User,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Logs an event at [`Level::Info`].
    #[track_caller]
    pub fn info<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::Info,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Logs an event at [`Level::Error`].
    #[track_caller]
    pub fn err<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::Error,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Logs an event at [`Level::Error`] on behalf of `caller`; used by
    /// wrappers that capture their own call site with `#[track_caller]`.
    pub fn err_at<'a>(
        &self,
        caller: &'static Location<'static>,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(caller, Level::Error, id, action, fname, &event.into(), extras);
    }

    /// Logs an event at [`Level::System`].
    #[track_caller]
    pub fn sys<'a>(
        &self,
        id: Option<&dyn Identity>,
        action: &str,
        fname: &str,
        event: impl Into<Event<'a>>,
        extras: &[&dyn Display],
    ) {
        self.dispatch(
            Location::caller(),
            Level::System,
            id,
            action,
            fname,
            &event.into(),
            extras,
        );
    }

    /// Writes a line directly to the sink, bypassing level gating.
    #[track_caller]
    pub fn print(&self, message: impl Display) {
        let _ = self.sink.output(Location::caller(), &message.to_string());
    }

    /// Writes a line directly to the sink, bypassing level gating. Lines
    /// are always newline terminated, so this is [`print`](Self::print)
    /// under another name kept for call-site symmetry.
    #[track_caller]
    pub fn println(&self, message: impl Display) {
        let _ = self.sink.output(Location::caller(), &message.to_string());
    }

    /// Writes formatted text directly to the sink, bypassing level gating.
    /// Call as `logger.printf(format_args!(..))`.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let _ = self.sink.output(Location::caller(), &args.to_string());
    }

    /// Writes the message and terminates the process with exit status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        let _ = self.sink.output(Location::caller(), &message.to_string());
        let _ = self.sink.flush();
        process::exit(1);
    }

    /// Writes formatted text and terminates the process with exit status 1.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.sink.output(Location::caller(), &args.to_string());
        let _ = self.sink.flush();
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain_logger(buf: &SharedBuf) -> Logger<SharedBuf> {
        Logger::builder(buf.clone()).flags(SinkFlags::NONE).build()
    }

    #[test]
    fn default_threshold_suppresses_debug() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.debug(None, "a", "f", "hidden", &[]);
        logger.user(None, "a", "f", "shown", &[]);
        assert_eq!(buf.contents(), "USER:[action:a][fname:f][event:shown]\n");
    }

    #[test]
    fn set_level_returns_previous_and_regates() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        assert_eq!(logger.set_level(Level::Trace), Level::User);
        logger.trace(None, "a", "f", "now visible", &[]);
        assert!(buf.contents().starts_with("TRACE:"));
    }

    #[test]
    fn get_level_reads_this_logger() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.set_level(Level::System);
        assert_eq!(logger.get_level(), Level::System);
    }

    #[test]
    fn thresholds_are_independent_between_loggers() {
        let a = plain_logger(&SharedBuf::default());
        let b = plain_logger(&SharedBuf::default());
        a.set_level(Level::None);
        assert!(b.level(Level::User));
        assert!(!a.level(Level::System));
    }

    #[test]
    fn none_threshold_silences_every_entry_point() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.set_level(Level::None);
        logger.trace(None, "a", "f", "x", &[]);
        logger.debug(None, "a", "f", "x", &[]);
        logger.user(None, "a", "f", "x", &[]);
        logger.info(None, "a", "f", "x", &[]);
        logger.err(None, "a", "f", "x", &[]);
        logger.sys(None, "a", "f", "x", &[]);
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn colour_paints_error_tag_and_event_red() {
        let buf = SharedBuf::default();
        let logger = Logger::builder(buf.clone())
            .flags(SinkFlags::NONE)
            .colour(true)
            .build();
        logger.err(None, "a", "f", "boom", &[]);
        let text = buf.contents();
        assert!(text.contains("\u{1b}[31mERROR\u{1b}[0m"));
        assert!(text.contains("\u{1b}[31mboom\u{1b}[0m"));
    }

    #[test]
    fn colour_paints_plain_tags_white() {
        let buf = SharedBuf::default();
        let logger = Logger::builder(buf.clone())
            .flags(SinkFlags::NONE)
            .level(Level::Info)
            .colour(true)
            .build();
        logger.info(None, "a", "f", "fine", &[]);
        let text = buf.contents();
        assert!(text.contains("\u{1b}[37mINFO\u{1b}[0m"));
        assert!(text.contains("[event:fine]"));
    }

    #[test]
    fn colour_off_emits_plain_error() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.err(None, "a", "f", "boom", &[]);
        assert_eq!(buf.contents(), "ERROR:[action:a][fname:f][event:boom]\n");
    }

    #[test]
    fn print_bypasses_gating() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.set_level(Level::None);
        logger.print("raw line");
        logger.printf(format_args!("answer {}", 42));
        assert_eq!(buf.contents(), "raw line\nanswer 42\n");
    }

    #[test]
    fn err_at_reports_the_given_caller() {
        let buf = SharedBuf::default();
        let logger = Logger::builder(buf.clone())
            .flags(SinkFlags::SHORT_FILE)
            .build();

        #[track_caller]
        fn report(logger: &Logger<SharedBuf>) {
            logger.err_at(Location::caller(), None, "a", "f", "deep", &[]);
        }
        report(&logger);

        assert!(buf.contents().starts_with("logger.rs:"));
    }

    #[test]
    fn builder_prefix_reaches_the_sink() {
        let buf = SharedBuf::default();
        let logger = Logger::builder(buf.clone())
            .flags(SinkFlags::NONE)
            .prefix("api ")
            .build();
        logger.user(None, "a", "f", "x", &[]);
        assert!(buf.contents().starts_with("api USER:"));
    }

    #[test]
    fn new_matches_builder_defaults() {
        let buf = SharedBuf::default();
        let logger = Logger::new(buf.clone(), "", SinkFlags::NONE);
        assert_eq!(logger.get_level(), Level::User);
        logger.user(None, "a", "f", "x", &[]);
        assert!(!buf.contents().is_empty());
    }

    #[test]
    fn extras_pair_up_on_instance_loggers() {
        let buf = SharedBuf::default();
        let logger = plain_logger(&buf);
        logger.user(None, "a", "f", "x", &[&"attempt", &2, &"user", &"jo"]);
        assert!(buf.contents().ends_with("[attempt:2][user:jo]\n"));
    }
}
