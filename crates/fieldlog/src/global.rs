//! crates/fieldlog/src/global.rs
//! Process-wide entry points writing to the shared stderr sink.

use std::fmt::{self, Display};
use std::io;
use std::panic::Location;
use std::process;
use std::sync::OnceLock;

use fieldlog_sink::{SinkFlags, TextSink};

use crate::colour;
use crate::config;
use crate::event::Event;
use crate::identity::Identity;
use crate::level::Level;
use crate::record;

fn sink() -> &'static TextSink<io::Stderr> {
    static SINK: OnceLock<TextSink<io::Stderr>> = OnceLock::new();
    SINK.get_or_init(|| TextSink::with_options(io::stderr(), "", SinkFlags::STD))
}

/// Returns true when `level` is at or above the global threshold.
#[must_use]
pub fn is(level: Level) -> bool {
    config::global().enabled(level)
}

/// Installs a new global threshold and returns the previous one, allowing
/// temporary override/restore patterns.
pub fn set_level(level: Level) -> Level {
    config::global().set_level(level)
}

/// Returns the current global threshold.
#[must_use]
pub fn get_level() -> Level {
    config::global().get_level()
}

/// Enables or disables red colourisation of [`err`]/[`err_at`] output.
pub fn set_colour_errors(enabled: bool) {
    config::global().set_colour_errors(enabled);
}

/// Replaces the header flags of the process-wide sink.
pub fn set_flags(flags: SinkFlags) {
    sink().set_flags(flags);
}

/// Replaces the line prefix of the process-wide sink.
pub fn set_prefix(prefix: impl Into<String>) {
    sink().set_prefix(prefix);
}

fn dispatch(
    caller: &'static Location<'static>,
    level: Level,
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: &Event<'_>,
    extras: &[&dyn Display],
) {
    if !is(level) {
        return;
    }
    let text = event.render();
    record::write_record(sink(), caller, level.tag(), id, action, fname, &text, extras);
}

fn dispatch_err(
    caller: &'static Location<'static>,
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: &Event<'_>,
    extras: &[&dyn Display],
) {
    if !is(Level::Error) {
        return;
    }
    let text = event.render();
    if config::global().colour_errors() {
        let tag = colour::red(Level::Error.tag());
        let text = colour::red(&text);
        record::write_record(sink(), caller, &tag, id, action, fname, &text, extras);
    } else {
        record::write_record(
            sink(),
            caller,
            Level::Error.tag(),
            id,
            action,
            fname,
            &text,
            extras,
        );
    }
}

/// Logs an event at [`Level::Trace`] through the process-wide sink.
#[track_caller]
pub fn trace<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(
        Location::caller(),
        Level::Trace,
        id,
        action,
        fname,
        &event.into(),
        extras,
    );
}

/// Logs an event at [`Level::Debug`] through the process-wide sink.
#[track_caller]
pub fn debug<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(
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
    caller: &'static Location<'static>,
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(caller, Level::Debug, id, action, fname, &event.into(), extras);
}

/// Logs an event at [`Level::User`] through the process-wide sink.
#[track_caller]
pub fn user<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(
        Location::caller(),
        Level::User,
        id,
        action,
        fname,
        &event.into(),
        extras,
    );
}

/// Logs an event at [`Level::Info`] through the process-wide sink.
#[track_caller]
pub fn info<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(
        Location::caller(),
        Level::Info,
        id,
        action,
        fname,
        &event.into(),
        extras,
    );
}

/// Logs an event at [`Level::Error`] through the process-wide sink. The
/// tag and event text are painted red when the colour-errors toggle is on.
#[track_caller]
pub fn err<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch_err(Location::caller(), id, action, fname, &event.into(), extras);
}

/// Logs an event at [`Level::Error`] on behalf of `caller`; used by
/// wrappers that capture their own call site with `#[track_caller]`.
pub fn err_at<'a>(
    caller: &'static Location<'static>,
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch_err(caller, id, action, fname, &event.into(), extras);
}

/// Logs an event at [`Level::System`] through the process-wide sink.
#[track_caller]
pub fn sys<'a>(
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: impl Into<Event<'a>>,
    extras: &[&dyn Display],
) {
    dispatch(
        Location::caller(),
        Level::System,
        id,
        action,
        fname,
        &event.into(),
        extras,
    );
}

/// Writes a line directly to the process-wide sink, bypassing gating.
#[track_caller]
pub fn print(message: impl Display) {
    let _ = sink().output(Location::caller(), &message.to_string());
}

/// Writes a line directly to the process-wide sink, bypassing gating.
/// Lines are always newline terminated, so this is [`print`] under another
/// name kept for call-site symmetry.
#[track_caller]
pub fn println(message: impl Display) {
    let _ = sink().output(Location::caller(), &message.to_string());
}

/// Writes formatted text directly to the process-wide sink, bypassing
/// gating. Usually invoked through the [`printf!`](macro@crate::printf) macro.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    let _ = sink().output(Location::caller(), &args.to_string());
}

/// Writes the message to the process-wide sink and terminates the process
/// with exit status 1.
#[track_caller]
pub fn fatal(message: impl Display) -> ! {
    let _ = sink().output(Location::caller(), &message.to_string());
    let _ = sink().flush();
    process::exit(1);
}

/// Writes formatted text to the process-wide sink and terminates the
/// process with exit status 1. Usually invoked through the
/// [`fatalf!`](macro@crate::fatalf) macro.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    let _ = sink().output(Location::caller(), &args.to_string());
    let _ = sink().flush();
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    // The process-wide threshold is shared across the test binary; tests
    // serialise on the config guard and restore the previous value.

    #[test]
    fn is_respects_the_global_threshold() {
        let _guard = config::test_guard();
        let previous = set_level(Level::Error);
        assert!(is(Level::Error));
        assert!(is(Level::System));
        assert!(!is(Level::Info));
        set_level(previous);
    }

    #[test]
    fn set_level_round_trips_previous_value() {
        let _guard = config::test_guard();
        let first = set_level(Level::Trace);
        let second = set_level(first);
        assert_eq!(second, Level::Trace);
        assert_eq!(get_level(), first);
    }

    #[test]
    fn suppressed_calls_do_not_touch_the_sink() {
        let _guard = config::test_guard();
        let previous = set_level(Level::None);
        // Writes to stderr would be visible in test output; with the
        // threshold at None nothing may be emitted at all.
        trace(None, "a", "f", "x", &[]);
        sys(None, "a", "f", "x", &[]);
        set_level(previous);
    }
}
