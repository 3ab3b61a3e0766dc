//! crates/fieldlog/src/record.rs
//! Assembly of the bracketed field line and dispatch to the sink.

use std::fmt::{Display, Write as _};
use std::panic::Location;

use fieldlog_sink::LineOutput;

use crate::identity::Identity;

/// Formats one event record and forwards it to `sink`.
///
/// `tag` and `event` arrive fully rendered (and already colourised when the
/// caller decided to decorate them). `extras` is a flat key,value,key,value
/// sequence of any length; an odd count first emits a malformed-call
/// diagnostic and then the event line without any key/value segments, so a
/// mispaired call still surfaces its event. The sink's result is discarded:
/// leveled calls are fire and forget.
pub(crate) fn write_record(
    sink: &dyn LineOutput,
    caller: &'static Location<'static>,
    tag: &str,
    id: Option<&dyn Identity>,
    action: &str,
    fname: &str,
    event: &str,
    extras: &[&dyn Display],
) {
    let paired = extras.len() % 2 == 0;
    if !paired {
        let _ = sink.output(caller, &malformed_line(tag, extras));
    }

    let mut line = String::with_capacity(64 + event.len());
    let _ = write!(line, "{tag}:");
    if let Some(id) = id {
        let locator = id.locator();
        let _ = write!(
            line,
            "[host:{host}][path:{path}][ip:{ip}]",
            host = locator.host_str().unwrap_or(""),
            path = locator.path(),
            ip = id.remote_addr(),
        );
    }
    let _ = write!(line, "[action:{action}][fname:{fname}][event:{event}]");
    if paired {
        for pair in extras.chunks_exact(2) {
            let _ = write!(line, "[{key}:{value}]", key = pair[0], value = pair[1]);
        }
    }

    let _ = sink.output(caller, &line);
}

fn malformed_line(tag: &str, extras: &[&dyn Display]) -> String {
    let mut line = format!("{tag}: need pairs of arguments [");
    for (i, value) in extras.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "\"{value}\"");
    }
    line.push(']');
    line
}
