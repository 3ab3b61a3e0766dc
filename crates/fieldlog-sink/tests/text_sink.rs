//! Integration tests for [`TextSink`] header rendering and concurrency.

use std::io::Read;
use std::panic::Location;
use std::sync::Arc;
use std::thread;

use fieldlog_sink::{LineOutput, SinkFlags, TextSink};

// ============================================================================
// File-backed sinks
// ============================================================================

#[test]
fn lines_reach_a_file_writer() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let sink = TextSink::with_options(
        file.reopen().expect("reopen"),
        "job ",
        SinkFlags::NONE,
    );

    sink.output(Location::caller(), "first").expect("write succeeds");
    sink.output(Location::caller(), "second").expect("write succeeds");
    sink.flush().expect("flush succeeds");

    let mut text = String::new();
    file.as_file()
        .read_to_string(&mut text)
        .expect("read back");
    assert_eq!(text, "job first\njob second\n");
}

// ============================================================================
// Header composition
// ============================================================================

#[test]
fn full_header_orders_prefix_date_time_file() {
    let sink = TextSink::with_options(
        Vec::new(),
        "p ",
        SinkFlags::STD | SinkFlags::SHORT_FILE,
    );
    sink.output(Location::caller(), "event").expect("write succeeds");

    let text = String::from_utf8(sink.into_writer()).expect("utf-8");
    let mut fields = text.split(' ');
    assert_eq!(fields.next(), Some("p"));
    assert!(fields.next().expect("date").contains('/'));
    assert!(fields.next().expect("time").contains(':'));
    let location = fields.next().expect("location");
    assert!(location.starts_with("text_sink.rs:"), "got {location}");
    assert_eq!(fields.next(), Some("event\n"));
}

#[test]
fn utc_flag_still_renders_both_clock_fields() {
    let sink = TextSink::with_options(Vec::new(), "", SinkFlags::STD | SinkFlags::UTC);
    sink.output(Location::caller(), "x").expect("write succeeds");

    let text = String::from_utf8(sink.into_writer()).expect("utf-8");
    assert_eq!(text.split(' ').count(), 3);
}

// ============================================================================
// Concurrent writers
// ============================================================================

#[test]
fn concurrent_lines_never_interleave() {
    let sink = Arc::new(TextSink::with_options(Vec::new(), "", SinkFlags::NONE));

    let mut handles = Vec::new();
    for worker in 0..8 {
        let sink = Arc::clone(&sink);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                sink.output(Location::caller(), &format!("worker{worker} line{i}"))
                    .expect("write succeeds");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker finishes");
    }

    let sink = Arc::into_inner(sink).expect("sole owner");
    let text = String::from_utf8(sink.into_writer()).expect("utf-8");
    assert_eq!(text.lines().count(), 8 * 50);
    assert!(text
        .lines()
        .all(|line| line.starts_with("worker") && line.contains(" line")));
}

// ============================================================================
// Trait-object dispatch
// ============================================================================

#[test]
fn text_sink_is_usable_through_line_output() {
    let sink = TextSink::with_options(Vec::new(), "", SinkFlags::NONE);
    {
        let dyn_sink: &dyn LineOutput = &sink;
        dyn_sink
            .output(Location::caller(), "via trait")
            .expect("write succeeds");
    }
    assert_eq!(sink.into_writer(), b"via trait\n".to_vec());
}
