#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fieldlog-sink` provides the line-oriented output layer underneath the
//! `fieldlog` facade. The central type is [`TextSink`], a writer-generic
//! sink that renders an optional metadata header - prefix, date, time, and
//! caller file/line - in front of every line it emits. Which header fields
//! appear is selected with [`SinkFlags`].
//!
//! # Design
//!
//! The sink keeps its writer behind a mutex so that concurrently logging
//! threads never interleave partial lines; everything else is plain
//! synchronous formatting on the caller's thread. Caller locations are
//! passed in explicitly as [`std::panic::Location`] values, captured by the
//! facade with `#[track_caller]`, so the `file:line` header names the true
//! call site rather than the logging layer.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use std::panic::Location;
//! use fieldlog_sink::{SinkFlags, TextSink};
//!
//! let sink = TextSink::with_options(Vec::new(), "demo ", SinkFlags::NONE);
//! sink.output(Location::caller(), "starting up")?;
//! sink.output(Location::caller(), "ready")?;
//!
//! let text = String::from_utf8(sink.into_writer()).unwrap();
//! assert!(text.lines().all(|line| line.starts_with("demo ")));
//! # Ok::<(), std::io::Error>(())
//! ```

mod flags;
mod sink;

pub use flags::SinkFlags;
pub use sink::{LineOutput, TextSink};
