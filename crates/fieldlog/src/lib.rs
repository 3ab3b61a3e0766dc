#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fieldlog` is a leveled, identity-aware logging facade that renders
//! events as a single line of bracketed `[key:value]` fields:
//!
//! ```text
//! LEVEL:[host:H][path:P][ip:IP][action:A][fname:F][event:E][k1:v1]...
//! ```
//!
//! Callers pick one of six severities - [`trace`], [`debug`], [`user`],
//! [`info`], [`err`], [`sys`] - and supply an action label, the name of the
//! originating function, an event description, and any number of extra
//! key/value pairs. When the optional identity argument carries a value
//! satisfying the [`Identity`] capability, the request's host, path, and
//! client address are prepended to the line.
//!
//! # Design
//!
//! Emission is gated before any formatting work: each entry point checks
//! its threshold first and returns immediately when the event's level is
//! below it. Thresholds exist at two scopes - a process-wide one reachable
//! through [`config::global`] and the free functions [`is`], [`set_level`],
//! [`get_level`], and one per [`Logger`] instance - and both are updated
//! with single-word atomics only. Formatted lines are handed to a
//! [`TextSink`] together with the caller's source location, captured via
//! `#[track_caller]`, so the sink's `file:line` header names the true call
//! site.
//!
//! Error-level output can be colourised red; the process-wide toggle is
//! [`set_colour_errors`] while instance loggers opt in at construction.
//!
//! # Errors
//!
//! Leveled calls are fire and forget: sink write failures are discarded.
//! The raw [`fatal`]/[`fatalf`](fn@fatalf) passthroughs write their message
//! and then terminate the process with exit status 1.
//!
//! # Examples
//!
//! Log through an instance logger into a buffer:
//!
//! ```
//! use fieldlog::{Level, Logger, SinkFlags};
//!
//! let logger = Logger::builder(Vec::new())
//!     .flags(SinkFlags::NONE)
//!     .level(Level::Trace)
//!     .build();
//!
//! logger.info(None, "startup", "main", "listening", &[&"port", &8080]);
//!
//! let text = String::from_utf8(logger.into_writer()).unwrap();
//! assert_eq!(
//!     text,
//!     "INFO:[action:startup][fname:main][event:listening][port:8080]\n"
//! );
//! ```
//!
//! Attach request identity:
//!
//! ```
//! use std::net::{IpAddr, Ipv4Addr};
//! use fieldlog::{Identity, Level, Logger, SinkFlags};
//! use url::Url;
//! use uuid::Uuid;
//!
//! struct Request(Url, Uuid);
//!
//! impl Identity for Request {
//!     fn locator(&self) -> &Url {
//!         &self.0
//!     }
//!     fn remote_addr(&self) -> IpAddr {
//!         IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4))
//!     }
//!     fn session_id(&self) -> Uuid {
//!         self.1
//!     }
//! }
//!
//! let logger = Logger::builder(Vec::new()).flags(SinkFlags::NONE).build();
//! let request = Request(Url::parse("https://example.com/a").unwrap(), Uuid::new_v4());
//! logger.user(Some(&request), "login", "handler", "ok", &[]);
//!
//! let text = String::from_utf8(logger.into_writer()).unwrap();
//! assert_eq!(
//!     text,
//!     "USER:[host:example.com][path:/a][ip:1.2.3.4][action:login][fname:handler][event:ok]\n"
//! );
//! ```

pub mod config;
mod colour;
mod event;
mod global;
mod identity;
mod level;
mod logger;
mod record;

pub use event::Event;
pub use fieldlog_sink::{LineOutput, SinkFlags, TextSink};
pub use global::{
    debug, debug_at, err, err_at, fatal, fatalf, get_level, info, is, print, printf, println,
    set_colour_errors, set_flags, set_level, set_prefix, sys, trace, user,
};
pub use identity::Identity;
pub use level::{Level, LevelFilter};
pub use logger::{Logger, LoggerBuilder};

/// Writes formatted text directly to the process-wide sink, bypassing
/// level gating.
///
/// # Examples
///
/// ```no_run
/// fieldlog::printf!("listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! printf {
    ($($arg:tt)*) => {
        $crate::printf(::core::format_args!($($arg)*))
    };
}

/// Writes formatted text to the process-wide sink and terminates the
/// process with exit status 1.
///
/// # Examples
///
/// ```no_run
/// fieldlog::fatalf!("cannot bind port {}: giving up", 8080);
/// ```
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::fatalf(::core::format_args!($($arg)*))
    };
}
