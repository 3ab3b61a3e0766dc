//! crates/fieldlog/src/identity.rs
//! The optional request-identity capability callers may attach to events.

use std::net::IpAddr;

use url::Url;
use uuid::Uuid;

/// Request-scoped metadata a caller's context object may supply.
///
/// Every leveled entry point accepts an `Option<&dyn Identity>`. When one is
/// supplied the formatter prepends `[host:..][path:..][ip:..]` segments to
/// the event line, taking host and path from the [`locator`](Self::locator)
/// and the client address from [`remote_addr`](Self::remote_addr). All
/// three segments are written unconditionally, even when individually
/// empty; passing `None` omits them entirely.
///
/// The [`session_id`](Self::session_id) accessor completes the capability
/// for callers that correlate log output with session state; it is not part
/// of the standard line layout.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use fieldlog::Identity;
/// use url::Url;
/// use uuid::Uuid;
///
/// struct Request {
///     url: Url,
///     peer: IpAddr,
///     session: Uuid,
/// }
///
/// impl Identity for Request {
///     fn locator(&self) -> &Url {
///         &self.url
///     }
///     fn remote_addr(&self) -> IpAddr {
///         self.peer
///     }
///     fn session_id(&self) -> Uuid {
///         self.session
///     }
/// }
///
/// let request = Request {
///     url: Url::parse("https://example.com/a").unwrap(),
///     peer: IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)),
///     session: Uuid::new_v4(),
/// };
/// assert_eq!(request.locator().host_str(), Some("example.com"));
/// ```
pub trait Identity {
    /// The URL-like locator of the request; its host and path substrings
    /// become the `[host:..]` and `[path:..]` segments.
    fn locator(&self) -> &Url;

    /// The client's network address, rendered into the `[ip:..]` segment.
    fn remote_addr(&self) -> IpAddr;

    /// The unique identifier of the session the request belongs to.
    fn session_id(&self) -> Uuid;
}
