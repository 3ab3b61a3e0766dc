//! crates/fieldlog/src/event.rs
//! The event-description argument and its tagged render dispatch.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// The description argument of a leveled logging call.
///
/// An event description is a plain string, an error, or any displayable
/// value; the three cases are carried as explicit variants and rendered
/// through [`render`](Self::render). The entry points accept
/// `impl Into<Event<'_>>`, so string arguments convert implicitly while
/// errors and other displayables use the [`error`](Self::error) and
/// [`display`](Self::display) constructors. Anything else is rejected at
/// compile time, which is where a mistyped description belongs.
///
/// # Examples
///
/// ```
/// use fieldlog::Event;
///
/// let plain = Event::from("connection reset");
/// assert_eq!(plain.render(), "connection reset");
///
/// let io = std::io::Error::other("disk full");
/// let event = Event::error(&io);
/// assert_eq!(event.render(), "disk full");
///
/// let event = Event::display(&404);
/// assert_eq!(event.render(), "404");
/// ```
pub enum Event<'a> {
    /// A plain string description.
    Text(&'a str),
    /// An error value; rendered through its [`fmt::Display`] message.
    Error(&'a (dyn Error + 'a)),
    /// Any other displayable value.
    Display(&'a (dyn fmt::Display + 'a)),
}

impl<'a> Event<'a> {
    /// Wraps an error value.
    #[must_use]
    pub fn error(err: &'a (dyn Error + 'a)) -> Self {
        Self::Error(err)
    }

    /// Wraps an arbitrary displayable value.
    #[must_use]
    pub fn display(value: &'a (dyn fmt::Display + 'a)) -> Self {
        Self::Display(value)
    }

    /// Renders the description to the text placed in the `[event:..]`
    /// segment. Plain strings are borrowed; the other variants allocate.
    #[must_use]
    pub fn render(&self) -> Cow<'a, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Error(err) => Cow::Owned(err.to_string()),
            Self::Display(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Text(_) => "Text",
            Self::Error(_) => "Error",
            Self::Display(_) => "Display",
        };
        f.debug_tuple(variant).field(&self.render()).finish()
    }
}

impl<'a> From<&'a str> for Event<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Event<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a (dyn Error + 'a)> for Event<'a> {
    fn from(err: &'a (dyn Error + 'a)) -> Self {
        Self::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_renders_borrowed() {
        let event = Event::from("ok");
        assert!(matches!(event.render(), Cow::Borrowed("ok")));
    }

    #[test]
    fn owned_string_converts() {
        let text = String::from("saved");
        let event = Event::from(&text);
        assert_eq!(event.render(), "saved");
    }

    #[test]
    fn error_renders_its_message() {
        let err = std::io::Error::other("broken pipe");
        assert_eq!(Event::error(&err).render(), "broken pipe");
    }

    #[test]
    fn display_renders_to_string() {
        let event = Event::display(&3.5);
        assert_eq!(event.render(), "3.5");
    }

    #[test]
    fn dyn_error_converts() {
        let err = std::io::Error::other("nope");
        let event: Event<'_> = (&err as &dyn Error).into();
        assert_eq!(event.render(), "nope");
    }

    #[test]
    fn debug_names_the_variant() {
        let rendered = format!("{:?}", Event::from("x"));
        assert!(rendered.starts_with("Text"));
        let err = std::io::Error::other("y");
        let rendered = format!("{:?}", Event::error(&err));
        assert!(rendered.starts_with("Error"));
    }
}
