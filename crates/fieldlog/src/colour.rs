//! crates/fieldlog/src/colour.rs
//! ANSI colour decoration for level tags and event text.

use console::Style;

/// Wraps `text` in red enable/reset escapes; used for error tags and
/// error event text when colouring is enabled.
pub(crate) fn red(text: &str) -> String {
    paint(Style::new().red(), text)
}

/// Wraps `text` in white enable/reset escapes; the fixed default tag
/// colour of colour-enabled loggers.
pub(crate) fn white(text: &str) -> String {
    paint(Style::new().white(), text)
}

fn paint(style: Style, text: &str) -> String {
    // Styling is forced so decoration stays a pure string transformation;
    // whether to colour at all is decided by the toggles upstream.
    style.force_styling(true).apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_wraps_in_escape_pair() {
        let painted = red("ERROR");
        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.contains("ERROR"));
        assert!(painted.ends_with('m'));
    }

    #[test]
    fn white_differs_from_red() {
        assert_ne!(red("TAG"), white("TAG"));
    }

    #[test]
    fn colour_applies_off_terminal() {
        // Force-styled output must not depend on tty detection.
        assert_ne!(red("x"), "x");
    }
}
