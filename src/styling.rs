//! Styling for diagnostic output.
//!
//! Uses the anstyle ecosystem: anstream for auto-detecting color support
//! (NO_COLOR, CLICOLOR_FORCE, terminal capabilities) and anstyle for the
//! style constants themselves.

use anstyle::{AnsiColor, Color, Style};

/// Auto-detecting println that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::println;

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

/// Path style (blue) - applied to every path field in a diagnostic line
pub const PATH: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));

/// Count style (green) - applied to the summary line's item count
pub const COUNT: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Wrap text in the path style.
pub fn path(text: &str) -> String {
    render(PATH, text)
}

/// Wrap text in the count style.
pub fn count(text: &str) -> String {
    render(COUNT, text)
}

fn render(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi_str::AnsiStr;

    #[test]
    fn styled_text_strips_back_to_input() {
        assert_eq!(path("src/lib.rs").ansi_strip(), "src/lib.rs");
        assert_eq!(count("2 items").ansi_strip(), "2 items");
    }

    #[test]
    fn styles_differ() {
        assert_ne!(path("x"), count("x"));
    }
}
