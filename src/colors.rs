//! ANSI color palette used by the reporter.
//!
//! The reporter drives colors through `termcolor`; the raw escape codes are
//! kept for callers who want to decorate their own strings.

use termcolor::{Color, ColorSpec};

const RESET: &str = "\x1b[0m";

/// The eight base terminal colors and their bright (bold) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Palette {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Palette::Black => "\x1b[30m",
            Palette::Red => "\x1b[31m",
            Palette::Green => "\x1b[32m",
            Palette::Yellow => "\x1b[33m",
            Palette::Blue => "\x1b[34m",
            Palette::Magenta => "\x1b[35m",
            Palette::Cyan => "\x1b[36m",
            Palette::White => "\x1b[37m",
            Palette::BrightRed => "\x1b[1;31m",
            Palette::BrightGreen => "\x1b[1;32m",
            Palette::BrightYellow => "\x1b[1;33m",
            Palette::BrightBlue => "\x1b[1;34m",
            Palette::BrightMagenta => "\x1b[1;35m",
            Palette::BrightCyan => "\x1b[1;36m",
            Palette::BrightWhite => "\x1b[1;37m",
        }
    }

    /// The equivalent `termcolor` spec. Bright variants map to bold, like the
    /// `1;3x` escape codes above.
    pub fn spec(self) -> ColorSpec {
        let (color, bold) = match self {
            Palette::Black => (Color::Black, false),
            Palette::Red => (Color::Red, false),
            Palette::Green => (Color::Green, false),
            Palette::Yellow => (Color::Yellow, false),
            Palette::Blue => (Color::Blue, false),
            Palette::Magenta => (Color::Magenta, false),
            Palette::Cyan => (Color::Cyan, false),
            Palette::White => (Color::White, false),
            Palette::BrightRed => (Color::Red, true),
            Palette::BrightGreen => (Color::Green, true),
            Palette::BrightYellow => (Color::Yellow, true),
            Palette::BrightBlue => (Color::Blue, true),
            Palette::BrightMagenta => (Color::Magenta, true),
            Palette::BrightCyan => (Color::Cyan, true),
            Palette::BrightWhite => (Color::White, true),
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(bold);
        spec
    }
}

/// Wraps `text` in the escape code for `color` followed by a reset.
pub fn colorize(text: &str, color: Palette) -> String {
    format!("{}{}{}", color.ansi_code(), text, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_wraps_with_code_and_reset() {
        assert_eq!(colorize("ok", Palette::Green), "\x1b[32mok\x1b[0m");
        assert_eq!(
            colorize("Suite", Palette::BrightWhite),
            "\x1b[1;37mSuite\x1b[0m"
        );
    }

    #[test]
    fn bright_variants_are_bold() {
        assert!(Palette::BrightRed.spec().bold());
        assert!(!Palette::Red.spec().bold());
        assert_eq!(Palette::Red.spec().fg(), Palette::BrightRed.spec().fg());
    }
}
