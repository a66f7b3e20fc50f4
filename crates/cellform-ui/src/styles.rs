//! Ayu color theme and styling for cellform CLI output.
//!
//! Uses the Ayu Dark color palette. Color source:
//! <https://github.com/ayu-theme/ayu-colors>
//!
//! Only outcomes get color: accepted formulas are green, rejected ones red,
//! rule names and offsets muted.

use cellform_config::config::ColorMode;
use cellform_core::{SyntaxRule, TokenClass};
use owo_colors::OwoColorize;

use crate::terminal::use_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue
const OPERATOR: (u8, u8, u8) = (0xf2, 0x97, 0x18); // #f29718 - orange

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const ICON_CARET: &str = "^";

/// Renders text for one output stream, with or without ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    color: bool,
}

impl Styles {
    /// Styles for the given color mode, resolving `auto` against the terminal.
    pub fn for_mode(mode: ColorMode) -> Self {
        Self {
            color: use_color(mode),
        }
    }

    /// Styles that never emit escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn paint(&self, s: &str, rgb: (u8, u8, u8)) -> String {
        if self.color {
            s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
        } else {
            s.to_string()
        }
    }

    pub fn pass(&self, s: &str) -> String {
        self.paint(s, PASS)
    }

    pub fn warn(&self, s: &str) -> String {
        self.paint(s, WARN)
    }

    pub fn fail(&self, s: &str) -> String {
        self.paint(s, FAIL)
    }

    pub fn muted(&self, s: &str) -> String {
        self.paint(s, MUTED)
    }

    pub fn accent(&self, s: &str) -> String {
        self.paint(s, ACCENT)
    }

    pub fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn pass_icon(&self) -> String {
        self.pass(ICON_PASS)
    }

    pub fn fail_icon(&self) -> String {
        self.fail(ICON_FAIL)
    }

    /// Renders a rule name as `[rule-name]` in muted color.
    pub fn rule(&self, rule: SyntaxRule) -> String {
        self.muted(&format!("[{}]", rule.as_str()))
    }

    /// Renders token text colored by its grammatical class.
    pub fn token(&self, class: TokenClass, text: &str) -> String {
        match class {
            TokenClass::Operand => self.accent(text),
            TokenClass::Operator => self.paint(text, OPERATOR),
            TokenClass::LeftParen | TokenClass::RightParen => self.muted(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_styles_are_identity() {
        let s = Styles::plain();
        assert_eq!(s.pass("ok"), "ok");
        assert_eq!(s.fail_icon(), ICON_FAIL);
        assert_eq!(s.rule(SyntaxRule::LastToken), "[last-token]");
        assert_eq!(s.token(TokenClass::Operator, "+"), "+");
    }

    #[test]
    fn colored_styles_emit_escapes() {
        let s = Styles::for_mode(ColorMode::Always);
        assert!(s.is_colored());
        let out = s.pass("ok");
        assert!(out.contains("\u{1b}["), "{out:?}");
        assert!(out.contains("ok"));
    }

    #[test]
    fn never_mode_is_plain() {
        assert_eq!(Styles::for_mode(ColorMode::Never), Styles::plain());
    }
}
