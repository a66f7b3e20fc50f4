//! The grammar rules a formula must satisfy.
//!
//! Every [`FormulaFormatError`](crate::FormulaFormatError) maps back to
//! exactly one rule, so callers can report which constraint was broken.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named syntax rule of the formula grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyntaxRule {
    OneToken,
    ValidToken,
    RightParentheses,
    BalancedParentheses,
    FirstToken,
    LastToken,
    ParenthesisOperatorFollowing,
    ExtraFollowing,
}

impl SyntaxRule {
    /// All rules, in the order they are documented.
    pub const ALL: [SyntaxRule; 8] = [
        SyntaxRule::OneToken,
        SyntaxRule::ValidToken,
        SyntaxRule::RightParentheses,
        SyntaxRule::BalancedParentheses,
        SyntaxRule::FirstToken,
        SyntaxRule::LastToken,
        SyntaxRule::ParenthesisOperatorFollowing,
        SyntaxRule::ExtraFollowing,
    ];

    /// Returns the kebab-case rule name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToken => "one-token",
            Self::ValidToken => "valid-token",
            Self::RightParentheses => "right-parentheses",
            Self::BalancedParentheses => "balanced-parentheses",
            Self::FirstToken => "first-token",
            Self::LastToken => "last-token",
            Self::ParenthesisOperatorFollowing => "parenthesis-operator-following",
            Self::ExtraFollowing => "extra-following",
        }
    }

    /// Returns a one-line statement of the rule.
    pub fn description(&self) -> &'static str {
        match self {
            Self::OneToken => "there must be at least one token",
            Self::ValidToken => {
                "only numbers, variables (letters then digits), + - * / ( ) and whitespace are allowed"
            }
            Self::RightParentheses => {
                "reading left to right, closing parentheses never outnumber opening ones"
            }
            Self::BalancedParentheses => "opening and closing parentheses must pair up",
            Self::FirstToken => "the first token must be a number, a variable or '('",
            Self::LastToken => "the last token must be a number, a variable or ')'",
            Self::ParenthesisOperatorFollowing => {
                "a token after '(' or an operator must be a number, a variable or '('"
            }
            Self::ExtraFollowing => {
                "a token after a number, a variable or ')' must be an operator or ')'"
            }
        }
    }
}

impl fmt::Display for SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
