//! Formula format errors.

use crate::rules::SyntaxRule;

/// Error type for formulas that fail tokenization or validation.
///
/// Offsets are byte positions into the input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaFormatError {
    #[error("formula must contain at least one token")]
    Empty,

    #[error("unrecognized character '{ch}' at position {offset}")]
    UnrecognizedCharacter { ch: char, offset: usize },

    #[error("malformed number '{lexeme}' at position {offset}")]
    MalformedNumber { lexeme: String, offset: usize },

    #[error(
        "malformed variable '{lexeme}' at position {offset}: expected letters followed by digits"
    )]
    MalformedVariable { lexeme: String, offset: usize },

    #[error("')' at position {offset} has no matching '('")]
    UnmatchedClosingParen { offset: usize },

    #[error("{unclosed} '(' left unclosed at end of formula")]
    UnbalancedParentheses { unclosed: usize },

    #[error("formula cannot start with '{found}'")]
    InvalidFirstToken { found: String },

    #[error("formula cannot end with '{found}'")]
    InvalidLastToken { found: String },

    #[error(
        "'{found}' at position {offset} cannot follow '{after}' (expected a number, variable or '(')"
    )]
    InvalidAfterOperatorOrParen {
        after: String,
        found: String,
        offset: usize,
    },

    #[error(
        "'{found}' at position {offset} cannot follow '{after}' (expected an operator or ')')"
    )]
    InvalidAfterOperand {
        after: String,
        found: String,
        offset: usize,
    },
}

impl FormulaFormatError {
    /// Returns the grammar rule this error violates.
    pub fn rule(&self) -> SyntaxRule {
        match self {
            Self::Empty => SyntaxRule::OneToken,
            Self::UnrecognizedCharacter { .. }
            | Self::MalformedNumber { .. }
            | Self::MalformedVariable { .. } => SyntaxRule::ValidToken,
            Self::UnmatchedClosingParen { .. } => SyntaxRule::RightParentheses,
            Self::UnbalancedParentheses { .. } => SyntaxRule::BalancedParentheses,
            Self::InvalidFirstToken { .. } => SyntaxRule::FirstToken,
            Self::InvalidLastToken { .. } => SyntaxRule::LastToken,
            Self::InvalidAfterOperatorOrParen { .. } => SyntaxRule::ParenthesisOperatorFollowing,
            Self::InvalidAfterOperand { .. } => SyntaxRule::ExtraFollowing,
        }
    }

    /// Returns the byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedCharacter { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::MalformedVariable { offset, .. }
            | Self::UnmatchedClosingParen { offset }
            | Self::InvalidAfterOperatorOrParen { offset, .. }
            | Self::InvalidAfterOperand { offset, .. } => Some(*offset),
            Self::Empty
            | Self::UnbalancedParentheses { .. }
            | Self::InvalidFirstToken { .. }
            | Self::InvalidLastToken { .. } => None,
        }
    }
}
