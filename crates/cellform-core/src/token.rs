//! Token types for the formula grammar.
//!
//! Tokens always hold their canonical form: numbers keep the shortest text
//! that round-trips their value, variables keep upper-cased letters.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A numeric literal.
///
/// Equality and hashing use the canonical text, so `2.0`, `2.00` and `2`
/// compare equal.
#[derive(Debug, Clone)]
pub struct Number {
    value: f64,
    text: String,
}

impl Number {
    /// Builds a number from a finite value. Returns `None` for NaN or infinity.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Normalize -0.0 so it cannot produce a leading sign.
        let value = if value == 0.0 { 0.0 } else { value };
        Some(Self {
            value,
            text: canonical_number_text(value),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Canonical text (never uses an exponent).
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Formats a finite value in plain decimal notation.
fn canonical_number_text(value: f64) -> String {
    // `Display` for f64 picks the shortest round-tripping digits and never
    // switches to scientific notation.
    format!("{}", value)
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A cell reference: letters followed by digits, e.g. `A1` or `BC32`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    letters: String,
    digits: String,
}

impl Variable {
    /// Builds a variable, upper-casing the letters.
    ///
    /// Returns `None` unless `letters` is non-empty ASCII alphabetic and
    /// `digits` is non-empty ASCII digits.
    pub fn new(letters: &str, digits: &str) -> Option<Self> {
        let letters_ok = !letters.is_empty() && letters.bytes().all(|b| b.is_ascii_alphabetic());
        let digits_ok = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        if !letters_ok || !digits_ok {
            return None;
        }
        Some(Self {
            letters: letters.to_ascii_uppercase(),
            digits: digits.to_owned(),
        })
    }

    /// The column letters, upper-cased.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// The row digits as written.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letters, self.digits)
    }
}

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Grammatical class of a token, the only thing the validator looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A number or a variable.
    Operand,
    Operator,
    LeftParen,
    RightParen,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operand => "operand",
            Self::Operator => "operator",
            Self::LeftParen => "left-paren",
            Self::RightParen => "right-paren",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(Number),
    Variable(Variable),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub fn class(&self) -> TokenClass {
        match self {
            Self::Number(_) | Self::Variable(_) => TokenClass::Operand,
            Self::Operator(_) => TokenClass::Operator,
            Self::LeftParen => TokenClass::LeftParen,
            Self::RightParen => TokenClass::RightParen,
        }
    }

    /// Short kind name for display: `number`, `variable`, `operator`, ...
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Variable(_) => "variable",
            Self::Operator(_) => "operator",
            Self::LeftParen => "left-paren",
            Self::RightParen => "right-paren",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Variable(v) => v.fmt(f),
            Self::Operator(op) => op.fmt(f),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// A token together with the byte offset where it starts in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_canonical_text() {
        let cases = [
            (5.0, "5"),
            (0.5, "0.5"),
            (12.4e-6, "0.0000124"),
            (34e17, "3400000000000000000"),
            (-0.0, "0"),
        ];
        for (value, expected) in cases {
            assert_eq!(Number::from_value(value).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn number_rejects_non_finite() {
        assert!(Number::from_value(f64::INFINITY).is_none());
        assert!(Number::from_value(f64::NAN).is_none());
    }

    #[test]
    fn numbers_compare_by_canonical_text() {
        assert_eq!(Number::from_value(2.0), Number::from_value(2.00));
        assert_ne!(Number::from_value(2.0), Number::from_value(2.5));
    }

    #[test]
    fn variable_upper_cases_letters() {
        let v = Variable::new("bc", "32").unwrap();
        assert_eq!(v.letters(), "BC");
        assert_eq!(v.digits(), "32");
        assert_eq!(v.to_string(), "BC32");
        assert_eq!(Variable::new("a", "1"), Variable::new("A", "1"));
    }

    #[test]
    fn variable_requires_both_parts() {
        assert!(Variable::new("", "1").is_none());
        assert!(Variable::new("a", "").is_none());
        assert!(Variable::new("a1", "1").is_none());
        assert!(Variable::new("a", "1a").is_none());
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn token_classes() {
        let n = Token::Number(Number::from_value(1.0).unwrap());
        let v = Token::Variable(Variable::new("a", "1").unwrap());
        assert_eq!(n.class(), TokenClass::Operand);
        assert_eq!(v.class(), TokenClass::Operand);
        assert_eq!(Token::Operator(Operator::Divide).class(), TokenClass::Operator);
        assert_eq!(Token::LeftParen.class(), TokenClass::LeftParen);
        assert_eq!(Token::RightParen.class(), TokenClass::RightParen);
        assert_eq!(v.kind(), "variable");
    }
}
