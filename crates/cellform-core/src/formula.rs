//! The validated formula type.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::FormulaFormatError;
use crate::token::{Token, Variable};
use crate::tokenizer::tokenize;
use crate::validation::validate;

/// Parse and validate a formula string.
pub fn parse_formula(text: &str) -> Result<Formula, FormulaFormatError> {
    debug!(input = text, "parsing formula");
    validate(tokenize(text))
}

/// A syntactically valid formula.
///
/// Once constructed a `Formula` never changes. It holds the canonical
/// tokens and the canonical text computed from them, so two formulas
/// compare equal when they differ only in whitespace, number spelling
/// (`2.0` vs `2`) or variable case (`a1` vs `A1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    tokens: Box<[Token]>,
    text: String,
}

impl Formula {
    /// Same as [`parse_formula`].
    pub fn new(text: &str) -> Result<Self, FormulaFormatError> {
        parse_formula(text)
    }

    /// Wrap tokens that already passed validation.
    pub(crate) fn from_validated(tokens: Vec<Token>) -> Self {
        let text = tokens.iter().map(Token::to_string).collect();
        Self {
            tokens: tokens.into_boxed_slice(),
            text,
        }
    }

    /// The canonical token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The distinct variables referenced by the formula, in sorted order.
    pub fn variables(&self) -> BTreeSet<&Variable> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Variable(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    /// The canonical text: canonical tokens joined without whitespace.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Formula {
    type Err = FormulaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaFormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_formula(s)
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_formula(&s).map_err(serde::de::Error::custom)
    }
}
