//! Core types for the cellform system.
//!
//! A raw formula string flows through the [`tokenizer`] into the
//! [`validation`] pass, which either rejects it with a
//! [`FormulaFormatError`] or produces an immutable, canonical [`Formula`].
//!
//! ```
//! use cellform_core::parse_formula;
//!
//! let formula = parse_formula("a1 + 2.50").unwrap();
//! assert_eq!(formula.to_string(), "A1+2.5");
//! assert!(parse_formula("67 76").is_err());
//! ```

pub mod error;
pub mod formula;
pub mod rules;
pub mod token;
pub mod tokenizer;
pub mod validation;

pub use error::FormulaFormatError;
pub use formula::{Formula, parse_formula};
pub use rules::SyntaxRule;
pub use token::{Number, Operator, SpannedToken, Token, TokenClass, Variable};
pub use tokenizer::{Tokenizer, tokenize};
pub use validation::validate;
