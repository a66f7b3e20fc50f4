//! Lazy left-to-right tokenizer for formula strings.
//!
//! The tokenizer yields one [`SpannedToken`] per lexeme and skips
//! whitespace between them. The first error ends the stream: after an
//! `Err` item the iterator only returns `None`.

use tracing::trace;

use crate::error::FormulaFormatError;
use crate::token::{Number, Operator, SpannedToken, Token, Variable};

/// Tokenize `input` lazily.
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

/// Iterator over the tokens of a formula string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance over characters matching `pred`, returning how many were eaten.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
            count += 1;
        }
        count
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Extend a bad lexeme over any trailing letters and digits so the error
    /// reports the whole run, e.g. `a1a` or `67ABC123`.
    fn malformed_variable(&mut self, start: usize) -> FormulaFormatError {
        self.eat_while(|c| c.is_ascii_alphanumeric());
        FormulaFormatError::MalformedVariable {
            lexeme: self.input[start..self.pos].to_owned(),
            offset: start,
        }
    }

    fn malformed_number(&self, start: usize) -> FormulaFormatError {
        FormulaFormatError::MalformedNumber {
            lexeme: self.input[start..self.pos].to_owned(),
            offset: start,
        }
    }

    /// Scan `digits [. digits] [(e|E) [+|-] digits]` with at least one
    /// mantissa digit.
    fn scan_number(&mut self, start: usize) -> Result<Token, FormulaFormatError> {
        let int_digits = self.eat_while(|c| c.is_ascii_digit());
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            self.bump();
            frac_digits = self.eat_while(|c| c.is_ascii_digit());
        }
        if int_digits + frac_digits == 0 {
            return Err(self.malformed_number(start));
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.eat_while(|c| c.is_ascii_digit()) == 0 {
                return Err(self.malformed_number(start));
            }
        }

        // A number running straight into letters is a variable written
        // digits-first.
        if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(self.malformed_variable(start));
        }

        let input = self.input;
        let lexeme = &input[start..self.pos];
        let value: f64 = lexeme.parse().map_err(|_| self.malformed_number(start))?;
        let number = Number::from_value(value).ok_or_else(|| self.malformed_number(start))?;
        Ok(Token::Number(number))
    }

    fn scan_variable(&mut self, start: usize) -> Result<Token, FormulaFormatError> {
        self.eat_while(|c| c.is_ascii_alphabetic());
        let letters_end = self.pos;
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(self.malformed_variable(start));
        }

        let input = self.input;
        let letters = &input[start..letters_end];
        let digits = &input[letters_end..self.pos];
        match Variable::new(letters, digits) {
            Some(v) => Ok(Token::Variable(v)),
            None => Err(self.malformed_variable(start)),
        }
    }

    fn scan_token(&mut self) -> Option<Result<SpannedToken, FormulaFormatError>> {
        self.skip_whitespace();
        let start = self.pos;
        let c = self.peek()?;

        let token = if c.is_ascii_digit() || c == '.' {
            self.scan_number(start)
        } else if c.is_ascii_alphabetic() {
            self.scan_variable(start)
        } else {
            self.bump();
            match c {
                '(' => Ok(Token::LeftParen),
                ')' => Ok(Token::RightParen),
                _ => match Operator::from_char(c) {
                    Some(op) => Ok(Token::Operator(op)),
                    None => Err(FormulaFormatError::UnrecognizedCharacter { ch: c, offset: start }),
                },
            }
        };

        Some(token.map(|token| SpannedToken {
            token,
            offset: start,
        }))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<SpannedToken, FormulaFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.scan_token()?;
        match &item {
            Ok(spanned) => trace!(offset = spanned.offset, token = %spanned.token, "token"),
            Err(e) => {
                trace!(error = %e, "tokenizer failed");
                self.failed = true;
            }
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input)
            .map(|t| t.unwrap().token.to_string())
            .collect()
    }

    fn first_error(input: &str) -> FormulaFormatError {
        tokenize(input)
            .find_map(Result::err)
            .unwrap_or_else(|| panic!("expected tokenizer error for {:?}", input))
    }

    #[test]
    fn splits_simple_expression() {
        assert_eq!(texts("(2+2) / 3 - (b6 * 3)"), vec![
            "(", "2", "+", "2", ")", "/", "3", "-", "(", "B6", "*", "3", ")"
        ]);
    }

    #[test]
    fn records_offsets() {
        let offsets: Vec<usize> = tokenize("  a1 +\t10")
            .map(|t| t.unwrap().offset)
            .collect();
        assert_eq!(offsets, vec![2, 5, 7]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t\r\n ").count(), 0);
    }

    #[test]
    fn number_forms() {
        assert_eq!(texts(".5"), vec!["0.5"]);
        assert_eq!(texts("0.5"), vec!["0.5"]);
        assert_eq!(texts("5."), vec!["5"]);
        assert_eq!(texts("5.0"), vec!["5"]);
        assert_eq!(texts("12.4E-6"), vec!["0.0000124"]);
        assert_eq!(texts("34E17"), vec!["3400000000000000000"]);
        assert_eq!(texts("1e+2"), vec!["100"]);
        assert_eq!(texts("007"), vec!["7"]);
    }

    #[test]
    fn bare_dot_is_malformed() {
        assert!(matches!(
            first_error("."),
            FormulaFormatError::MalformedNumber { ref lexeme, offset: 0 } if lexeme == "."
        ));
    }

    #[test]
    fn exponent_needs_digits() {
        for input in ["5E", "5e+", "5.e-"] {
            assert!(
                matches!(first_error(input), FormulaFormatError::MalformedNumber { .. }),
                "{input}"
            );
        }
    }

    #[test]
    fn overflowing_number_is_malformed() {
        assert!(matches!(
            first_error("1E400"),
            FormulaFormatError::MalformedNumber { .. }
        ));
    }

    #[test]
    fn malformed_variables() {
        let cases = [("1a", "1a"), ("a", "a"), ("a1a", "a1a"), ("67ABC123", "67ABC123")];
        for (input, expected) in cases {
            match first_error(input) {
                FormulaFormatError::MalformedVariable { lexeme, offset } => {
                    assert_eq!(lexeme, expected);
                    assert_eq!(offset, 0);
                }
                other => panic!("expected MalformedVariable for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn variable_before_operator_without_digits() {
        assert!(matches!(
            first_error("ab+1"),
            FormulaFormatError::MalformedVariable { ref lexeme, .. } if lexeme == "ab"
        ));
    }

    #[test]
    fn unrecognized_characters() {
        let cases = [
            ("$12", '$', 0),
            ("12,000", ',', 2),
            ("100000!", '!', 6),
            ("#12", '#', 0),
            ("79%", '%', 2),
            ("a12;", ';', 3),
            ("12\\4", '\\', 2),
        ];
        for (input, ch, offset) in cases {
            assert_eq!(
                first_error(input),
                FormulaFormatError::UnrecognizedCharacter { ch, offset },
                "{input}"
            );
        }
    }

    #[test]
    fn stops_after_first_error() {
        let items: Vec<_> = tokenize("1 $ 2").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn non_ascii_letters_are_unrecognized() {
        assert_eq!(
            first_error("é1"),
            FormulaFormatError::UnrecognizedCharacter { ch: 'é', offset: 0 }
        );
    }
}
