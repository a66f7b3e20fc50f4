//! Single-pass syntax validation.
//!
//! The grammar has no nesting beyond parenthesis balance, so the validator
//! is a linear scan. Its only state is the class of the previous token and
//! the current parenthesis depth. Each token is checked against the
//! previous one as it arrives and the scan stops at the first violation.

use tracing::debug;

use crate::error::FormulaFormatError;
use crate::formula::Formula;
use crate::token::{SpannedToken, Token, TokenClass};

/// Validate a token stream and build a [`Formula`] from it.
///
/// Tokenizer errors in the stream are returned as-is.
pub fn validate<I>(tokens: I) -> Result<Formula, FormulaFormatError>
where
    I: IntoIterator<Item = Result<SpannedToken, FormulaFormatError>>,
{
    let mut state = ScanState::new();
    let mut accepted = Vec::new();

    for item in tokens {
        let spanned = item?;
        state.accept(&spanned)?;
        accepted.push(spanned.token);
    }
    state.finish()?;

    debug!(tokens = accepted.len(), "formula accepted");
    Ok(Formula::from_validated(accepted))
}

/// What came before the current token.
#[derive(Debug, Clone)]
enum Previous {
    Start,
    Token(Token),
}

/// Scan state threaded through validation.
#[derive(Debug, Clone)]
struct ScanState {
    previous: Previous,
    depth: usize,
}

impl ScanState {
    fn new() -> Self {
        Self {
            previous: Previous::Start,
            depth: 0,
        }
    }

    /// Check one token against the previous one and update the depth.
    fn accept(&mut self, spanned: &SpannedToken) -> Result<(), FormulaFormatError> {
        let class = spanned.token.class();
        let is_start_of_operand = matches!(class, TokenClass::Operand | TokenClass::LeftParen);

        match &self.previous {
            Previous::Start => {
                if !is_start_of_operand {
                    return Err(reject(FormulaFormatError::InvalidFirstToken {
                        found: spanned.token.to_string(),
                    }));
                }
            }
            Previous::Token(prev) => match prev.class() {
                TokenClass::Operator | TokenClass::LeftParen => {
                    if !is_start_of_operand {
                        return Err(reject(FormulaFormatError::InvalidAfterOperatorOrParen {
                            after: prev.to_string(),
                            found: spanned.token.to_string(),
                            offset: spanned.offset,
                        }));
                    }
                }
                TokenClass::Operand | TokenClass::RightParen => {
                    if is_start_of_operand {
                        return Err(reject(FormulaFormatError::InvalidAfterOperand {
                            after: prev.to_string(),
                            found: spanned.token.to_string(),
                            offset: spanned.offset,
                        }));
                    }
                }
            },
        }

        match class {
            TokenClass::LeftParen => self.depth += 1,
            TokenClass::RightParen => {
                if self.depth == 0 {
                    return Err(reject(FormulaFormatError::UnmatchedClosingParen {
                        offset: spanned.offset,
                    }));
                }
                self.depth -= 1;
            }
            TokenClass::Operand | TokenClass::Operator => {}
        }

        self.previous = Previous::Token(spanned.token.clone());
        Ok(())
    }

    /// Apply the end-of-input rules.
    fn finish(self) -> Result<(), FormulaFormatError> {
        let last = match self.previous {
            Previous::Start => return Err(reject(FormulaFormatError::Empty)),
            Previous::Token(last) => last,
        };
        if !matches!(last.class(), TokenClass::Operand | TokenClass::RightParen) {
            return Err(reject(FormulaFormatError::InvalidLastToken {
                found: last.to_string(),
            }));
        }
        if self.depth != 0 {
            return Err(reject(FormulaFormatError::UnbalancedParentheses {
                unclosed: self.depth,
            }));
        }
        Ok(())
    }
}

fn reject(err: FormulaFormatError) -> FormulaFormatError {
    debug!(rule = %err.rule(), error = %err, "formula rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SyntaxRule;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn check(input: &str) -> Result<Formula, FormulaFormatError> {
        validate(tokenize(input))
    }

    fn rule_of(input: &str) -> SyntaxRule {
        match check(input) {
            Ok(f) => panic!("expected {input:?} to be rejected, got {f}"),
            Err(e) => e.rule(),
        }
    }

    #[test]
    fn accepts_well_formed() {
        for input in [
            "a1",
            "1+1",
            ".5",
            "5.",
            "5.0",
            "12.4E-6",
            "34E17",
            "((8+3)*9)",
            "(((123*34)))",
            "(2+2) / 3 - (b6 * 3)",
        ] {
            assert!(check(input).is_ok(), "{input}");
        }
    }

    #[test]
    fn one_token_rule() {
        assert_eq!(check(""), Err(FormulaFormatError::Empty));
        assert_eq!(check("   \t\n"), Err(FormulaFormatError::Empty));
    }

    #[test]
    fn valid_token_rule() {
        for input in ["1a", "a", "a1a", "$12", "12,000", "100000!", "#12", "79%", "a12;", "12\\4"] {
            assert_eq!(rule_of(input), SyntaxRule::ValidToken, "{input}");
        }
    }

    #[test]
    fn excess_closing_paren_rejected_where_it_occurs() {
        assert_eq!(
            check("(8+3)*9)"),
            Err(FormulaFormatError::UnmatchedClosingParen { offset: 7 })
        );
        assert_eq!(
            check("1)+(2"),
            Err(FormulaFormatError::UnmatchedClosingParen { offset: 1 })
        );
    }

    #[test]
    fn unclosed_parens_rejected_at_end() {
        assert_eq!(
            check("(((8+3)*34)"),
            Err(FormulaFormatError::UnbalancedParentheses { unclosed: 1 })
        );
        assert_eq!(
            check("((1"),
            Err(FormulaFormatError::UnbalancedParentheses { unclosed: 2 })
        );
    }

    #[test]
    fn first_token_rule() {
        for input in [")93*4", "+43", "-43", "/43", "*43"] {
            assert_eq!(rule_of(input), SyntaxRule::FirstToken, "{input}");
        }
    }

    #[test]
    fn last_token_rule() {
        for input in ["43+", "43-", "43/", "43*", "("] {
            assert_eq!(rule_of(input), SyntaxRule::LastToken, "{input}");
        }
    }

    #[test]
    fn open_paren_at_end_breaks_adjacency_first() {
        // `(` after an operand is caught before the end-of-input rules run.
        assert_eq!(rule_of("93*4("), SyntaxRule::ExtraFollowing);
        assert_eq!(rule_of("93*("), SyntaxRule::LastToken);
    }

    #[test]
    fn parenthesis_operator_following_rule() {
        for input in [
            "(+32)", "(-32)", "(*32)", "(/32)", "(12*+65)", "(12/-65)", "(12+*65)", "(12-/65)",
            "()", "(1+)",
        ] {
            assert_eq!(
                rule_of(input),
                SyntaxRule::ParenthesisOperatorFollowing,
                "{input}"
            );
        }
    }

    #[test]
    fn extra_following_rule() {
        for input in [
            "67(2+3)",
            "67 76",
            "A12 BC3",
            "C13(1+2)",
            "F32 13",
            "(12*3)6",
            "(12*3)c2",
            "(12*3)(31)",
        ] {
            assert_eq!(rule_of(input), SyntaxRule::ExtraFollowing, "{input}");
        }
    }

    #[test]
    fn adjacency_error_reports_both_tokens() {
        assert_eq!(
            check("a12 bc3"),
            Err(FormulaFormatError::InvalidAfterOperand {
                after: "A12".into(),
                found: "BC3".into(),
                offset: 4,
            })
        );
    }

    #[test]
    fn tokenizer_error_wins_over_later_grammar_errors() {
        assert!(matches!(
            check("+ $"),
            Err(FormulaFormatError::InvalidFirstToken { .. })
        ));
        assert!(matches!(
            check("1 + $"),
            Err(FormulaFormatError::UnrecognizedCharacter { ch: '$', offset: 4 })
        ));
    }
}
