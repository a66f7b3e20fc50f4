//! `cellform tokens` -- print the canonical token stream of a formula.

use anyhow::Result;
use cellform_core::{Formula, Token};
use serde::Serialize;

use crate::cli::FormulaArg;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_line};

#[derive(Debug, Serialize)]
struct TokenView {
    class: &'static str,
    kind: &'static str,
    text: String,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            class: token.class().as_str(),
            kind: token.kind(),
            text: token.to_string(),
        }
    }
}

/// Execute the `cellform tokens` command.
pub fn run(ctx: &RuntimeContext, args: &FormulaArg) -> Result<()> {
    let formula = Formula::new(&args.formula)?;

    if ctx.json {
        let views: Vec<TokenView> = formula.tokens().iter().map(TokenView::from).collect();
        output_json(&views);
        return Ok(());
    }

    for token in formula.tokens() {
        let class = token.class();
        output_line(&format!(
            "{}\t{}",
            class,
            ctx.styles.token(class, &token.to_string())
        ));
    }
    Ok(())
}
