//! `cellform vars` -- list the distinct variables of a formula.

use anyhow::Result;
use cellform_core::Formula;

use crate::cli::FormulaArg;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_line};

/// Execute the `cellform vars` command.
pub fn run(ctx: &RuntimeContext, args: &FormulaArg) -> Result<()> {
    let formula = Formula::new(&args.formula)?;
    let names: Vec<String> = formula.variables().iter().map(|v| v.to_string()).collect();

    if ctx.json {
        output_json(&names);
    } else if names.is_empty() {
        if !ctx.quiet {
            output_line(&ctx.styles.muted("(no variables)"));
        }
    } else {
        for name in &names {
            output_line(&ctx.styles.accent(name));
        }
    }
    Ok(())
}
