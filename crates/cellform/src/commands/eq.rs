//! `cellform eq` -- compare two formulas by canonical form.

use anyhow::{Context, Result, bail};
use cellform_core::Formula;

use crate::cli::EqArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_line};

/// Execute the `cellform eq` command.
///
/// Fails when the formulas differ, so the exit code can drive scripts.
pub fn run(ctx: &RuntimeContext, args: &EqArgs) -> Result<()> {
    let left = Formula::new(&args.left).with_context(|| format!("left formula '{}'", args.left))?;
    let right =
        Formula::new(&args.right).with_context(|| format!("right formula '{}'", args.right))?;
    let equal = left == right;

    if ctx.json {
        output_json(&serde_json::json!({
            "equal": equal,
            "left": left.as_str(),
            "right": right.as_str(),
        }));
    } else if !ctx.quiet {
        let styles = &ctx.styles;
        if equal {
            output_line(&format!(
                "{} {} == {}",
                styles.pass_icon(),
                styles.bold(left.as_str()),
                styles.bold(right.as_str())
            ));
        } else {
            output_line(&format!(
                "{} {} != {}",
                styles.fail_icon(),
                styles.bold(left.as_str()),
                styles.bold(right.as_str())
            ));
        }
    }

    if !equal {
        bail!("formulas differ");
    }
    Ok(())
}
