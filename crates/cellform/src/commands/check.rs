//! `cellform check` -- validate formulas and report each verdict.

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use cellform_core::{FormulaFormatError, parse_formula};
use cellform_ui::diagnostic::{render_accepted, render_accepted_input, render_rejected};
use serde::Serialize;
use tracing::debug;

use crate::cli::CheckArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_line};

/// Verdict for one input, as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct CheckResult {
    input: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
}

impl CheckResult {
    fn accepted(input: &str, canonical: &str) -> Self {
        Self {
            input: input.to_string(),
            ok: true,
            canonical: Some(canonical.to_string()),
            error: None,
            rule: None,
            offset: None,
        }
    }

    fn rejected(input: &str, err: &FormulaFormatError) -> Self {
        Self {
            input: input.to_string(),
            ok: false,
            canonical: None,
            error: Some(err.to_string()),
            rule: Some(err.rule().as_str()),
            offset: err.offset(),
        }
    }
}

/// Execute the `cellform check` command.
pub fn run(ctx: &RuntimeContext, args: &CheckArgs) -> Result<()> {
    let inputs = if args.formulas.is_empty() {
        read_stdin_lines()?
    } else {
        args.formulas.clone()
    };
    if inputs.is_empty() {
        bail!("no formulas to check");
    }

    let fail_fast = args.fail_fast || ctx.config.fail_fast;
    let show_canonical = ctx.config.show_canonical && !args.no_canonical;
    let styles = &ctx.styles;

    let mut results = Vec::with_capacity(inputs.len());
    let mut rejected = 0usize;

    for input in &inputs {
        match parse_formula(input) {
            Ok(formula) => {
                if !ctx.json && !ctx.quiet {
                    let line = if show_canonical {
                        render_accepted(styles, &formula)
                    } else {
                        render_accepted_input(styles, input)
                    };
                    output_line(&line);
                }
                results.push(CheckResult::accepted(input, formula.as_str()));
            }
            Err(err) => {
                rejected += 1;
                if !ctx.json {
                    output_line(&render_rejected(styles, input, &err));
                }
                results.push(CheckResult::rejected(input, &err));
                if fail_fast {
                    debug!("stopping at first rejection");
                    break;
                }
            }
        }
    }

    if ctx.json {
        output_json(&results);
    } else if !ctx.quiet && inputs.len() > 1 {
        let summary = format!("{} checked, {} rejected", results.len(), rejected);
        let summary = if rejected > 0 {
            styles.warn(&summary)
        } else {
            styles.muted(&summary)
        };
        output_line(&summary);
    }

    if rejected > 0 {
        bail!("{} of {} formulas rejected", rejected, results.len());
    }
    Ok(())
}

/// Read one formula per non-blank line from stdin.
fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read formulas from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
