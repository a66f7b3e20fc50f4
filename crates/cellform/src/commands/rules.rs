//! `cellform rules` -- list the grammar rules.

use anyhow::Result;
use cellform_core::SyntaxRule;

use crate::context::RuntimeContext;
use crate::output::{format_table, output_json, output_line};

/// Execute the `cellform rules` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        let rules: Vec<_> = SyntaxRule::ALL
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.as_str(),
                    "description": rule.description(),
                })
            })
            .collect();
        output_json(&rules);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = SyntaxRule::ALL
        .iter()
        .map(|rule| vec![rule.as_str().to_string(), rule.description().to_string()])
        .collect();
    for line in format_table(&rows) {
        output_line(&line);
    }
    Ok(())
}
