//! `cellform config` -- inspect the effective configuration.

use anyhow::{Context, Result};
use cellform_config::config::to_yaml;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_line};

/// Execute the `cellform config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => {
            if ctx.json {
                output_json(&ctx.config);
            } else {
                let yaml = to_yaml(&ctx.config).context("failed to render configuration")?;
                print!("{}", yaml);
            }
        }

        ConfigCommands::Path => {
            let paths: Vec<serde_json::Value> = ctx
                .sources
                .paths()
                .into_iter()
                .map(|p| {
                    serde_json::json!({
                        "path": p.display().to_string(),
                        "exists": p.is_file(),
                    })
                })
                .collect();

            if ctx.json {
                output_json(&paths);
            } else {
                for p in ctx.sources.paths() {
                    let marker = if p.is_file() {
                        ctx.styles.pass_icon()
                    } else {
                        ctx.styles.muted("-")
                    };
                    output_line(&format!("{} {}", marker, p.display()));
                }
            }
        }
    }
    Ok(())
}
