//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the merged
//! configuration with command-line flags applied on top, and the output
//! styles derived from it.

use std::env;

use anyhow::{Context, Result};
use cellform_config::config::{CellformConfig, load_config};
use cellform_config::discovery::ConfigSources;
use cellform_ui::styles::Styles;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Effective configuration after flags were applied.
    pub config: CellformConfig,

    /// Where the configuration was looked up.
    pub sources: ConfigSources,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbosity level (0 = off, 1 = debug, 2+ = trace).
    pub verbose: u8,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,

    /// Styles for stdout.
    pub styles: Styles,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Flags win over `CELLFORM_*` variables, which win over config files.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to determine current directory")?;
        let mut sources = ConfigSources::discover(&cwd);
        if let Some(path) = &global.config {
            sources = sources.with_explicit(path);
        }

        let mut config = load_config(&sources).context("failed to load configuration")?;
        apply_flags(&mut config, global);

        let styles = if config.json {
            Styles::plain()
        } else {
            Styles::for_mode(config.color)
        };

        Ok(Self {
            json: config.json,
            verbose: global.verbose,
            quiet: global.quiet,
            styles,
            config,
            sources,
        })
    }

    /// The `tracing` filter directive for the current verbosity.
    pub fn log_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("cellform=debug,cellform_core=debug,cellform_config=debug"),
            _ => Some("cellform=trace,cellform_core=trace,cellform_config=trace"),
        }
    }
}

/// Overlay explicit command-line flags on the loaded configuration.
fn apply_flags(config: &mut CellformConfig, global: &GlobalArgs) {
    if global.json {
        config.json = true;
    }
    if let Some(color) = global.color {
        config.color = color;
    }
}
