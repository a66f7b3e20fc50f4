//! Clap CLI definitions for the `cellform` command.

use cellform_config::config::ColorMode;
use clap::{Args, Parser, Subcommand};

/// cellform -- spreadsheet formula syntax checker.
///
/// Tokenizes formulas built from numbers, cell references like `A1`,
/// `+ - * /` and parentheses, and reports whether they are well formed.
#[derive(Parser, Debug)]
#[command(
    name = "cellform",
    about = "Spreadsheet formula syntax checker",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr (repeat for trace).
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// When to use colors: auto, always or never.
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Read configuration from this file in addition to the discovered ones.
    #[arg(long, global = true, value_name = "PATH", env = "CELLFORM_CONFIG")]
    pub config: Option<String>,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check formulas given as arguments, or one per line on stdin.
    Check(CheckArgs),

    /// Print the canonical token stream of a formula.
    Tokens(FormulaArg),

    /// List the distinct cell references in a formula.
    Vars(FormulaArg),

    /// Compare two formulas for canonical equality.
    Eq(EqArgs),

    /// List the grammar rules.
    Rules,

    /// Show the effective configuration.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// Arguments for `cellform check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Formulas to check. Reads stdin when omitted.
    pub formulas: Vec<String>,

    /// Stop at the first rejected formula.
    #[arg(long)]
    pub fail_fast: bool,

    /// Echo the input instead of the canonical form for accepted formulas.
    #[arg(long)]
    pub no_canonical: bool,
}

/// A single formula argument.
#[derive(Args, Debug)]
pub struct FormulaArg {
    /// The formula text.
    pub formula: String,
}

/// Arguments for `cellform eq`.
#[derive(Args, Debug)]
pub struct EqArgs {
    /// First formula.
    pub left: String,
    /// Second formula.
    pub right: String,
}

/// Arguments for `cellform config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the merged configuration.
    Show,
    /// Print the configuration files that are consulted, in merge order.
    Path,
}

/// Arguments for `cellform completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cellform", "check", "a1", "--json", "-vv", "--color", "never"])
            .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.color, Some(ColorMode::Never));
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.formulas, vec!["a1"]),
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Cli::try_parse_from(["cellform", "--color", "rainbow", "rules"]).is_err());
    }
}
