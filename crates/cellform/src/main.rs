//! `cellform` -- spreadsheet formula syntax checker.
//!
//! Parses CLI arguments with clap, resolves the runtime context from the
//! layered configuration, and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| {
        if let Some(filter) = ctx.log_filter() {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        dispatch(&ctx, cli.command.as_ref())
    });

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, command: Option<&Commands>) -> anyhow::Result<()> {
    match command {
        Some(Commands::Check(args)) => commands::check::run(ctx, args),
        Some(Commands::Tokens(args)) => commands::tokens::run(ctx, args),
        Some(Commands::Vars(args)) => commands::vars::run(ctx, args),
        Some(Commands::Eq(args)) => commands::eq::run(ctx, args),
        Some(Commands::Rules) => commands::rules::run(ctx),
        Some(Commands::Config(args)) => commands::config_cmd::run(ctx, args),
        Some(Commands::Completion(args)) => commands::completion::run(ctx, args),
        Some(Commands::Version) => commands::version::run(ctx),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
