//! Command handlers, one module per subcommand.

pub mod check;
pub mod completion;
pub mod config_cmd;
pub mod eq;
pub mod rules;
pub mod tokens;
pub mod vars;
pub mod version;
