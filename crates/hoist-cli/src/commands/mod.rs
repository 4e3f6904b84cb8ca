//! Command dispatch and handler modules.

mod check;
mod env;
mod pom;
mod preflight;
mod targets;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let props = &cli.properties;
    match cli.command {
        Command::Targets { json } => targets::exec(props, json),
        Command::Check => check::exec(props),
        Command::Preflight { task } => preflight::exec(props, &task),
        Command::Pom => pom::exec(props),
        Command::Env { reveal } => env::exec(props, reveal),
    }
}
