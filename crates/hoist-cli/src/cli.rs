//! CLI argument definitions for hoist.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hoist",
    version,
    about = "Publish target resolution and preflight for JVM libraries",
    long_about = "hoist reads Hoist.toml and layered hoist.properties, works out where a \
                  library's artifacts would be published, and checks that every task has \
                  the properties it needs before it runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Set a project property (highest precedence), e.g. -P ossrhUsername=me
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE", global = true)]
    pub properties: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the active publish targets
    Targets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the publish configuration and summarize the plan
    Check,

    /// Check that a task has everything it needs to run
    Preflight {
        /// Task name, e.g. publish or closeAndReleaseRepository
        task: String,
    },

    /// Print the POM of the javaLibrary publication
    Pom,

    /// Print resolved project properties
    Env {
        /// Show values instead of masking them
        #[arg(long)]
        reveal: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
