//! # Pulp Puppet CLI
//!
//! This is the binary entry point for the `pulp-puppet` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors.
//!
//! The logic lives in the `pulp_puppet` library crate; the binary is a thin
//! wrapper that loads the Puppet extension into an in-memory CLI and runs the
//! importer validation against configuration files.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
