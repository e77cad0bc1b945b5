//! # Section Command Implementation
//!
//! Looks up a single section of the Puppet branch by path and prints its
//! description, child sections and registered commands.
//!
//! ```bash
//! pulp-puppet section repo sync schedules
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use pulp_puppet::defaults::CLIENT_CONFIG_ENV;
use pulp_puppet::section::{CliSection, Section};
use pulp_puppet::structure::{self, SECTION_ROOT};
use pulp_puppet::suggestions;

/// Show one section of the Puppet branch and its commands
#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Section names below the Puppet root, e.g. `repo sync schedules`.
    #[arg(required = true, value_name = "NAME")]
    pub path: Vec<String>,

    /// Admin client configuration file (INI).
    #[arg(long, value_name = "FILE", env = CLIENT_CONFIG_ENV)]
    pub client_config: Option<PathBuf>,
}

/// Execute the `section` command.
pub fn execute(args: SectionArgs) -> Result<()> {
    let (cli, _) = super::load_extension(args.client_config.as_deref())?;

    let full_path = full_path(&args.path);
    let section = structure::find_section(&cli, &full_path)
        .ok_or_else(|| suggestions::unknown_section(&args.path))?;

    print!("{}", render(&full_path, section));
    Ok(())
}

/// Prefixes the Puppet root unless the user already named it.
fn full_path(path: &[String]) -> Vec<&str> {
    let mut full: Vec<&str> = path.iter().map(String::as_str).collect();
    if full.first() != Some(&SECTION_ROOT) {
        full.insert(0, SECTION_ROOT);
    }
    full
}

fn render(path: &[&str], section: &CliSection) -> String {
    let mut out = format!("{}\n  {}\n", path.join(" "), section.description());

    if !section.subsections().is_empty() {
        out.push_str("\nSections:\n");
        for child in section.subsections() {
            out.push_str(&format!("  {:<12}{}\n", child.name(), child.description()));
        }
    }

    if !section.commands().is_empty() {
        out.push_str("\nCommands:\n");
        for command in section.commands() {
            out.push_str(&format!("  {:<12}{}\n", command.name, command.description));
        }
    }

    out
}
