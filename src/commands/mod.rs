//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `pulp-puppet` command-line tool, one file per subcommand.
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `pulp_puppet` library.
//!
//! The helpers below are shared by the commands that need the Puppet
//! extension loaded into an in-memory CLI.

pub mod completions;
pub mod section;
pub mod tree;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;

use pulp_puppet::client_config::{ClientConfig, UploadSettings};
use pulp_puppet::defaults::default_client_config;
use pulp_puppet::extension;
use pulp_puppet::section::PulpCli;
use pulp_puppet::suggestions;

/// Reads the admin client config.
///
/// An explicitly named file must exist. Without one, the default location is
/// used when present and built-in defaults otherwise.
pub fn load_client_config(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) if !path.exists() => Err(suggestions::client_config_not_found(path)),
        Some(path) => read_client_config(path),
        None => {
            let default_path = default_client_config();
            if default_path.exists() {
                read_client_config(&default_path)
            } else {
                Ok(ClientConfig::default())
            }
        }
    }
}

fn read_client_config(path: &Path) -> Result<ClientConfig> {
    ClientConfig::load(path)
        .with_context(|| format!("Cannot read client config {}", path.display()))
}

/// Builds an in-memory CLI with the Puppet extension loaded.
pub fn load_extension(client_config: Option<&Path>) -> Result<(PulpCli, UploadSettings)> {
    let config = load_client_config(client_config)?;
    let mut cli = PulpCli::new();
    let settings = extension::initialize(&mut cli, &config)
        .map_err(|e| anyhow::anyhow!("Puppet extension failed to load: {e}"))?;
    Ok((cli, settings))
}
