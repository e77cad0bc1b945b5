//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which runs the Puppet
//! importer configuration validation the server performs before accepting a
//! repository's importer settings.
//!
//! ## Functionality
//!
//! - **Layered Configuration**: the plugin-global and repository layers are
//!   read from YAML or JSON files; `--override KEY=VALUE` adds the per-call
//!   layer.
//! - **Schema Validation**: TLS, proxy and throttling settings are checked
//!   and every problem is reported.
//! - **Puppet Options**: `feed`, `remove_missing` and `queries` are checked in
//!   that order; the first problem is reported.
//!
//! The command exits with a non-zero status when the configuration is
//! rejected.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use pulp_puppet::importer::{self, Validation};
use pulp_puppet::output::{OutputConfig, Status};
use pulp_puppet::plugin_config::{self, ConfigMap, PluginCallConfiguration};
use pulp_puppet::suggestions;

/// Validate a Puppet importer configuration
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Plugin-global configuration layer (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub plugin_config: Option<PathBuf>,

    /// Repository plugin configuration layer (YAML or JSON).
    #[arg(short, long, value_name = "FILE")]
    pub repo_config: Option<PathBuf>,

    /// Per-call override, repeatable. Values are read as YAML, so
    /// `queries=[httpd, mysql]` is a list.
    #[arg(long = "override", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = build_configuration(&args)?;

    let summary = format!("Validating {} importer option(s)", config.keys().len());
    println!("{}", out.line(Status::Info, &summary));

    match importer::validate(&config) {
        Validation::Valid => {
            let verdict = out.line(Status::Ok, "Importer configuration is valid");
            println!("{verdict}");
            Ok(())
        }
        Validation::Invalid(message) => {
            let verdict = out.line(Status::Error, "Importer configuration is invalid");
            println!("{verdict}");
            for line in message.lines() {
                println!("   {}", line);
            }
            Err(anyhow::anyhow!("Importer configuration validation failed"))
        }
    }
}

fn build_configuration(args: &ValidateArgs) -> Result<PluginCallConfiguration> {
    let plugin = load_optional_layer(args.plugin_config.as_deref())?;
    let repo = load_optional_layer(args.repo_config.as_deref())?;

    let mut override_config = ConfigMap::new();
    for spec in &args.overrides {
        let (key, value) = plugin_config::parse_override(spec)?;
        override_config.insert(key, value);
    }

    let config = PluginCallConfiguration::new(plugin, repo);
    Ok(config.with_override(override_config))
}

fn load_optional_layer(path: Option<&Path>) -> Result<ConfigMap> {
    match path {
        None => Ok(ConfigMap::new()),
        Some(path) => plugin_config::load_layer(path)
            .map_err(|e| suggestions::plugin_config_unreadable(path, &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(repo_config: Option<PathBuf>, overrides: &[&str]) -> ValidateArgs {
        ValidateArgs {
            plugin_config: None,
            repo_config,
            overrides: overrides.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_execute_valid_overrides() {
        let result = execute(
            args(None, &["feed=http://localhost", "queries=[httpd, mysql]"]),
            "never",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_invalid_feed() {
        let result = execute(args(None, &["feed=bad-feed"]), "never");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win_over_repo_layer() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("repo.yaml");
        std::fs::write(&repo, "feed: bad-feed\nremove_missing: 'true'\n").unwrap();

        let overrides = ["feed=http://forge.example.com"];
        let config = build_configuration(&args(Some(repo), &overrides)).unwrap();
        assert_eq!(config.get("feed"), Some(&json!("http://forge.example.com")));
        assert_eq!(config.get("remove_missing"), Some(&json!("true")));
        assert!(importer::validate(&config).is_valid());
    }

    #[test]
    fn test_unreadable_layer_reports_path() {
        let missing = PathBuf::from("/nonexistent/repo.yaml");
        let err = build_configuration(&args(Some(missing), &[])).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/repo.yaml"));
    }

    #[test]
    fn test_malformed_override() {
        assert!(build_configuration(&args(None, &["feed"])).is_err());
    }
}
