//! # Error Suggestions
//!
//! Helpers producing user-facing errors that say what went wrong and how to
//! fix it. Commands use these instead of bare `anyhow!` messages.

use std::path::Path;

use crate::defaults::CLIENT_CONFIG_ENV;
use crate::structure::STRUCTURE;

/// Error for a client config file given explicitly that does not exist.
pub fn client_config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Client configuration file not found: {path}\n\n\
         hint: Check the path passed to --client-config\n\
         hint: Unset {env} to use the built-in defaults",
        path = path.display(),
        env = CLIENT_CONFIG_ENV
    )
}

/// Error for a plugin config layer that could not be loaded.
pub fn plugin_config_unreadable(path: &Path, error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to load plugin configuration from {path}\n\
         error: {error}\n\n\
         hint: Layers are YAML or JSON mappings, e.g. `feed: http://forge.puppetlabs.com`",
        path = path.display()
    )
}

/// Error for a section path that does not exist in the Puppet structure.
pub fn unknown_section(path: &[String]) -> anyhow::Error {
    let topics: Vec<&str> = STRUCTURE.children.iter().map(|c| c.name).collect();
    anyhow::anyhow!(
        "Section not found: {path}\n\n\
         hint: Paths start below '{root}', e.g. `repo sync schedules`\n\
         hint: Available topics: {topics}\n\
         hint: Run 'pulp-puppet tree' to see every section",
        path = path.join(" "),
        root = STRUCTURE.name,
        topics = topics.join(", ")
    )
}
