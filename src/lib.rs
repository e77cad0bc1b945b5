//! # Pulp Puppet Library
//!
//! Puppet module support for a Pulp-style content-management system: the
//! admin client extension that lays out the Puppet command sections, and the
//! importer configuration validation the server runs before accepting a
//! repository's settings.
//!
//! ## Quick Example
//!
//! ```
//! use pulp_puppet::client_config::ClientConfig;
//! use pulp_puppet::extension;
//! use pulp_puppet::importer;
//! use pulp_puppet::plugin_config::{ConfigMap, PluginCallConfiguration};
//! use pulp_puppet::section::PulpCli;
//! use pulp_puppet::structure;
//!
//! // Load the admin extension into an empty CLI
//! let mut cli = PulpCli::new();
//! extension::initialize(&mut cli, &ClientConfig::default()).unwrap();
//! let sync = structure::repo_sync_section(&cli).unwrap();
//! assert!(sync.find_command("run").is_some());
//!
//! // Validate an importer configuration
//! let mut repo = ConfigMap::new();
//! repo.insert("feed".into(), "bad-feed".into());
//! let config = PluginCallConfiguration::new(ConfigMap::new(), repo);
//! let (valid, message) = importer::validate(&config).into_pair();
//! assert!(!valid);
//! assert!(message.unwrap().contains("bad-feed"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Sections (`section`)**: the capabilities of the client's command tree
//!   an extension relies on, with an in-memory implementation.
//! - **Structure (`structure`)**: the fixed Puppet section hierarchy, built
//!   with find-or-create semantics, and accessors for each section.
//! - **Extension (`extension`)**: loads the Puppet commands into the
//!   structure.
//! - **Plugin configuration (`plugin_config`)**: layered importer settings.
//! - **Importer (`importer`)**: common schema checks plus the Puppet field
//!   validators and their aggregator.
//! - **Client configuration (`client_config`)**: upload settings from the
//!   admin INI file.

pub mod client_config;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod extension;
pub mod importer;
pub mod output;
pub mod plugin_config;
pub mod section;
pub mod structure;
pub mod suggestions;

#[cfg(test)]
mod structure_proptest;
