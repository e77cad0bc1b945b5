//! # Puppet Importer Configuration
//!
//! Validation of the options the Puppet importer accepts on top of the
//! common importer settings:
//!
//! - `feed`: optional URL of the module source.
//! - `queries`: optional list of module search queries.
//! - `remove_missing`: optional boolean flag.
//!
//! [`validate`] first runs the common schema validation, then the field
//! validators in a fixed order (feed, remove-missing, queries), stopping at
//! the first failure.

use log::{debug, info};
use serde_json::Value;
use url::Url;

use crate::constants::{CONFIG_FEED, CONFIG_QUERIES, CONFIG_REMOVE_MISSING};
use crate::error::Error;
use crate::importer::common;
use crate::plugin_config::{display_value, PluginCallConfiguration};

/// Outcome of validating a configuration.
///
/// A failure always carries a message; success never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn invalid(message: impl Into<String>) -> Self {
        Validation::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(message) => Some(message),
        }
    }

    /// The `(success, message)` pair form handed back to the server.
    pub fn into_pair(self) -> (bool, Option<String>) {
        match self {
            Validation::Valid => (true, None),
            Validation::Invalid(message) => (false, Some(message)),
        }
    }
}

/// A check of a single importer option.
#[cfg_attr(test, mockall::automock)]
pub trait FieldValidator {
    /// Key of the option this validator checks.
    fn name(&self) -> &'static str;

    fn validate(&self, config: &PluginCallConfiguration) -> Validation;
}

pub struct FeedValidator;
pub struct RemoveMissingValidator;
pub struct QueriesValidator;

impl FieldValidator for FeedValidator {
    fn name(&self) -> &'static str {
        CONFIG_FEED
    }

    fn validate(&self, config: &PluginCallConfiguration) -> Validation {
        validate_feed(config)
    }
}

impl FieldValidator for RemoveMissingValidator {
    fn name(&self) -> &'static str {
        CONFIG_REMOVE_MISSING
    }

    fn validate(&self, config: &PluginCallConfiguration) -> Validation {
        validate_remove_missing(config)
    }
}

impl FieldValidator for QueriesValidator {
    fn name(&self) -> &'static str {
        CONFIG_QUERIES
    }

    fn validate(&self, config: &PluginCallConfiguration) -> Validation {
        validate_queries(config)
    }
}

/// Validates the full importer configuration.
pub fn validate(config: &PluginCallConfiguration) -> Validation {
    validate_with(
        config,
        &[&FeedValidator, &RemoveMissingValidator, &QueriesValidator],
    )
}

/// Runs the common schema validation and then `validators` in order.
pub fn validate_with(
    config: &PluginCallConfiguration,
    validators: &[&dyn FieldValidator],
) -> Validation {
    if let Err(error) = common::validate_config(config) {
        let result = schema_failure(error);
        if let Some(message) = result.message() {
            info!("Importer configuration rejected: {}", message);
        }
        return result;
    }

    for validator in validators {
        debug!("Running importer field validator '{}'", validator.name());
        let result = validator.validate(config);
        if let Validation::Invalid(message) = &result {
            info!("Importer configuration rejected: {}", message);
            return result;
        }
    }

    Validation::Valid
}

fn schema_failure(error: Error) -> Validation {
    match error {
        Error::InvalidConfig { messages } => {
            Validation::invalid(format!("Configuration errors:\n{}", messages.join("\n")))
        }
        other => Validation::invalid(other.to_string()),
    }
}

/// The feed is optional; when present it must be an absolute URL.
pub fn validate_feed(config: &PluginCallConfiguration) -> Validation {
    let Some(value) = config.get(CONFIG_FEED) else {
        return Validation::Valid;
    };

    match value {
        Value::String(feed) if is_valid_url(feed) => Validation::Valid,
        other => Validation::invalid(format!(
            "The value <{}> for <{}> is not a valid URL",
            display_value(other),
            CONFIG_FEED
        )),
    }
}

/// Queries are optional; when present they must be a list.
pub fn validate_queries(config: &PluginCallConfiguration) -> Validation {
    match config.get(CONFIG_QUERIES) {
        None | Some(Value::Array(_)) => Validation::Valid,
        Some(_) => Validation::invalid(format!(
            "The value for <{}> must be specified as a list",
            CONFIG_QUERIES
        )),
    }
}

/// Remove-missing is optional; when present it must read as a boolean.
pub fn validate_remove_missing(config: &PluginCallConfiguration) -> Validation {
    match config.get_boolean(CONFIG_REMOVE_MISSING) {
        Ok(_) => Validation::Valid,
        Err(_) => Validation::invalid(format!(
            "The value for <{}> must be either \"true\" or \"false\"",
            CONFIG_REMOVE_MISSING
        )),
    }
}

// Local directories are addressed as host-less file URLs.
fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| url.has_host() || url.scheme() == "file")
}
