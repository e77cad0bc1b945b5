//! # Error Handling
//!
//! This module defines the centralized error type for the `pulp-puppet`
//! library. It uses `thiserror` to build a single `Error` enum covering the
//! failure modes of the host capability layer, the extension initializer and
//! the configuration loaders.
//!
//! Note that importer *validation* failures are not errors: they are returned
//! as data (see [`crate::importer::Validation`]). The one exception is
//! [`Error::InvalidConfig`], which the host schema validation raises and the
//! importer aggregator folds back into a validation result.
//!
//! The `Result` type alias is used throughout the library to keep function
//! signatures short.

use thiserror::Error;

/// Main error type for pulp-puppet operations
#[derive(Error, Debug)]
pub enum Error {
    /// A section path expected to exist after the structure was ensured could
    /// not be found.
    #[error("Section not found: {path}")]
    SectionNotFound { path: String },

    /// A subsection with the same name already exists under the parent.
    #[error("Section '{name}' already exists under '{parent}'")]
    DuplicateSection { parent: String, name: String },

    /// A command with the same name is already attached to the section.
    #[error("Command '{name}' already registered in section '{section}'")]
    DuplicateCommand { section: String, name: String },

    /// The host schema validation rejected one or more configuration values.
    ///
    /// Every offending field contributes one message.
    #[error("Invalid configuration: {}", messages.join("; "))]
    InvalidConfig { messages: Vec<String> },

    /// A configuration value could not be interpreted as the requested type.
    #[error("Configuration value for <{key}> is not a valid {expected}: {value}")]
    ValueType {
        key: String,
        expected: String,
        value: String,
    },

    /// An error occurred while parsing a plugin configuration layer.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The admin client configuration holds an unusable value.
    #[error("Client configuration error: [{section}] {key} - {message}")]
    ClientConfig {
        section: String,
        key: String,
        message: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An INI parsing error, wrapped from `ini::Error`.
    #[error("INI parsing error: {0}")]
    Ini(#[from] ini::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
