//! # Importer
//!
//! Configuration handling for the Puppet importer.
//!
//! - [`common`]: schema checks shared by all importers (TLS, proxy,
//!   throttling). Failures are raised as [`crate::error::Error::InvalidConfig`].
//! - [`configuration`]: the Puppet-specific field validators and the
//!   aggregator the server calls before accepting a repository's importer
//!   configuration.

pub mod common;
pub mod configuration;

pub use configuration::{validate, Validation};
