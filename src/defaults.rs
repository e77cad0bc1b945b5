//! Default values for pulp-puppet configuration.
//!
//! This module provides centralized default values used across the library
//! and the commands.

use std::path::PathBuf;

/// Upload working directory used when the client config does not set one.
pub const DEFAULT_UPLOAD_WORKING_DIR: &str = "~/.pulp/puppet/uploads";

/// Upload chunk size in bytes used when the client config does not set one.
pub const DEFAULT_UPLOAD_CHUNK_SIZE: u64 = 1_048_576;

/// Environment variable naming the admin client config file.
pub const CLIENT_CONFIG_ENV: &str = "PULP_PUPPET_CLIENT_CONFIG";

/// Returns the default admin client configuration path.
///
/// Resolves to `~/.pulp/admin.conf`, falling back to `admin.conf` in the
/// current directory if the home directory cannot be determined.
///
/// This can be overridden by the `--client-config` CLI flag or the
/// `PULP_PUPPET_CLIENT_CONFIG` environment variable.
pub fn default_client_config() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".pulp"))
        .unwrap_or_default()
        .join("admin.conf")
}
