//! # Admin Client Configuration
//!
//! The admin client reads an INI file whose `[puppet]` section configures
//! the module upload commands:
//!
//! ```ini
//! [puppet]
//! upload_working_dir = ~/.pulp/puppet/uploads
//! upload_chunk_size = 1048576
//! ```
//!
//! Both keys are optional. A leading `~` in the working directory is
//! expanded against the user's home directory.

use ini::Ini;
use std::path::{Path, PathBuf};

use crate::constants::{CLIENT_SECTION, CLIENT_UPLOAD_CHUNK_SIZE, CLIENT_UPLOAD_WORKING_DIR};
use crate::defaults::{DEFAULT_UPLOAD_CHUNK_SIZE, DEFAULT_UPLOAD_WORKING_DIR};
use crate::error::{Error, Result};

/// Settings the upload commands are configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub working_dir: PathBuf,
    pub chunk_size: u64,
}

/// Parsed admin client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    ini: Ini,
}

impl ClientConfig {
    /// Loads the configuration from an INI file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading client configuration from {}", path.display());
        Ok(Self {
            ini: Ini::load_from_file(path)?,
        })
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(ini::Error::Parse)?;
        Ok(Self { ini })
    }

    /// Returns a raw value from the `[puppet]` section.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.ini
            .section(Some(CLIENT_SECTION))
            .and_then(|section| section.get(key))
    }

    /// Resolves the upload settings, applying defaults for missing keys.
    pub fn upload_settings(&self) -> Result<UploadSettings> {
        let working_dir = self
            .get(CLIENT_UPLOAD_WORKING_DIR)
            .unwrap_or(DEFAULT_UPLOAD_WORKING_DIR);

        let chunk_size = match self.get(CLIENT_UPLOAD_CHUNK_SIZE) {
            None => DEFAULT_UPLOAD_CHUNK_SIZE,
            Some(raw) => parse_chunk_size(raw)?,
        };

        Ok(UploadSettings {
            working_dir: expand_user(working_dir),
            chunk_size,
        })
    }
}

fn parse_chunk_size(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(Error::ClientConfig {
            section: CLIENT_SECTION.to_string(),
            key: CLIENT_UPLOAD_CHUNK_SIZE.to_string(),
            message: format!("must be a positive integer number of bytes, got '{}'", raw),
        }),
    }
}

/// Expands a leading `~` to the home directory. Paths without one, and
/// `~user` forms, are returned unchanged.
pub fn expand_user(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
