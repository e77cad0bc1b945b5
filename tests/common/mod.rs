//! Shared test utilities for the E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("tree").assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use pulp_puppet::defaults::CLIENT_CONFIG_ENV;
use std::path::PathBuf;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;
    pub use pulp_puppet::defaults::CLIENT_CONFIG_ENV;

    pub use super::TestFixture;
}

/// A temporary home directory the binary runs in, so no real
/// `~/.pulp/admin.conf` leaks into the tests.
pub struct TestFixture {
    pub home: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    /// Writes `content` to a file under the fixture and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let file = self.home.child(name);
        file.write_str(content).unwrap();
        file.path().to_path_buf()
    }

    /// The binary, isolated from the user's environment.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pulp-puppet");
        cmd.current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env_remove(CLIENT_CONFIG_ENV)
            .env_remove("RUST_LOG")
            .arg("--color=never");
        cmd
    }
}
