//! End-to-end tests for the `tree` command.
//!
//! These tests invoke the actual CLI binary and check the Puppet section tree
//! it prints.

mod common;
use common::prelude::*;

#[test]
fn test_tree_help() {
    let mut cmd = cargo_bin_cmd!("pulp-puppet");

    cmd.arg("tree")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display the Puppet section tree"));
}

#[test]
fn test_tree_lists_every_section() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "puppet - manage Puppet-related content and features",
        ))
        .stdout(predicate::str::contains(
            "repo - repository lifecycle commands",
        ))
        .stdout(predicate::str::contains(
            "uploads - upload modules into a repository",
        ))
        .stdout(predicate::str::contains(
            "schedules - manage repository publish schedules",
        ))
        .stdout(predicate::str::contains("consumer - consumer commands"))
        .stdout(predicate::str::contains(
            "schedules - manage puppet module uninstall schedules",
        ))
        .stdout(predicate::str::contains("(run)").not());
}

#[test]
fn test_tree_with_commands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .arg("--commands")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(bind) binds a consumer to a repository",
        ))
        .stdout(predicate::str::contains("(resume) resume paused uploads"));
}

#[test]
fn test_tree_depth_one() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("consumer - consumer commands"))
        .stdout(predicate::str::contains("install - ").not());
}

#[test]
fn test_tree_reports_upload_settings() {
    let fixture = TestFixture::new();
    let config = fixture.write(
        "admin.conf",
        "[puppet]\nupload_working_dir = /srv/uploads\nupload_chunk_size = 4096\n",
    );

    fixture
        .command()
        .arg("tree")
        .arg("--client-config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[INFO] Uploads staged in /srv/uploads (4096 byte chunks)",
        ));
}

#[test]
fn test_tree_reads_client_config_from_env() {
    let fixture = TestFixture::new();
    let config = fixture.write("custom.conf", "[puppet]\nupload_chunk_size = 8192\n");

    fixture
        .command()
        .env(CLIENT_CONFIG_ENV, &config)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("(8192 byte chunks)"));
}

#[test]
fn test_tree_rejects_bad_chunk_size() {
    let fixture = TestFixture::new();
    let config = fixture.write("admin.conf", "[puppet]\nupload_chunk_size = lots\n");

    fixture
        .command()
        .arg("tree")
        .arg("--client-config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("upload_chunk_size"));
}

#[test]
fn test_tree_missing_client_config() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .arg("--client-config")
        .arg("missing.conf")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Client configuration file not found",
        ))
        .stderr(predicate::str::contains("hint:"));
}
