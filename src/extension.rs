//! # Admin Extension
//!
//! Entry point the admin client calls to load the Puppet extension. It builds
//! the Puppet section structure and attaches the command descriptors to the
//! sections they belong in. Running the commands is the client framework's
//! job; this module only decides where each one lives.

use log::{debug, info};

use crate::client_config::{ClientConfig, UploadSettings};
use crate::error::{Error, Result};
use crate::section::{CommandSpec, Section, SectionTree};
use crate::structure::{self, paths};

pub const INSTALL_ACTION: &str = "install";
pub const UPDATE_ACTION: &str = "update";
pub const UNINSTALL_ACTION: &str = "uninstall";

const SYNC_ACTION: &str = "sync";
const PUBLISH_ACTION: &str = "publish";

/// Commands to attach to the section at `path`.
pub struct Registration {
    pub path: &'static [&'static str],
    pub commands: Vec<CommandSpec>,
}

/// Builds the Puppet structure in `cli` and registers every Puppet command.
///
/// Returns the upload settings the upload commands are configured with.
/// Registering into a CLI that already carries the Puppet commands fails
/// with [`Error::DuplicateCommand`].
pub fn initialize<T: SectionTree>(
    cli: &mut T,
    client_config: &ClientConfig,
) -> Result<UploadSettings> {
    structure::ensure_repo_structure(cli)?;
    structure::ensure_consumer_structure(cli)?;

    for registration in registrations() {
        let path = registration.path.join(" ");
        let Some(section) = structure::find_section_mut(cli, registration.path) else {
            return Err(Error::SectionNotFound { path });
        };
        for command in registration.commands {
            debug!("Registering command '{}' in '{}'", command.name, path);
            section.add_command(command)?;
        }
    }

    let settings = client_config.upload_settings()?;
    info!(
        "Puppet extension loaded (upload dir: {}, chunk size: {})",
        settings.working_dir.display(),
        settings.chunk_size
    );
    Ok(settings)
}

/// The full command layout of the Puppet extension.
pub fn registrations() -> Vec<Registration> {
    vec![
        Registration {
            path: paths::CONSUMER,
            commands: vec![
                CommandSpec::new("bind", "binds a consumer to a repository"),
                CommandSpec::new(
                    "unbind",
                    "removes the binding between a consumer and a repository",
                ),
            ],
        },
        Registration {
            path: paths::CONSUMER_INSTALL,
            commands: vec![content_command(INSTALL_ACTION)],
        },
        Registration {
            path: paths::CONSUMER_INSTALL_SCHEDULES,
            commands: consumer_schedule_commands(INSTALL_ACTION),
        },
        Registration {
            path: paths::CONSUMER_UPDATE,
            commands: vec![content_command(UPDATE_ACTION)],
        },
        Registration {
            path: paths::CONSUMER_UPDATE_SCHEDULES,
            commands: consumer_schedule_commands(UPDATE_ACTION),
        },
        Registration {
            path: paths::CONSUMER_UNINSTALL,
            commands: vec![content_command(UNINSTALL_ACTION)],
        },
        Registration {
            path: paths::CONSUMER_UNINSTALL_SCHEDULES,
            commands: consumer_schedule_commands(UNINSTALL_ACTION),
        },
        Registration {
            path: paths::REPO_PUBLISH,
            commands: task_commands(PUBLISH_ACTION),
        },
        Registration {
            path: paths::REPO_PUBLISH_SCHEDULES,
            commands: repo_schedule_commands(PUBLISH_ACTION),
        },
        Registration {
            path: paths::REPO,
            commands: vec![
                CommandSpec::new("create", "creates a new repository"),
                CommandSpec::new("update", "changes metadata on an existing repository"),
                CommandSpec::new("delete", "deletes a repository"),
                CommandSpec::new("list", "lists repositories on the Pulp server"),
                CommandSpec::new("search", "searches for repositories on the server"),
                CommandSpec::new(
                    "remove",
                    "remove copied or uploaded modules from a repository",
                ),
                CommandSpec::new("modules", "search for modules in a repository"),
                CommandSpec::new("copy", "copies modules from one repository into another"),
            ],
        },
        Registration {
            path: paths::REPO_SYNC,
            commands: task_commands(SYNC_ACTION),
        },
        Registration {
            path: paths::REPO_SYNC_SCHEDULES,
            commands: repo_schedule_commands(SYNC_ACTION),
        },
        Registration {
            path: paths::REPO_UPLOADS,
            commands: vec![
                CommandSpec::new("upload", "uploads one or more modules into a repository"),
                CommandSpec::new("list", "lists in progress and paused uploads"),
                CommandSpec::new("cancel", "cancels an outstanding upload request"),
                CommandSpec::new("resume", "resume paused uploads"),
            ],
        },
    ]
}

fn content_command(action: &str) -> CommandSpec {
    let description = format!("triggers an immediate module {action} on a consumer");
    CommandSpec::new("run", description)
}

fn consumer_schedule_commands(action: &str) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("create", format!("adds a new scheduled {action} operation")),
        CommandSpec::new("delete", format!("delete a {action} schedule")),
        CommandSpec::new("list", format!("lists schedules for {action} operations")),
        CommandSpec::new(
            "next",
            format!("displays the next scheduled {action} operation"),
        ),
        CommandSpec::new("update", format!("updates an existing {action} schedule")),
    ]
}

fn task_commands(action: &str) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "run",
            format!("triggers an immediate {action} of a repository"),
        ),
        CommandSpec::new(
            "status",
            format!("displays the status of a repository's {action} tasks"),
        ),
    ]
}

fn repo_schedule_commands(action: &str) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("create", format!("adds a new scheduled {action} operation")),
        CommandSpec::new("update", format!("updates an existing {action} schedule")),
        CommandSpec::new("delete", format!("delete a {action} schedule")),
        CommandSpec::new("list", format!("lists schedules for {action} operations")),
        CommandSpec::new(
            "next",
            format!("displays the next scheduled {action} operation"),
        ),
    ]
}
