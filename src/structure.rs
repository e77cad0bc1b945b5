//! # Puppet Section Structure
//!
//! Creation and navigation of the Puppet branch of the admin CLI. Extensions
//! go through this module instead of creating or looking up sections
//! themselves, so the organization of the commands lives in one place.
//!
//! The branch has a fixed shape, described declaratively by [`STRUCTURE`]:
//!
//! ```text
//! puppet
//! ├── repo
//! │   ├── uploads
//! │   ├── sync      ─ schedules
//! │   └── publish   ─ schedules
//! └── consumer
//!     ├── install   ─ schedules
//!     ├── update    ─ schedules
//!     └── uninstall ─ schedules
//! ```
//!
//! Building is all-or-nothing per topic: once the `consumer` or `repo`
//! section exists, its descendants are assumed to exist too and are not
//! re-checked. The structure is built once at startup in a single pass.
//!
//! ## Example
//!
//! ```
//! use pulp_puppet::section::{PulpCli, Section};
//! use pulp_puppet::structure;
//!
//! let mut cli = PulpCli::new();
//! structure::ensure_repo_structure(&mut cli).unwrap();
//!
//! let schedules = structure::repo_sync_schedules_section(&cli).unwrap();
//! assert_eq!(schedules.name(), structure::SECTION_SYNC_SCHEDULES);
//! assert!(structure::consumer_section(&cli).is_none());
//! ```

use log::debug;

use crate::error::{Error, Result};
use crate::section::{Section, SectionTree};

// -- names -------------------------------------------------------------------

/// Root section all Puppet functionality is located under.
pub const SECTION_ROOT: &str = "puppet";

pub const SECTION_CONSUMER: &str = "consumer";
pub const SECTION_REPO: &str = "repo";

pub const SECTION_INSTALL: &str = "install";
pub const SECTION_INSTALL_SCHEDULES: &str = "schedules";
pub const SECTION_UPDATE: &str = "update";
pub const SECTION_UPDATE_SCHEDULES: &str = "schedules";
pub const SECTION_UNINSTALL: &str = "uninstall";
pub const SECTION_UNINSTALL_SCHEDULES: &str = "schedules";

pub const SECTION_UPLOADS: &str = "uploads";

pub const SECTION_SYNC: &str = "sync";
pub const SECTION_SYNC_SCHEDULES: &str = "schedules";
pub const SECTION_PUBLISH: &str = "publish";
pub const SECTION_PUBLISH_SCHEDULES: &str = "schedules";

pub const DESC_ROOT: &str = "manage Puppet-related content and features";
pub const DESC_CONSUMER: &str = "consumer commands";
pub const DESC_REPO: &str = "repository lifecycle commands";

pub const DESC_INSTALL: &str = "run or schedule a module install";
pub const DESC_INSTALL_SCHEDULES: &str = "manage puppet module installation schedules";
pub const DESC_UPDATE: &str = "run or schedule a module update";
pub const DESC_UPDATE_SCHEDULES: &str = "manage puppet module update schedules";
pub const DESC_UNINSTALL: &str = "run or schedule a module uninstall";
pub const DESC_UNINSTALL_SCHEDULES: &str = "manage puppet module uninstall schedules";

pub const DESC_UPLOADS: &str = "upload modules into a repository";

pub const DESC_SYNC: &str = "run, schedule, or view the status of sync tasks";
pub const DESC_SYNC_SCHEDULES: &str = "manage repository sync schedules";
pub const DESC_PUBLISH: &str = "run, schedule, or view the status of publish tasks";
pub const DESC_PUBLISH_SCHEDULES: &str = "manage repository publish schedules";

// -- shape -------------------------------------------------------------------

/// Declarative description of a section and everything below it.
#[derive(Debug)]
pub struct SectionShape {
    pub name: &'static str,
    pub description: &'static str,
    pub children: &'static [SectionShape],
}

impl SectionShape {
    const fn leaf(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            children: &[],
        }
    }
}

const CONSUMER_SHAPE: SectionShape = SectionShape {
    name: SECTION_CONSUMER,
    description: DESC_CONSUMER,
    children: &[
        SectionShape {
            name: SECTION_INSTALL,
            description: DESC_INSTALL,
            children: &[SectionShape::leaf(
                SECTION_INSTALL_SCHEDULES,
                DESC_INSTALL_SCHEDULES,
            )],
        },
        SectionShape {
            name: SECTION_UPDATE,
            description: DESC_UPDATE,
            children: &[SectionShape::leaf(
                SECTION_UPDATE_SCHEDULES,
                DESC_UPDATE_SCHEDULES,
            )],
        },
        SectionShape {
            name: SECTION_UNINSTALL,
            description: DESC_UNINSTALL,
            children: &[SectionShape::leaf(
                SECTION_UNINSTALL_SCHEDULES,
                DESC_UNINSTALL_SCHEDULES,
            )],
        },
    ],
};

const REPO_SHAPE: SectionShape = SectionShape {
    name: SECTION_REPO,
    description: DESC_REPO,
    children: &[
        SectionShape::leaf(SECTION_UPLOADS, DESC_UPLOADS),
        SectionShape {
            name: SECTION_SYNC,
            description: DESC_SYNC,
            children: &[SectionShape::leaf(
                SECTION_SYNC_SCHEDULES,
                DESC_SYNC_SCHEDULES,
            )],
        },
        SectionShape {
            name: SECTION_PUBLISH,
            description: DESC_PUBLISH,
            children: &[SectionShape::leaf(
                SECTION_PUBLISH_SCHEDULES,
                DESC_PUBLISH_SCHEDULES,
            )],
        },
    ],
};

/// The complete Puppet branch, topics in the order they are built.
pub static STRUCTURE: SectionShape = SectionShape {
    name: SECTION_ROOT,
    description: DESC_ROOT,
    children: &[REPO_SHAPE, CONSUMER_SHAPE],
};

/// Top-level functional areas under the Puppet root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Consumer,
    Repo,
}

impl Topic {
    pub fn shape(self) -> &'static SectionShape {
        match self {
            Topic::Consumer => &CONSUMER_SHAPE,
            Topic::Repo => &REPO_SHAPE,
        }
    }

    pub fn name(self) -> &'static str {
        self.shape().name
    }
}

// -- paths -------------------------------------------------------------------

/// Fixed paths from the CLI root to each Puppet section.
pub mod paths {
    use super::*;

    pub const ROOT: &[&str] = &[SECTION_ROOT];

    pub const CONSUMER: &[&str] = &[SECTION_ROOT, SECTION_CONSUMER];
    pub const CONSUMER_INSTALL: &[&str] = &[SECTION_ROOT, SECTION_CONSUMER, SECTION_INSTALL];
    pub const CONSUMER_INSTALL_SCHEDULES: &[&str] = &[
        SECTION_ROOT,
        SECTION_CONSUMER,
        SECTION_INSTALL,
        SECTION_INSTALL_SCHEDULES,
    ];
    pub const CONSUMER_UPDATE: &[&str] = &[SECTION_ROOT, SECTION_CONSUMER, SECTION_UPDATE];
    pub const CONSUMER_UPDATE_SCHEDULES: &[&str] = &[
        SECTION_ROOT,
        SECTION_CONSUMER,
        SECTION_UPDATE,
        SECTION_UPDATE_SCHEDULES,
    ];
    pub const CONSUMER_UNINSTALL: &[&str] = &[SECTION_ROOT, SECTION_CONSUMER, SECTION_UNINSTALL];
    pub const CONSUMER_UNINSTALL_SCHEDULES: &[&str] = &[
        SECTION_ROOT,
        SECTION_CONSUMER,
        SECTION_UNINSTALL,
        SECTION_UNINSTALL_SCHEDULES,
    ];

    pub const REPO: &[&str] = &[SECTION_ROOT, SECTION_REPO];
    pub const REPO_UPLOADS: &[&str] = &[SECTION_ROOT, SECTION_REPO, SECTION_UPLOADS];
    pub const REPO_SYNC: &[&str] = &[SECTION_ROOT, SECTION_REPO, SECTION_SYNC];
    pub const REPO_SYNC_SCHEDULES: &[&str] = &[
        SECTION_ROOT,
        SECTION_REPO,
        SECTION_SYNC,
        SECTION_SYNC_SCHEDULES,
    ];
    pub const REPO_PUBLISH: &[&str] = &[SECTION_ROOT, SECTION_REPO, SECTION_PUBLISH];
    pub const REPO_PUBLISH_SCHEDULES: &[&str] = &[
        SECTION_ROOT,
        SECTION_REPO,
        SECTION_PUBLISH,
        SECTION_PUBLISH_SCHEDULES,
    ];
}

// -- creation ----------------------------------------------------------------

/// Verifies that the root of the Puppet commands exists in the CLI, creating
/// it if it does not.
pub fn ensure_puppet_root<T: SectionTree>(cli: &mut T) -> Result<&mut T::Section> {
    let cli_root = cli.root_section_mut();
    if cli_root.find_subsection(SECTION_ROOT).is_none() {
        debug!("Adding section '{}'", SECTION_ROOT);
        return cli_root.create_subsection(SECTION_ROOT, DESC_ROOT);
    }
    existing(cli_root, SECTION_ROOT)
}

/// Verifies that the topic section and all of its subsections are present,
/// creating the whole subtree if the topic section is missing.
///
/// If the topic section already exists it is returned as-is; its
/// descendants are not checked.
pub fn ensure_subtree<T: SectionTree>(cli: &mut T, topic: Topic) -> Result<&mut T::Section> {
    let root = ensure_puppet_root(cli)?;
    ensure_shape(root, topic.shape())
}

pub fn ensure_consumer_structure<T: SectionTree>(cli: &mut T) -> Result<&mut T::Section> {
    ensure_subtree(cli, Topic::Consumer)
}

pub fn ensure_repo_structure<T: SectionTree>(cli: &mut T) -> Result<&mut T::Section> {
    ensure_subtree(cli, Topic::Repo)
}

fn ensure_shape<'a, S: Section>(parent: &'a mut S, shape: &SectionShape) -> Result<&'a mut S> {
    if parent.find_subsection(shape.name).is_some() {
        return existing(parent, shape.name);
    }

    debug!("Adding section '{}' to '{}'", shape.name, parent.name());
    let section = parent.create_subsection(shape.name, shape.description)?;
    create_children(section, shape.children)?;
    Ok(section)
}

fn create_children<S: Section>(section: &mut S, children: &[SectionShape]) -> Result<()> {
    for child in children {
        debug!("Adding section '{}' to '{}'", child.name, section.name());
        let created = section.create_subsection(child.name, child.description)?;
        create_children(created, child.children)?;
    }
    Ok(())
}

fn existing<'a, S: Section>(parent: &'a mut S, name: &str) -> Result<&'a mut S> {
    parent
        .find_subsection_mut(name)
        .ok_or_else(|| Error::SectionNotFound {
            path: name.to_string(),
        })
}

// -- section retrieval -------------------------------------------------------

/// Follows `path` from the CLI root and returns the section at its end, or
/// `None` if any segment along the way is missing.
pub fn find_section<'a, T: SectionTree>(cli: &'a T, path: &[&str]) -> Option<&'a T::Section> {
    let mut section = cli.root_section();
    for name in path {
        section = section.find_subsection(name)?;
    }
    Some(section)
}

/// Mutable variant of [`find_section`], used when attaching commands.
pub fn find_section_mut<'a, T: SectionTree>(
    cli: &'a mut T,
    path: &[&str],
) -> Option<&'a mut T::Section> {
    let mut section = cli.root_section_mut();
    for name in path {
        section = section.find_subsection_mut(name)?;
    }
    Some(section)
}

pub fn consumer_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER)
}

pub fn consumer_install_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_INSTALL)
}

pub fn consumer_install_schedules_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_INSTALL_SCHEDULES)
}

pub fn consumer_update_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_UPDATE)
}

pub fn consumer_update_schedules_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_UPDATE_SCHEDULES)
}

pub fn consumer_uninstall_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_UNINSTALL)
}

pub fn consumer_uninstall_schedules_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::CONSUMER_UNINSTALL_SCHEDULES)
}

pub fn repo_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO)
}

pub fn repo_uploads_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO_UPLOADS)
}

pub fn repo_sync_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO_SYNC)
}

pub fn repo_sync_schedules_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO_SYNC_SCHEDULES)
}

pub fn repo_publish_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO_PUBLISH)
}

pub fn repo_publish_schedules_section<T: SectionTree>(cli: &T) -> Option<&T::Section> {
    find_section(cli, paths::REPO_PUBLISH_SCHEDULES)
}
