//! # CLI Section Tree
//!
//! The admin client organizes its commands in a tree of named sections. The
//! client framework owns that tree; extensions only navigate it and add to it.
//! This module models the capabilities an extension needs as two traits:
//!
//! - [`Section`]: a named, described node that can look up and create child
//!   sections and carry command descriptors.
//! - [`SectionTree`]: the CLI itself, exposing its root section.
//!
//! [`PulpCli`] and [`CliSection`] are the in-memory implementation used by
//! the `pulp-puppet` binary and by tests.

use crate::error::{Error, Result};

/// A command attached to a section.
///
/// Only the descriptor is modelled here; running the command belongs to the
/// client framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A node in the CLI section tree.
pub trait Section {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Returns the direct child with the given name, if any.
    fn find_subsection(&self, name: &str) -> Option<&Self>;

    /// Mutable variant of [`Section::find_subsection`].
    fn find_subsection_mut(&mut self, name: &str) -> Option<&mut Self>;

    /// Creates a direct child and returns it.
    ///
    /// Fails with [`Error::DuplicateSection`] if a child with that name is
    /// already present.
    fn create_subsection(&mut self, name: &str, description: &str) -> Result<&mut Self>;

    /// Attaches a command descriptor to this section.
    fn add_command(&mut self, command: CommandSpec) -> Result<()>;
}

/// The CLI whose section tree extensions populate.
pub trait SectionTree {
    type Section: Section;

    fn root_section(&self) -> &Self::Section;

    fn root_section_mut(&mut self) -> &mut Self::Section;
}

/// In-memory section with ordered children and commands.
#[derive(Debug, Clone, Default)]
pub struct CliSection {
    name: String,
    description: String,
    subsections: Vec<CliSection>,
    commands: Vec<CommandSpec>,
}

impl CliSection {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subsections: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Child sections in creation order.
    pub fn subsections(&self) -> &[CliSection] {
        &self.subsections
    }

    /// Commands in registration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn find_command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Number of sections below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.subsections
            .iter()
            .map(|s| 1 + s.descendant_count())
            .sum()
    }
}

impl Section for CliSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn find_subsection(&self, name: &str) -> Option<&Self> {
        self.subsections.iter().find(|s| s.name == name)
    }

    fn find_subsection_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.subsections.iter_mut().find(|s| s.name == name)
    }

    fn create_subsection(&mut self, name: &str, description: &str) -> Result<&mut Self> {
        if self.find_subsection(name).is_some() {
            return Err(Error::DuplicateSection {
                parent: self.name.clone(),
                name: name.to_string(),
            });
        }
        self.subsections.push(CliSection::new(name, description));
        let index = self.subsections.len() - 1;
        Ok(&mut self.subsections[index])
    }

    fn add_command(&mut self, command: CommandSpec) -> Result<()> {
        if self.find_command(&command.name).is_some() {
            return Err(Error::DuplicateCommand {
                section: self.name.clone(),
                name: command.name,
            });
        }
        self.commands.push(command);
        Ok(())
    }
}

/// In-memory CLI. The root section is unnamed and holds the top-level
/// sections of every installed extension.
#[derive(Debug, Clone, Default)]
pub struct PulpCli {
    root: CliSection,
}

impl PulpCli {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SectionTree for PulpCli {
    type Section = CliSection;

    fn root_section(&self) -> &CliSection {
        &self.root
    }

    fn root_section_mut(&mut self) -> &mut CliSection {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find_subsection() {
        let mut root = CliSection::new("", "");
        let created = root.create_subsection("repo", "repo commands").unwrap();
        assert_eq!(created.name(), "repo");
        assert_eq!(created.description(), "repo commands");

        let found = root.find_subsection("repo").unwrap();
        assert_eq!(found.name(), "repo");
        assert!(root.find_subsection("consumer").is_none());
    }

    #[test]
    fn test_create_duplicate_subsection_fails() {
        let mut root = CliSection::new("puppet", "");
        root.create_subsection("repo", "first").unwrap();
        let err = root.create_subsection("repo", "second").unwrap_err();
        assert!(matches!(err, Error::DuplicateSection { .. }));
        assert_eq!(root.subsections().len(), 1);
        assert_eq!(root.find_subsection("repo").unwrap().description(), "first");
    }

    #[test]
    fn test_subsections_keep_creation_order() {
        let mut root = CliSection::new("repo", "");
        for name in ["uploads", "sync", "publish"] {
            root.create_subsection(name, "").unwrap();
        }
        let names: Vec<&str> = root.subsections().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["uploads", "sync", "publish"]);
    }

    #[test]
    fn test_add_command_rejects_duplicates() {
        let mut section = CliSection::new("sync", "");
        section.add_command(CommandSpec::new("run", "")).unwrap();
        section.add_command(CommandSpec::new("status", "")).unwrap();
        let duplicate = CommandSpec::new("run", "");
        let err = section.add_command(duplicate).unwrap_err();
        assert!(matches!(err, Error::DuplicateCommand { .. }));
        assert_eq!(section.commands().len(), 2);
        assert!(section.find_command("status").is_some());
    }

    #[test]
    fn test_descendant_count() {
        let mut root = CliSection::new("", "");
        let repo = root.create_subsection("repo", "").unwrap();
        let sync = repo.create_subsection("sync", "").unwrap();
        sync.create_subsection("schedules", "").unwrap();
        assert_eq!(root.descendant_count(), 3);
    }

    #[test]
    fn test_pulp_cli_root_is_empty() {
        let cli = PulpCli::new();
        assert_eq!(cli.root_section().name(), "");
        assert!(cli.root_section().subsections().is_empty());
    }
}
