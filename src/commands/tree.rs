//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which loads the Puppet
//! extension into an in-memory admin CLI and displays the resulting section
//! hierarchy.
//!
//! ## Functionality
//!
//! - **Section Tree Visualization**: every Puppet section with its description
//! - **Depth Control**: `--depth` limits how many levels below the root are shown
//! - **Commands**: `--commands` also lists the commands attached to each section
//!
//! This command is a safe, read-only operation.

use anyhow::{Context, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::path::PathBuf;

use pulp_puppet::defaults::CLIENT_CONFIG_ENV;
use pulp_puppet::output::{OutputConfig, Status};
use pulp_puppet::section::{CliSection, Section};
use pulp_puppet::structure::{self, paths};

/// Display the Puppet section tree of the admin client
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Admin client configuration file (INI).
    ///
    /// Defaults to `~/.pulp/admin.conf` when it exists.
    #[arg(long, value_name = "FILE", env = CLIENT_CONFIG_ENV)]
    pub client_config: Option<PathBuf>,

    /// Maximum depth to display below the root section.
    ///
    /// Use 0 to show only the root, 1 for the topics, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// Also list the commands registered in each section.
    #[arg(long)]
    pub commands: bool,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let (cli, settings) = super::load_extension(args.client_config.as_deref())?;

    let Some(root) = structure::find_section(&cli, paths::ROOT) else {
        anyhow::bail!("Puppet root section missing after initialization");
    };

    let max_depth = args.depth.unwrap_or(usize::MAX);
    let tree = build_tree_node(root, max_depth, 0, args.commands);
    print_tree(&tree).context("Failed to display tree")?;

    println!(
        "{}",
        out.line(
            Status::Info,
            &format!(
                "Uploads staged in {} ({} byte chunks)",
                settings.working_dir.display(),
                settings.chunk_size
            )
        )
    );
    Ok(())
}

/// Build a display node from a section
fn build_tree_node(
    section: &CliSection,
    max_depth: usize,
    current_depth: usize,
    with_commands: bool,
) -> TreeNode {
    let label = format!("{} - {}", section.name(), section.description());

    if current_depth >= max_depth {
        return TreeNode {
            label,
            children: vec![],
        };
    }

    let mut children = Vec::new();
    if with_commands {
        for command in section.commands() {
            children.push(TreeNode {
                label: format!("({}) {}", command.name, command.description),
                children: vec![],
            });
        }
    }
    for child in section.subsections() {
        let node = build_tree_node(child, max_depth, current_depth + 1, with_commands);
        children.push(node);
    }

    TreeNode { label, children }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
