//! The command table.
//!
//! The table is the clap command tree derived from [`Cli`](crate::cli::Cli),
//! built once and read-only afterwards. Commands are addressed by their full
//! space-separated name, e.g. `vm nic list`.

use clap::{Arg, ArgAction, Command, CommandFactory};

use crate::cli::Cli;

pub struct CommandTable {
    root: Command,
}

impl CommandTable {
    /// Build the table for the VM command family.
    pub fn build() -> Self {
        Self::new(Cli::command())
    }

    /// Wrap an arbitrary command tree.
    ///
    /// Such a table supports lookup and the consistency check. Only a table
    /// from [`CommandTable::build`] can back a
    /// [`Resolver`](crate::resolver::Resolver), which decodes matches into
    /// [`Cli`].
    pub fn new(root: Command) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Find the leaf command called `name`.
    ///
    /// Command groups (such as `vm nic`) are not commands on their own and
    /// yield `None`, as do empty and unknown names.
    pub fn lookup(&self, name: &str) -> Option<CommandDefinition<'_>> {
        let mut words = name.split_whitespace().peekable();
        words.peek()?;

        let mut current = &self.root;
        let mut path = Vec::new();
        for word in words {
            current = current.find_subcommand(word)?;
            path.push(current.get_name());
        }

        if current.has_subcommands() {
            return None;
        }

        Some(CommandDefinition {
            name: path.join(" "),
            command: current,
        })
    }

    /// Every leaf command in the table, in declaration order.
    pub fn commands(&self) -> Vec<CommandDefinition<'_>> {
        let mut commands = Vec::new();
        collect_leaves(&self.root, &mut Vec::new(), &mut commands);
        commands
    }
}

fn collect_leaves<'a>(
    command: &'a Command,
    path: &mut Vec<&'a str>,
    out: &mut Vec<CommandDefinition<'a>>,
) {
    for sub in command.get_subcommands() {
        path.push(sub.get_name());
        if sub.has_subcommands() {
            collect_leaves(sub, path, out);
        } else {
            out.push(CommandDefinition {
                name: path.join(" "),
                command: sub,
            });
        }
        path.pop();
    }
}

/// A single invocable command.
#[derive(Debug, Clone)]
pub struct CommandDefinition<'a> {
    name: String,
    command: &'a Command,
}

impl<'a> CommandDefinition<'a> {
    /// Full space-separated command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &'a Command {
        self.command
    }

    /// Flag arguments accepted by this command.
    pub fn arguments(&self) -> impl Iterator<Item = ArgumentSpec> + 'a {
        let command: &'a Command = self.command;
        command
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .filter(|arg| !matches!(arg.get_action(), ArgAction::Help | ArgAction::Version))
            .map(ArgumentSpec::from_arg)
    }

    pub fn argument(&self, name: &str) -> Option<ArgumentSpec> {
        self.arguments().find(|spec| spec.name == name)
    }
}

/// Declarative description of one flag argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Canonical argument name, the field it lands in
    pub name: String,
    /// Accepted spellings: long form first, then long aliases, then short form
    pub options_list: Vec<String>,
    pub required: bool,
    pub default: Option<String>,
}

impl ArgumentSpec {
    fn from_arg(arg: &Arg) -> Self {
        let mut options_list = Vec::new();
        if let Some(long) = arg.get_long() {
            options_list.push(format!("--{}", long));
        }
        if let Some(aliases) = arg.get_visible_aliases() {
            options_list.extend(aliases.into_iter().map(|alias| format!("--{}", alias)));
        }
        if let Some(short) = arg.get_short() {
            options_list.push(format!("-{}", short));
        }

        let default = arg
            .get_default_values()
            .first()
            .map(|value| value.to_string_lossy().into_owned());

        Self {
            name: arg.get_id().as_str().to_string(),
            options_list,
            required: arg.is_required_set(),
            default,
        }
    }

    pub fn options(&self) -> Vec<&str> {
        self.options_list.iter().map(String::as_str).collect()
    }
}
