//! Command resolution.
//!
//! Turns a command name and its raw arguments into a typed [`Namespace`]:
//! the table is consulted for the command, clap parses the flags, and the
//! command's validator fills in everything derivable (resource groups taken
//! from resource IDs or defaults, short names expanded into IDs).

use clap::FromArgMatches;

use crate::cli::Cli;
use crate::config::Defaults;
use crate::error::ResolveError;
use crate::namespace::Namespace;
use crate::output::OutputFormat;
use crate::subscription::SubscriptionProvider;
use crate::table::CommandTable;

/// Ambient inputs available to command validators.
pub struct ResolveContext<'a> {
    pub defaults: &'a Defaults,
    pub subscriptions: &'a dyn SubscriptionProvider,
}

impl<'a> ResolveContext<'a> {
    pub fn new(defaults: &'a Defaults, subscriptions: &'a dyn SubscriptionProvider) -> Self {
        Self {
            defaults,
            subscriptions,
        }
    }

    /// Resource group for `name`: the explicit value, else the configured default.
    ///
    /// Empty values count as absent.
    pub fn resource_group(
        &self,
        explicit: Option<String>,
        name: &str,
    ) -> Result<String, ResolveError> {
        if let Some(group) = explicit.filter(|group| !group.is_empty()) {
            return Ok(group);
        }
        match self.defaults.resource_group.as_ref().filter(|group| !group.is_empty()) {
            Some(group) => {
                tracing::debug!(resource_group = %group, name, "using default resource group");
                Ok(group.clone())
            }
            None => Err(ResolveError::UnresolvableResourceGroup {
                name: name.to_string(),
            }),
        }
    }
}

/// A fully resolved invocation of the binary.
#[derive(Debug)]
pub struct Invocation {
    pub output: OutputFormat,
    pub namespace: Namespace,
}

pub struct Resolver<'a> {
    table: &'a CommandTable,
    context: ResolveContext<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a CommandTable, context: ResolveContext<'a>) -> Self {
        Self { table, context }
    }

    /// Resolve `argv` against the command called `command_name`.
    ///
    /// # Errors
    ///
    /// Fails with [`ResolveError::UnknownCommand`] if the table has no such
    /// command, and with the matching variant for any parse or validation
    /// failure.
    pub fn resolve<I, T>(&self, command_name: &str, argv: I) -> Result<Namespace, ResolveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let definition =
            self.table
                .lookup(command_name)
                .ok_or_else(|| ResolveError::UnknownCommand {
                    name: command_name.to_string(),
                })?;

        let mut full: Vec<String> = vec![self.table.root().get_name().to_string()];
        full.extend(definition.name().split(' ').map(str::to_string));
        full.extend(argv.into_iter().map(Into::into));

        Ok(self.resolve_argv(full)?.namespace)
    }

    /// Resolve a complete command line, program name included.
    ///
    /// The table must have the shape of [`Cli`]; see [`CommandTable::new`].
    pub fn resolve_argv<I, T>(&self, argv: I) -> Result<Invocation, ResolveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        tracing::debug!(?argv, "resolving invocation");

        let matches = self.table.root().clone().try_get_matches_from(argv)?;
        let cli = Cli::from_arg_matches(&matches)?;

        let namespace = cli.command.validate(&self.context)?;
        tracing::debug!(?namespace, "resolved namespace");

        Ok(Invocation {
            output: cli.output,
            namespace,
        })
    }
}
