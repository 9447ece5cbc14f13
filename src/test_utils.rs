//! Shared test utilities for parse and resolve tests.

use clap::{CommandFactory, FromArgMatches};
use rstest::fixture;

use crate::cli::Cli;
use crate::config::Defaults;
use crate::error::ResolveError;
use crate::namespace::Namespace;
use crate::resolver::{ResolveContext, Resolver};
use crate::subscription::StaticSubscription;
use crate::table::CommandTable;

/// Subscription returned by the stub provider.
pub const SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000000";

/// Parse `argv` with the real command tree and extract the innermost
/// subcommand's arguments.
pub fn parse_leaf<T: FromArgMatches>(argv: &[&str]) -> Result<T, clap::Error> {
    let matches = Cli::command().try_get_matches_from(argv)?;
    let mut leaf = &matches;
    while let Some((_, sub)) = leaf.subcommand() {
        leaf = sub;
    }
    T::from_arg_matches(leaf)
}

/// Everything a resolver needs, with a stubbed subscription.
pub struct ResolverEnv {
    pub table: CommandTable,
    pub defaults: Defaults,
    pub subscriptions: StaticSubscription,
}

impl ResolverEnv {
    pub fn new() -> Self {
        Self {
            table: CommandTable::build(),
            defaults: Defaults::default(),
            subscriptions: StaticSubscription::new(SUBSCRIPTION),
        }
    }

    pub fn with_default_group(group: &str) -> Self {
        Self {
            defaults: Defaults {
                resource_group: Some(group.to_string()),
            },
            ..Self::new()
        }
    }

    /// Resolve `command` with whitespace-separated `args`.
    pub fn resolve(&self, command: &str, args: &str) -> Result<Namespace, ResolveError> {
        let context = ResolveContext::new(&self.defaults, &self.subscriptions);
        Resolver::new(&self.table, context).resolve(command, args.split_whitespace())
    }

    /// Resolve `command` with `args` passed through verbatim.
    pub fn resolve_args(&self, command: &str, args: &[&str]) -> Result<Namespace, ResolveError> {
        let context = ResolveContext::new(&self.defaults, &self.subscriptions);
        Resolver::new(&self.table, context).resolve(command, args.iter().copied())
    }
}

/// Resolver environment with no configured defaults.
#[fixture]
pub fn resolver_env() -> ResolverEnv {
    ResolverEnv::new()
}
