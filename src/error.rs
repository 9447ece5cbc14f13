//! Errors raised while resolving a command invocation.
//!
//! Every variant ends the invocation: nothing is retried and no partial
//! namespace is ever returned.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for usage errors, matching clap's own.
pub const USAGE_EXIT_CODE: i32 = 2;
/// Exit status for failures in the surrounding environment.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("'{name}' is not a known command")]
    UnknownCommand { name: String },

    #[error("the following arguments are required: {argument}")]
    MissingRequiredArgument { argument: String },

    #[error("unrecognized argument: {argument}")]
    UnknownArgument { argument: String },

    #[error("invalid value '{value}' for {argument}")]
    MalformedFlagValue { argument: String, value: String },

    #[error("{argument} cannot be used with {other}")]
    ConflictingArguments { argument: String, other: String },

    #[error(
        "a resource group is required for '{name}': pass --resource-group or a full resource ID, \
         or configure a default resource group"
    )]
    UnresolvableResourceGroup { name: String },

    #[error("no subscription is configured")]
    SubscriptionUnavailable,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Help, version, and bare command groups; clap renders these itself.
    #[error(transparent)]
    Usage(clap::Error),
}

impl ResolveError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SubscriptionUnavailable | Self::Config(_) => FAILURE_EXIT_CODE,
            Self::Usage(err) => err.exit_code(),
            _ => USAGE_EXIT_CODE,
        }
    }

    /// Terminate the process with this error.
    pub fn exit(self) -> ! {
        match self {
            Self::Usage(err) => err.exit(),
            err => {
                tracing::debug!(error = ?err, "invocation failed");
                eprintln!("error: {}", err);
                std::process::exit(err.exit_code())
            }
        }
    }
}

impl From<clap::Error> for ResolveError {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::MissingRequiredArgument => Self::MissingRequiredArgument {
                argument: context_string(&err, ContextKind::InvalidArg),
            },
            ErrorKind::UnknownArgument => Self::UnknownArgument {
                argument: context_string(&err, ContextKind::InvalidArg),
            },
            ErrorKind::InvalidValue
            | ErrorKind::ValueValidation
            | ErrorKind::InvalidUtf8
            | ErrorKind::NoEquals
            | ErrorKind::TooManyValues
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues => Self::MalformedFlagValue {
                argument: context_string(&err, ContextKind::InvalidArg),
                value: context_string(&err, ContextKind::InvalidValue),
            },
            ErrorKind::ArgumentConflict => Self::ConflictingArguments {
                argument: context_string(&err, ContextKind::InvalidArg),
                other: context_string(&err, ContextKind::PriorArg),
            },
            ErrorKind::InvalidSubcommand => Self::UnknownCommand {
                name: context_string(&err, ContextKind::InvalidSubcommand),
            },
            _ => Self::Usage(err),
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(value)) => value.clone(),
        Some(ContextValue::Strings(values)) => values.join(", "),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
