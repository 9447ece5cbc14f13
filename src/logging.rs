//! Logging setup for the binary.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "VM_CLI_LOG";

const DEFAULT_FILTER: &str = "vm_cli=warn";

/// Filter from `VM_CLI_LOG`, falling back to warnings only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber. Stdout is reserved for command output.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(console_layer).try_init()
}
