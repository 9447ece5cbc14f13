//! Power state commands: `vm start` and `vm stop`.

mod output;
mod validate;

pub use validate::{VmStartNamespace, VmStopNamespace};

use clap::Args;

use super::VmTargetArgs;

/// Start a stopped virtual machine
#[derive(Args, Debug)]
pub struct VmStartCmd {
    #[command(flatten)]
    pub target: VmTargetArgs,
}

/// Power off a running virtual machine
#[derive(Args, Debug)]
pub struct VmStopCmd {
    #[command(flatten)]
    pub target: VmTargetArgs,

    /// Power off without shutting down the operating system
    #[arg(long, default_value_t = false)]
    pub skip_shutdown: bool,
}
