mod output;
mod validate;

pub use validate::VmDeleteNamespace;

use clap::Args;

use super::VmTargetArgs;

/// Delete a virtual machine
#[derive(Args, Debug)]
pub struct VmDeleteCmd {
    #[command(flatten)]
    pub target: VmTargetArgs,

    /// Do not prompt for confirmation
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
