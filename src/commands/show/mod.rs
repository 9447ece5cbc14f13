mod cli_tests;
mod output;
mod validate;

pub use validate::VmShowNamespace;

use clap::Args;

use super::VmTargetArgs;

/// Show the details of a virtual machine
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  vm_cli vm show -g my-group -n my-vm       # By name
  vm_cli vm show --id /subscriptions/.../virtualMachines/my-vm
  vm_cli vm show -g my-group -n my-vm -d    # Include power state and IPs")]
pub struct VmShowCmd {
    #[command(flatten)]
    pub target: VmTargetArgs,

    /// Include instance view details
    #[arg(short = 'd', long, default_value_t = false)]
    pub show_details: bool,
}
