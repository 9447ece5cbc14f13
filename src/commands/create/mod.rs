mod output;
mod validate;

pub use validate::VmCreateNamespace;

use clap::builder::NonEmptyStringValueParser;
use clap::Args;

/// Create a virtual machine
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  vm_cli vm create -g my-group -n my-vm --image Ubuntu2204
  vm_cli vm create -g my-group -n my-vm --image Ubuntu2204 --nics nic1 nic2
  vm_cli vm create -n my-vm --image Ubuntu2204 \\
      --nics /subscriptions/.../networkInterfaces/shared-nic")]
pub struct VmCreateCmd {
    /// Name of the VM
    #[arg(short = 'n', long = "name", value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,

    /// Image URN or alias
    #[arg(long)]
    pub image: String,

    /// VM size
    #[arg(long, default_value = "Standard_DS1_v2")]
    pub size: String,

    /// Location; the resource group's location when omitted
    #[arg(short = 'l', long)]
    pub location: Option<String>,

    /// Administrator account name
    #[arg(long, default_value = "azureuser")]
    pub admin_username: String,

    /// Network interfaces, by name or resource ID; the first is primary
    #[arg(long, num_args = 1.., value_parser = NonEmptyStringValueParser::new())]
    pub nics: Vec<String>,
}
