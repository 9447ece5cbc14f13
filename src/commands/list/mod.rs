mod output;
mod validate;

pub use validate::VmListNamespace;

use clap::builder::NonEmptyStringValueParser;
use clap::Args;

/// List virtual machines
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  vm_cli vm list                 # Every VM in the subscription
  vm_cli vm list -g my-group     # Only VMs in one resource group")]
pub struct VmListCmd {
    /// Only list VMs in this resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,

    /// Include instance view details
    #[arg(short = 'd', long, default_value_t = false)]
    pub show_details: bool,
}
