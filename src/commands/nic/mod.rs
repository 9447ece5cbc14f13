//! Network interfaces attached to a VM: `vm nic list` and `vm nic show`.

mod output;
mod validate;

pub use validate::{NicListNamespace, NicShowNamespace};

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum NicCommand {
    /// List the network interfaces of a VM
    List(NicListCmd),

    /// Show one network interface of a VM
    Show(NicShowCmd),
}

#[derive(Args, Debug)]
pub struct NicListCmd {
    /// Name of the VM
    #[arg(long = "vm-name", value_parser = NonEmptyStringValueParser::new())]
    pub virtual_machine_name: String,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct NicShowCmd {
    /// Name of the VM
    #[arg(long = "vm-name", value_parser = NonEmptyStringValueParser::new())]
    pub virtual_machine_name: String,

    /// Name of the network interface
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub nic: String,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,
}
