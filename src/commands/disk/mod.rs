//! Data disks attached to a VM: `vm disk attach` and `vm disk detach`.

mod output;
mod validate;

pub use validate::{DiskAttachNamespace, DiskDetachNamespace};

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum DiskCommand {
    /// Attach a managed disk to a VM
    Attach(DiskAttachCmd),

    /// Detach a managed disk from a VM
    Detach(DiskDetachCmd),
}

#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  vm_cli vm disk attach -g my-group --vm-name my-vm --disk data1 --lun 0
  vm_cli vm disk attach -g my-group --vm-name my-vm --disk /subscriptions/.../disks/shared")]
pub struct DiskAttachCmd {
    /// Name of the VM
    #[arg(long = "vm-name", value_parser = NonEmptyStringValueParser::new())]
    pub virtual_machine_name: String,

    /// Managed disk, by name or resource ID
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub disk: String,

    /// Logical unit number; the first free one when omitted
    #[arg(long)]
    pub lun: Option<u32>,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct DiskDetachCmd {
    /// Name of the VM
    #[arg(long = "vm-name", value_parser = NonEmptyStringValueParser::new())]
    pub virtual_machine_name: String,

    /// Managed disk, by name or resource ID
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub disk: String,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,
}
