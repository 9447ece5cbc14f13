//! Command definitions and validation.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - A `Validate` implementation producing the command's typed namespace
//! - Table output for that namespace

mod create;
mod delete;
mod disk;
mod list;
mod nic;
mod power;
mod show;
mod target;

pub use create::{VmCreateCmd, VmCreateNamespace};
pub use delete::{VmDeleteCmd, VmDeleteNamespace};
pub use disk::{DiskAttachCmd, DiskAttachNamespace, DiskCommand, DiskDetachCmd, DiskDetachNamespace};
pub use list::{VmListCmd, VmListNamespace};
pub use nic::{NicCommand, NicListCmd, NicListNamespace, NicShowCmd, NicShowNamespace};
pub use power::{VmStartCmd, VmStartNamespace, VmStopCmd, VmStopNamespace};
pub use show::{VmShowCmd, VmShowNamespace};
pub use target::{VmTarget, VmTargetArgs};

use clap::Subcommand;

use crate::error::ResolveError;
use crate::namespace::Namespace;
use crate::resolver::ResolveContext;

/// Trait for turning parsed arguments into a command-specific namespace.
pub trait Validate {
    type Namespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage virtual machines
    #[command(subcommand)]
    Vm(VmCommand),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Subcommand, Debug)]
pub enum VmCommand {
    /// Create a virtual machine
    Create(VmCreateCmd),

    /// Show the details of a virtual machine
    Show(VmShowCmd),

    /// List virtual machines
    List(VmListCmd),

    /// Delete a virtual machine
    Delete(VmDeleteCmd),

    /// Start a stopped virtual machine
    Start(VmStartCmd),

    /// Power off a running virtual machine
    Stop(VmStopCmd),

    /// Manage the network interfaces of a virtual machine
    #[command(subcommand)]
    Nic(NicCommand),

    /// Manage the data disks of a virtual machine
    #[command(subcommand)]
    Disk(DiskCommand),
}

impl Command {
    /// Validate the parsed command into its namespace.
    pub fn validate(self, ctx: &ResolveContext<'_>) -> Result<Namespace, ResolveError> {
        match self {
            Command::Vm(cmd) => cmd.validate(ctx),
            Command::Unknown(args) => Err(ResolveError::UnknownCommand {
                name: args.first().cloned().unwrap_or_default(),
            }),
        }
    }
}

impl VmCommand {
    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Namespace, ResolveError> {
        Ok(match self {
            VmCommand::Create(cmd) => Namespace::VmCreate(cmd.validate(ctx)?),
            VmCommand::Show(cmd) => Namespace::VmShow(cmd.validate(ctx)?),
            VmCommand::List(cmd) => Namespace::VmList(cmd.validate(ctx)?),
            VmCommand::Delete(cmd) => Namespace::VmDelete(cmd.validate(ctx)?),
            VmCommand::Start(cmd) => Namespace::VmStart(cmd.validate(ctx)?),
            VmCommand::Stop(cmd) => Namespace::VmStop(cmd.validate(ctx)?),
            VmCommand::Nic(NicCommand::List(cmd)) => Namespace::NicList(cmd.validate(ctx)?),
            VmCommand::Nic(NicCommand::Show(cmd)) => Namespace::NicShow(cmd.validate(ctx)?),
            VmCommand::Disk(DiskCommand::Attach(cmd)) => Namespace::DiskAttach(cmd.validate(ctx)?),
            VmCommand::Disk(DiskCommand::Detach(cmd)) => Namespace::DiskDetach(cmd.validate(ctx)?),
        })
    }
}
