//! The typed result of resolving one invocation.

use serde::Serialize;

use crate::commands::{
    DiskAttachNamespace, DiskDetachNamespace, NicListNamespace, NicShowNamespace,
    VmCreateNamespace, VmDeleteNamespace, VmListNamespace, VmShowNamespace, VmStartNamespace,
    VmStopNamespace,
};
use crate::output::{OutputFormat, Outputable};

/// One variant per command; serializes as the bare command namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Namespace {
    VmCreate(VmCreateNamespace),
    VmShow(VmShowNamespace),
    VmList(VmListNamespace),
    VmDelete(VmDeleteNamespace),
    VmStart(VmStartNamespace),
    VmStop(VmStopNamespace),
    NicList(NicListNamespace),
    NicShow(NicShowNamespace),
    DiskAttach(DiskAttachNamespace),
    DiskDetach(DiskDetachNamespace),
}

impl Namespace {
    /// Full name of the command this namespace belongs to.
    pub fn command_name(&self) -> &'static str {
        match self {
            Namespace::VmCreate(_) => "vm create",
            Namespace::VmShow(_) => "vm show",
            Namespace::VmList(_) => "vm list",
            Namespace::VmDelete(_) => "vm delete",
            Namespace::VmStart(_) => "vm start",
            Namespace::VmStop(_) => "vm stop",
            Namespace::NicList(_) => "vm nic list",
            Namespace::NicShow(_) => "vm nic show",
            Namespace::DiskAttach(_) => "vm disk attach",
            Namespace::DiskDetach(_) => "vm disk detach",
        }
    }
}

impl Outputable for Namespace {
    fn to_table(&self) -> String {
        match self {
            Namespace::VmCreate(ns) => ns.to_table(),
            Namespace::VmShow(ns) => ns.to_table(),
            Namespace::VmList(ns) => ns.to_table(),
            Namespace::VmDelete(ns) => ns.to_table(),
            Namespace::VmStart(ns) => ns.to_table(),
            Namespace::VmStop(ns) => ns.to_table(),
            Namespace::NicList(ns) => ns.to_table(),
            Namespace::NicShow(ns) => ns.to_table(),
            Namespace::DiskAttach(ns) => ns.to_table(),
            Namespace::DiskDetach(ns) => ns.to_table(),
        }
    }
}

/// The default command handler: renders the namespace instead of calling a
/// backend.
pub fn echo(namespace: &Namespace, format: OutputFormat) -> String {
    tracing::debug!(command = namespace.command_name(), "echoing namespace");
    namespace.format(format)
}
