//! Output formatting for vm start and vm stop.

use super::validate::{VmStartNamespace, VmStopNamespace};
use crate::output::{FieldTable, Outputable};

impl Outputable for VmStartNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm start")
            .field("resource_group_name", &self.target.resource_group_name)
            .field("vm_name", &self.target.vm_name)
            .render()
    }
}

impl Outputable for VmStopNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm stop")
            .field("resource_group_name", &self.target.resource_group_name)
            .field("vm_name", &self.target.vm_name)
            .field("skip_shutdown", self.skip_shutdown)
            .render()
    }
}
