//! Output formatting for vm delete.

use super::validate::VmDeleteNamespace;
use crate::output::{FieldTable, Outputable};

impl Outputable for VmDeleteNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm delete")
            .field("resource_group_name", &self.target.resource_group_name)
            .field("vm_name", &self.target.vm_name)
            .field("yes", self.yes)
            .render()
    }
}
