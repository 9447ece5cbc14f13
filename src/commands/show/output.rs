//! Output formatting for vm show.

use super::validate::VmShowNamespace;
use crate::output::{FieldTable, Outputable};

impl Outputable for VmShowNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm show")
            .field("resource_group_name", &self.target.resource_group_name)
            .field("vm_name", &self.target.vm_name)
            .field("show_details", self.show_details)
            .render()
    }
}
