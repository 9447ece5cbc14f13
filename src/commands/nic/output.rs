//! Output formatting for vm nic commands.

use super::validate::{NicListNamespace, NicShowNamespace};
use crate::output::{FieldTable, Outputable};

impl Outputable for NicListNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm nic list")
            .field("resource_group_name", &self.resource_group_name)
            .field("virtual_machine_name", &self.virtual_machine_name)
            .render()
    }
}

impl Outputable for NicShowNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm nic show")
            .field("resource_group_name", &self.resource_group_name)
            .field("virtual_machine_name", &self.virtual_machine_name)
            .field("nic", &self.nic)
            .render()
    }
}
