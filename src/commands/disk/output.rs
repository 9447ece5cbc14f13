//! Output formatting for vm disk commands.

use super::validate::{DiskAttachNamespace, DiskDetachNamespace};
use crate::output::{FieldTable, Outputable};

impl Outputable for DiskAttachNamespace {
    fn to_table(&self) -> String {
        let lun = self.lun.map(|lun| lun.to_string());
        FieldTable::new("vm disk attach")
            .field("resource_group_name", &self.resource_group_name)
            .field("virtual_machine_name", &self.virtual_machine_name)
            .field("disk_id", &self.disk_id)
            .optional("lun", lun.as_deref())
            .render()
    }
}

impl Outputable for DiskDetachNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm disk detach")
            .field("resource_group_name", &self.resource_group_name)
            .field("virtual_machine_name", &self.virtual_machine_name)
            .field("disk_name", &self.disk_name)
            .render()
    }
}
