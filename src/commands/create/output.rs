//! Output formatting for vm create.

use super::validate::VmCreateNamespace;
use crate::output::{FieldTable, Outputable};

impl Outputable for VmCreateNamespace {
    fn to_table(&self) -> String {
        let mut table = FieldTable::new("vm create")
            .field("name", &self.name)
            .field("resource_group_name", &self.resource_group_name)
            .field("image", &self.image)
            .field("size", &self.size)
            .optional("location", self.location.as_deref())
            .field("admin_username", &self.admin_username);

        for nic in &self.nics {
            let key = if nic.properties.primary { "nic (primary)" } else { "nic" };
            table = table.field(key, &nic.id);
        }

        table.render()
    }
}
