//! Output formatting for vm list.

use super::validate::VmListNamespace;
use crate::output::{FieldTable, Outputable};

impl Outputable for VmListNamespace {
    fn to_table(&self) -> String {
        FieldTable::new("vm list")
            .optional("resource_group_name", self.resource_group_name.as_deref())
            .field("show_details", self.show_details)
            .render()
    }
}
