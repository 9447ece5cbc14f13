use serde::Serialize;

use super::{DiskAttachCmd, DiskDetachCmd};
use crate::commands::Validate;
use crate::error::ResolveError;
use crate::resolver::ResolveContext;
use crate::resource_id::{ResourceId, COMPUTE_NAMESPACE, DISKS};
use crate::validators::{resolve_resource_id, ReferenceContext};

/// Resolved arguments of `vm disk attach`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskAttachNamespace {
    pub resource_group_name: String,
    pub virtual_machine_name: String,
    pub disk_id: String,
    pub lun: Option<u32>,
}

/// Resolved arguments of `vm disk detach`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskDetachNamespace {
    pub resource_group_name: String,
    pub virtual_machine_name: String,
    pub disk_name: String,
}

impl Validate for DiskAttachCmd {
    type Namespace = DiskAttachNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        let resource_group_name =
            ctx.resource_group(self.resource_group_name, &self.virtual_machine_name)?;
        let references = ReferenceContext::for_references(
            [self.disk.as_str()],
            &resource_group_name,
            ctx.subscriptions,
        )?;

        Ok(DiskAttachNamespace {
            disk_id: resolve_resource_id(&self.disk, &references, COMPUTE_NAMESPACE, DISKS),
            resource_group_name,
            virtual_machine_name: self.virtual_machine_name,
            lun: self.lun,
        })
    }
}

impl Validate for DiskDetachCmd {
    type Namespace = DiskDetachNamespace;

    // The VM refers to its data disks by name only.
    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        let disk_name = match ResourceId::parse(&self.disk) {
            Some(id) => id.name,
            None => self.disk,
        };

        Ok(DiskDetachNamespace {
            resource_group_name: ctx
                .resource_group(self.resource_group_name, &self.virtual_machine_name)?,
            virtual_machine_name: self.virtual_machine_name,
            disk_name,
        })
    }
}
