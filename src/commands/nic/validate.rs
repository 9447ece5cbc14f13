use serde::Serialize;

use super::{NicListCmd, NicShowCmd};
use crate::commands::Validate;
use crate::error::ResolveError;
use crate::resolver::ResolveContext;

/// Resolved arguments of `vm nic list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicListNamespace {
    pub resource_group_name: String,
    pub virtual_machine_name: String,
}

/// Resolved arguments of `vm nic show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicShowNamespace {
    pub resource_group_name: String,
    pub virtual_machine_name: String,
    pub nic: String,
}

impl Validate for NicListCmd {
    type Namespace = NicListNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(NicListNamespace {
            resource_group_name: ctx
                .resource_group(self.resource_group_name, &self.virtual_machine_name)?,
            virtual_machine_name: self.virtual_machine_name,
        })
    }
}

impl Validate for NicShowCmd {
    type Namespace = NicShowNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(NicShowNamespace {
            resource_group_name: ctx
                .resource_group(self.resource_group_name, &self.virtual_machine_name)?,
            virtual_machine_name: self.virtual_machine_name,
            nic: self.nic,
        })
    }
}
