use serde::Serialize;

use super::VmListCmd;
use crate::commands::Validate;
use crate::error::ResolveError;
use crate::resolver::ResolveContext;

/// Resolved arguments of `vm list`
///
/// A missing resource group means "no filter"; configured defaults do not
/// narrow a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmListNamespace {
    pub resource_group_name: Option<String>,
    pub show_details: bool,
}

impl Validate for VmListCmd {
    type Namespace = VmListNamespace;

    fn validate(self, _ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(VmListNamespace {
            resource_group_name: self.resource_group_name,
            show_details: self.show_details,
        })
    }
}
