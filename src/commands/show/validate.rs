use serde::Serialize;

use super::VmShowCmd;
use crate::commands::{Validate, VmTarget};
use crate::error::ResolveError;
use crate::resolver::ResolveContext;

/// Resolved arguments of `vm show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmShowNamespace {
    #[serde(flatten)]
    pub target: VmTarget,
    pub show_details: bool,
}

impl Validate for VmShowCmd {
    type Namespace = VmShowNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(VmShowNamespace {
            target: self.target.resolve(ctx)?,
            show_details: self.show_details,
        })
    }
}
