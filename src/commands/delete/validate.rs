use serde::Serialize;

use super::VmDeleteCmd;
use crate::commands::{Validate, VmTarget};
use crate::error::ResolveError;
use crate::resolver::ResolveContext;

/// Resolved arguments of `vm delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmDeleteNamespace {
    #[serde(flatten)]
    pub target: VmTarget,
    pub yes: bool,
}

impl Validate for VmDeleteCmd {
    type Namespace = VmDeleteNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(VmDeleteNamespace {
            target: self.target.resolve(ctx)?,
            yes: self.yes,
        })
    }
}
