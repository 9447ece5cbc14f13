use serde::Serialize;

use super::{VmStartCmd, VmStopCmd};
use crate::commands::{Validate, VmTarget};
use crate::error::ResolveError;
use crate::resolver::ResolveContext;

/// Resolved arguments of `vm start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmStartNamespace {
    #[serde(flatten)]
    pub target: VmTarget,
}

/// Resolved arguments of `vm stop`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmStopNamespace {
    #[serde(flatten)]
    pub target: VmTarget,
    pub skip_shutdown: bool,
}

impl Validate for VmStartCmd {
    type Namespace = VmStartNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(VmStartNamespace {
            target: self.target.resolve(ctx)?,
        })
    }
}

impl Validate for VmStopCmd {
    type Namespace = VmStopNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        Ok(VmStopNamespace {
            target: self.target.resolve(ctx)?,
            skip_shutdown: self.skip_shutdown,
        })
    }
}
