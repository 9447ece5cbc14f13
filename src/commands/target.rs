//! Arguments that pick out a single VM.
//!
//! A VM is named either by `--name` plus a resource group, or by `--id`. An
//! `--id` value that is a full resource ID supplies both the resource group
//! and the name; any other `--id` value is taken as a plain VM name.

use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use serde::Serialize;

use crate::error::ResolveError;
use crate::resolver::ResolveContext;
use crate::resource_id::{ResourceId, COMPUTE_NAMESPACE, VIRTUAL_MACHINES};

#[derive(Args, Debug, Clone, PartialEq)]
pub struct VmTargetArgs {
    /// Resource ID of the VM; a plain name also needs a resource group
    #[arg(long, conflicts_with = "vm_name", value_parser = NonEmptyStringValueParser::new())]
    pub id: Option<String>,

    /// Name of the VM
    #[arg(short = 'n', long = "name", required_unless_present = "id", value_parser = NonEmptyStringValueParser::new())]
    pub vm_name: Option<String>,

    /// Name of the resource group
    #[arg(short = 'g', long = "resource-group", value_parser = NonEmptyStringValueParser::new())]
    pub resource_group_name: Option<String>,
}

/// The VM an invocation acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmTarget {
    pub resource_group_name: String,
    pub vm_name: String,
}

impl VmTargetArgs {
    pub fn resolve(self, ctx: &ResolveContext<'_>) -> Result<VmTarget, ResolveError> {
        let name = match (self.id, self.vm_name) {
            (Some(id), _) => match ResourceId::parse(&id) {
                Some(parsed) => return Ok(target_from_id(parsed, self.resource_group_name)),
                None => {
                    tracing::debug!(value = %id, "--id is not a resource ID, using it as a name");
                    id
                }
            },
            (None, Some(name)) => name,
            (None, None) => {
                return Err(ResolveError::MissingRequiredArgument {
                    argument: "--name <VM_NAME>".to_string(),
                });
            }
        };

        Ok(VmTarget {
            resource_group_name: ctx.resource_group(self.resource_group_name, &name)?,
            vm_name: name,
        })
    }
}

fn target_from_id(id: ResourceId, explicit_group: Option<String>) -> VmTarget {
    if !id.is_type(COMPUTE_NAMESPACE, VIRTUAL_MACHINES) {
        tracing::debug!(
            namespace = %id.namespace,
            resource_type = %id.resource_type,
            "--id does not name a virtual machine"
        );
    }
    if let Some(group) = explicit_group.filter(|group| *group != id.resource_group) {
        tracing::debug!(
            ignored = %group,
            resource_group = %id.resource_group,
            "resource group from --id takes precedence"
        );
    }

    VmTarget {
        resource_group_name: id.resource_group,
        vm_name: id.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use crate::subscription::StaticSubscription;
    use rstest::rstest;

    fn args(id: Option<&str>, name: Option<&str>, group: Option<&str>) -> VmTargetArgs {
        VmTargetArgs {
            id: id.map(str::to_string),
            vm_name: name.map(str::to_string),
            resource_group_name: group.map(str::to_string),
        }
    }

    fn resolve(args: VmTargetArgs) -> Result<VmTarget, ResolveError> {
        let defaults = Defaults::default();
        let subscriptions = StaticSubscription::new("sub");
        args.resolve(&ResolveContext::new(&defaults, &subscriptions))
    }

    #[rstest]
    fn test_id_overrides_explicit_group() {
        let id = "/subscriptions/sub/resourceGroups/from-id/providers/Microsoft.Compute/virtualMachines/vm1";
        let target = resolve(args(Some(id), None, Some("explicit"))).unwrap();
        assert_eq!(
            target,
            VmTarget {
                resource_group_name: "from-id".to_string(),
                vm_name: "vm1".to_string(),
            }
        );
    }

    #[rstest]
    fn test_id_of_other_type_still_decomposes() {
        let id = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/networkInterfaces/nic1";
        let target = resolve(args(Some(id), None, None)).unwrap();
        assert_eq!(target.resource_group_name, "rg");
        assert_eq!(target.vm_name, "nic1");
    }

    #[rstest]
    fn test_plain_id_with_group() {
        let target = resolve(args(Some("vm1"), None, Some("rg"))).unwrap();
        assert_eq!(target.vm_name, "vm1");
        assert_eq!(target.resource_group_name, "rg");
    }

    #[rstest]
    fn test_name_without_group_fails() {
        let result = resolve(args(None, Some("vm1"), None));
        assert!(matches!(
            result,
            Err(ResolveError::UnresolvableResourceGroup { name }) if name == "vm1"
        ));
    }

    #[rstest]
    fn test_nothing_given_fails() {
        let result = resolve(args(None, None, Some("rg")));
        assert!(matches!(
            result,
            Err(ResolveError::MissingRequiredArgument { .. })
        ));
    }
}
