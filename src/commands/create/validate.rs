use serde::Serialize;

use super::VmCreateCmd;
use crate::commands::Validate;
use crate::error::ResolveError;
use crate::resolver::ResolveContext;
use crate::validators::{normalize_nics, NicReference, ReferenceContext};

/// Resolved arguments of `vm create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmCreateNamespace {
    pub name: String,
    pub resource_group_name: String,
    pub image: String,
    pub size: String,
    pub location: Option<String>,
    pub admin_username: String,
    pub nics: Vec<NicReference>,
}

impl Validate for VmCreateCmd {
    type Namespace = VmCreateNamespace;

    fn validate(self, ctx: &ResolveContext<'_>) -> Result<Self::Namespace, ResolveError> {
        let resource_group_name = ctx.resource_group(self.resource_group_name, &self.name)?;

        let nics = if self.nics.is_empty() {
            Vec::new()
        } else {
            let references = ReferenceContext::for_references(
                self.nics.iter().map(String::as_str),
                &resource_group_name,
                ctx.subscriptions,
            )?;
            normalize_nics(&self.nics, &references)
        };

        Ok(VmCreateNamespace {
            name: self.name,
            resource_group_name,
            image: self.image,
            size: self.size,
            location: self.location,
            admin_username: self.admin_username,
            nics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use crate::subscription::ConfiguredSubscription;
    use crate::test_utils::{resolver_env, ResolverEnv};
    use rstest::rstest;
    use serde_json::json;

    fn cmd(nics: &[&str]) -> VmCreateCmd {
        VmCreateCmd {
            name: "vm1".to_string(),
            resource_group_name: Some("rg".to_string()),
            image: "Ubuntu2204".to_string(),
            size: "Standard_DS1_v2".to_string(),
            location: None,
            admin_username: "azureuser".to_string(),
            nics: nics.iter().map(|nic| nic.to_string()).collect(),
        }
    }

    crate::resolve_test! {
        test_name: test_create_normalizes_nics,
        command: "vm create",
        args: "-g rg -n vm1 --image Ubuntu2204 --nics nic1 nic2",
        expected: json!({
            "name": "vm1",
            "resource_group_name": "rg",
            "image": "Ubuntu2204",
            "size": "Standard_DS1_v2",
            "location": null,
            "admin_username": "azureuser",
            "nics": [
                {
                    "id": "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg/providers/Microsoft.Network/networkInterfaces/nic1",
                    "properties": { "primary": true }
                },
                {
                    "id": "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg/providers/Microsoft.Network/networkInterfaces/nic2",
                    "properties": { "primary": false }
                }
            ]
        }),
    }

    crate::resolve_test! {
        test_name: test_create_without_nics,
        command: "vm create",
        args: "-g rg -n vm1 --image Ubuntu2204 --size Standard_B2s -l westus",
        expected: json!({
            "name": "vm1",
            "resource_group_name": "rg",
            "image": "Ubuntu2204",
            "size": "Standard_B2s",
            "location": "westus",
            "admin_username": "azureuser",
            "nics": []
        }),
    }

    crate::resolve_error_test! {
        test_name: test_create_without_group,
        command: "vm create",
        args: "-n vm1 --image Ubuntu2204",
        error: ResolveError::UnresolvableResourceGroup { .. },
    }

    crate::resolve_error_test! {
        test_name: test_create_without_image,
        command: "vm create",
        args: "-g rg -n vm1",
        error: ResolveError::MissingRequiredArgument { .. },
    }

    #[rstest]
    fn test_create_uses_default_group_for_nics() {
        let env = ResolverEnv::with_default_group("configured");
        let namespace = env
            .resolve("vm create", "-n vm1 --image Ubuntu2204 --nics nic1")
            .unwrap();
        let value = serde_json::to_value(&namespace).unwrap();
        assert_eq!(value["resource_group_name"], "configured");
        assert_eq!(
            value["nics"][0]["id"],
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/configured/providers/Microsoft.Network/networkInterfaces/nic1"
        );
    }

    #[rstest]
    fn test_full_nic_ids_need_no_subscription() {
        let defaults = Defaults::default();
        let subscriptions = ConfiguredSubscription::default();
        let ctx = ResolveContext::new(&defaults, &subscriptions);
        let id = "/subscriptions/other/resourceGroups/net-rg/providers/Microsoft.Network/networkInterfaces/shared";

        let namespace = cmd(&[id]).validate(&ctx).unwrap();
        assert_eq!(namespace.nics.len(), 1);
        assert_eq!(namespace.nics[0].id, id);
        assert!(namespace.nics[0].properties.primary);
    }

    #[rstest]
    fn test_short_nic_names_need_a_subscription() {
        let defaults = Defaults::default();
        let subscriptions = ConfiguredSubscription::default();
        let ctx = ResolveContext::new(&defaults, &subscriptions);

        let result = cmd(&["nic1"]).validate(&ctx);
        assert!(matches!(result, Err(ResolveError::SubscriptionUnavailable)));
    }
}
