//! Normalization of user-supplied resource references.
//!
//! Users may name a related resource either by its short name or by its full
//! resource ID. Short names are expanded using the subscription and resource
//! group of the invocation; full IDs pass through untouched.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::resource_id::{
    is_valid_resource_id, ResourceId, NETWORK_INTERFACES, NETWORK_NAMESPACE,
};
use crate::subscription::SubscriptionProvider;

/// Ambient values used to expand short names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceContext {
    pub subscription_id: String,
    pub resource_group_name: String,
}

impl ReferenceContext {
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }

    /// Build a context for `references`, asking `subscriptions` only when at
    /// least one reference is a short name.
    pub fn for_references<'a, I>(
        references: I,
        resource_group_name: &str,
        subscriptions: &dyn SubscriptionProvider,
    ) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let needs_subscription = references
            .into_iter()
            .any(|reference| !is_valid_resource_id(reference));

        let subscription_id = if needs_subscription {
            let id = subscriptions.subscription_id()?;
            tracing::debug!(subscription = %id, "looked up subscription for short names");
            id
        } else {
            String::new()
        };

        Ok(Self::new(subscription_id, resource_group_name))
    }
}

/// A network interface attached to a VM, in the shape the compute API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicReference {
    pub id: String,
    pub properties: NicProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicProperties {
    pub primary: bool,
}

/// Expand `reference` into a full ID of the given provider type.
pub fn resolve_resource_id(
    reference: &str,
    context: &ReferenceContext,
    namespace: &str,
    resource_type: &str,
) -> String {
    if is_valid_resource_id(reference) {
        return reference.to_string();
    }

    ResourceId::new(
        &context.subscription_id,
        &context.resource_group_name,
        namespace,
        resource_type,
        reference,
    )
    .to_string()
}

/// Normalize a list of network interface references.
///
/// Output order follows input order and the first interface is the primary
/// one; every other interface is marked non-primary.
pub fn normalize_nics<S: AsRef<str>>(references: &[S], context: &ReferenceContext) -> Vec<NicReference> {
    references
        .iter()
        .enumerate()
        .map(|(index, reference)| NicReference {
            id: resolve_resource_id(
                reference.as_ref(),
                context,
                NETWORK_NAMESPACE,
                NETWORK_INTERFACES,
            ),
            properties: NicProperties {
                primary: index == 0,
            },
        })
        .collect()
}
