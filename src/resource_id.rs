//! Fully-qualified resource identifiers.
//!
//! A resource ID has the shape
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}`.
//! Values that deviate from it in any way are not IDs; callers treat them as
//! plain names instead of rejecting them.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Provider namespace and type used for network interfaces.
pub const NETWORK_NAMESPACE: &str = "Microsoft.Network";
pub const NETWORK_INTERFACES: &str = "networkInterfaces";

/// Provider namespace and types used for compute resources.
pub const COMPUTE_NAMESPACE: &str = "Microsoft.Compute";
pub const DISKS: &str = "disks";
pub const VIRTUAL_MACHINES: &str = "virtualMachines";

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^/subscriptions/([^/]+)/resourceGroups/([^/]+)/providers/([^/]+)/([^/]+)/([^/]+)$",
        )
        .expect("resource id pattern is valid")
    })
}

/// A resource ID split into its path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub subscription: String,
    pub resource_group: String,
    pub namespace: String,
    pub resource_type: String,
    pub name: String,
}

impl ResourceId {
    pub fn new(
        subscription: impl Into<String>,
        resource_group: impl Into<String>,
        namespace: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription: subscription.into(),
            resource_group: resource_group.into(),
            namespace: namespace.into(),
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Decompose `value` into its segments.
    ///
    /// Returns `None` for anything that does not match the grammar exactly,
    /// including values with missing segments, extra segments, a trailing
    /// slash, or differently-cased keywords.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = id_pattern().captures(value)?;
        Some(Self::new(
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5],
        ))
    }

    /// True if this ID names a resource of the given provider namespace and type.
    pub fn is_type(&self, namespace: &str, resource_type: &str) -> bool {
        self.namespace.eq_ignore_ascii_case(namespace)
            && self.resource_type.eq_ignore_ascii_case(resource_type)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
            self.subscription, self.resource_group, self.namespace, self.resource_type, self.name
        )
    }
}

pub fn is_valid_resource_id(value: &str) -> bool {
    id_pattern().is_match(value)
}
