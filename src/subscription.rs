//! Subscription lookup.
//!
//! The resolver only needs a subscription when it has to turn a short
//! resource name into a full ID, so the lookup sits behind a trait that tests
//! replace with a fixed value.

use crate::config::ConfigFile;
use crate::error::ResolveError;

pub trait SubscriptionProvider {
    fn subscription_id(&self) -> Result<String, ResolveError>;
}

/// Always returns the same subscription.
#[derive(Debug, Clone)]
pub struct StaticSubscription(pub String);

impl StaticSubscription {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl SubscriptionProvider for StaticSubscription {
    fn subscription_id(&self) -> Result<String, ResolveError> {
        Ok(self.0.clone())
    }
}

/// Reads the subscription from the loaded configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredSubscription {
    subscription_id: Option<String>,
}

impl ConfiguredSubscription {
    pub fn from_config(config: &ConfigFile) -> Self {
        Self {
            subscription_id: config.subscription_id.clone(),
        }
    }
}

impl SubscriptionProvider for ConfiguredSubscription {
    fn subscription_id(&self) -> Result<String, ResolveError> {
        self.subscription_id
            .clone()
            .ok_or(ResolveError::SubscriptionUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_static_subscription() {
        let provider = StaticSubscription::new("00000000-0000-0000-0000-000000000000");
        assert_eq!(
            provider.subscription_id().unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[rstest]
    fn test_configured_subscription() {
        let config = ConfigFile {
            subscription_id: Some("sub".to_string()),
            ..Default::default()
        };
        let provider = ConfiguredSubscription::from_config(&config);
        assert_eq!(provider.subscription_id().unwrap(), "sub");
    }

    #[rstest]
    fn test_configured_subscription_missing() {
        let provider = ConfiguredSubscription::from_config(&ConfigFile::default());
        assert!(matches!(
            provider.subscription_id(),
            Err(ResolveError::SubscriptionUnavailable)
        ));
    }
}
