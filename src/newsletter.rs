//! Capability-based dispatch.
//!
//! The controller only cares that its argument can `subscribe`. Whether that
//! is Campaign Monitor or Drip is decided by whoever calls `store`.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::error::{ConstructError, Result};

pub const DEFAULT_EMAIL: &str = "joe@example.com";

// ============================================================================
// The capability
// ============================================================================

pub trait Newsletter {
    fn subscribe(&self, email: &str) -> Result<Subscription>;
}

/// Receipt handed back by a provider once it accepted an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub provider: &'static str,
    pub email: String,
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscribing with {}", self.provider)
    }
}

// ============================================================================
// Providers
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct CampaignMonitor;

impl Newsletter for CampaignMonitor {
    fn subscribe(&self, email: &str) -> Result<Subscription> {
        info!(provider = "CampaignMonitor", email, "subscribing");
        Ok(Subscription {
            provider: "CampaignMonitor",
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Drip;

impl Newsletter for Drip {
    fn subscribe(&self, email: &str) -> Result<Subscription> {
        info!(provider = "Drip", email, "subscribing");
        Ok(Subscription {
            provider: "Drip",
            email: email.to_string(),
        })
    }
}

/// Built-in providers, addressable by their configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    CampaignMonitor,
    Drip,
}

impl ProviderKind {
    pub const NAMES: [&'static str; 2] = ["campaign-monitor", "drip"];

    pub fn provider(self) -> Box<dyn Newsletter> {
        match self {
            ProviderKind::CampaignMonitor => Box::new(CampaignMonitor),
            ProviderKind::Drip => Box::new(Drip),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConstructError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "campaign-monitor" | "campaignmonitor" => Ok(ProviderKind::CampaignMonitor),
            "drip" => Ok(ProviderKind::Drip),
            _ => Err(ConstructError::invalid_provider(s, &Self::NAMES)),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct NewsletterSubscriptionsController {
    email: String,
}

impl Default for NewsletterSubscriptionsController {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterSubscriptionsController {
    pub fn new() -> Self {
        Self::with_email(DEFAULT_EMAIL)
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn store(&self, newsletter: &dyn Newsletter) -> Result<Subscription> {
        newsletter.subscribe(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingNewsletter {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingNewsletter {
        fn new() -> Self {
            RecordingNewsletter {
                calls: RefCell::new(vec![]),
            }
        }
    }

    impl Newsletter for RecordingNewsletter {
        fn subscribe(&self, email: &str) -> Result<Subscription> {
            self.calls.borrow_mut().push(email.to_string());
            Ok(Subscription {
                provider: "Recording",
                email: email.to_string(),
            })
        }
    }

    struct RejectingNewsletter;

    impl Newsletter for RejectingNewsletter {
        fn subscribe(&self, _email: &str) -> Result<Subscription> {
            Err(ConstructError::not_implemented("RejectingNewsletter::subscribe"))
        }
    }

    #[test]
    fn test_store_forwards_default_email_once() {
        let recorder = RecordingNewsletter::new();
        let controller = NewsletterSubscriptionsController::new();

        let receipt = controller.store(&recorder).unwrap();

        assert_eq!(*recorder.calls.borrow(), vec!["joe@example.com".to_string()]);
        assert_eq!(receipt.email, "joe@example.com");
    }

    #[test]
    fn test_store_uses_configured_email() {
        let recorder = RecordingNewsletter::new();
        let controller = NewsletterSubscriptionsController::with_email("ann@example.org");

        controller.store(&recorder).unwrap();

        assert_eq!(*recorder.calls.borrow(), vec!["ann@example.org".to_string()]);
    }

    #[test]
    fn test_store_propagates_provider_error() {
        let controller = NewsletterSubscriptionsController::new();
        let err = controller.store(&RejectingNewsletter).unwrap_err();
        assert!(matches!(err, ConstructError::NotImplemented { .. }));
    }

    #[test]
    fn test_providers_identify_themselves() {
        let controller = NewsletterSubscriptionsController::new();

        let cm = controller.store(&CampaignMonitor).unwrap();
        let drip = controller.store(&Drip).unwrap();

        assert_eq!(cm.to_string(), "Subscribing with CampaignMonitor");
        assert_eq!(drip.to_string(), "Subscribing with Drip");
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!(
            "campaign-monitor".parse::<ProviderKind>().unwrap(),
            ProviderKind::CampaignMonitor
        );
        assert_eq!(" Drip ".parse::<ProviderKind>().unwrap(), ProviderKind::Drip);
    }

    #[test]
    fn test_unknown_provider_is_invalid() {
        let err = "mailchimp".parse::<ProviderKind>().unwrap_err();
        match err {
            ConstructError::InvalidProvider { name, known } => {
                assert_eq!(name, "mailchimp");
                assert_eq!(known, vec!["campaign-monitor", "drip"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_provider_kind_dispatches_to_boxed_provider() {
        let controller = NewsletterSubscriptionsController::new();
        let provider = ProviderKind::Drip.provider();
        let receipt = controller.store(provider.as_ref()).unwrap();
        assert_eq!(receipt.provider, "Drip");
    }
}
