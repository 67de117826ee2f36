//! The trusted content gate.

use std::borrow::Cow;
use std::fmt::Debug;

/// A host policy that turns raw text into values the host accepts for live
/// injection.
pub trait SanitizationPolicy: Send + Sync + Debug {
    fn create_html(&self, markup: &str) -> String;

    fn create_script(&self, script: &str) -> String;
}

/// Wraps markup and script text before it is injected.
///
/// With a policy, both operations delegate to it; without one they return
/// the text unchanged. Hosts that enforce a policy reject a second policy
/// instance, so build one gate per process and share it (`Arc`) between
/// activations.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use outrender::{RendererBuilder, TrustFlag, TrustedContentGate};
///
/// let gate = Arc::new(TrustedContentGate::new(Some(Box::new(MyPolicy))));
/// let renderer = RendererBuilder::new(Arc::new(TrustFlag::trusted()))
///     .with_gate(gate.clone())
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TrustedContentGate {
    policy: Option<Box<dyn SanitizationPolicy>>,
}

impl TrustedContentGate {
    /// Create a gate around the host's policy, if it has one.
    pub fn new(policy: Option<Box<dyn SanitizationPolicy>>) -> Self {
        Self { policy }
    }

    /// Create a gate for a host without a policy.
    pub fn passthrough() -> Self {
        Self { policy: None }
    }

    /// Whether a host policy is in place.
    pub fn is_sanitizing(&self) -> bool {
        self.policy.is_some()
    }

    pub fn sanitize_markup<'a>(&self, markup: &'a str) -> Cow<'a, str> {
        match &self.policy {
            Some(policy) => Cow::Owned(policy.create_html(markup)),
            None => Cow::Borrowed(markup),
        }
    }

    pub fn sanitize_script<'a>(&self, script: &'a str) -> Cow<'a, str> {
        match &self.policy {
            Some(policy) => Cow::Owned(policy.create_script(script)),
            None => Cow::Borrowed(script),
        }
    }
}
