//! Renderer context trait definition.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

/// What the renderer needs to know about its host at call time.
pub trait RendererContext: Send + Sync + Debug {
    /// Whether the workspace the outputs belong to is trusted.
    ///
    /// Read on every render of a trust-gated mime; implementations must not
    /// expect the value to be cached.
    fn is_workspace_trusted(&self) -> bool;
}

/// A trust flag the host can flip while a renderer is active.
#[derive(Debug, Default)]
pub struct TrustFlag {
    trusted: AtomicBool,
}

impl TrustFlag {
    /// Create a flag with the given initial trust.
    pub fn new(trusted: bool) -> Self {
        Self {
            trusted: AtomicBool::new(trusted),
        }
    }

    /// Create a flag for a trusted workspace.
    pub fn trusted() -> Self {
        Self::new(true)
    }

    /// Create a flag for an untrusted workspace.
    pub fn untrusted() -> Self {
        Self::new(false)
    }

    /// Change the trust state.
    pub fn set(&self, trusted: bool) {
        self.trusted.store(trusted, Ordering::SeqCst);
    }
}

impl RendererContext for TrustFlag {
    fn is_workspace_trusted(&self) -> bool {
        self.trusted.load(Ordering::SeqCst)
    }
}
