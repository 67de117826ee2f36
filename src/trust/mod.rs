//! Trust boundary for live content.
//!
//! This module provides:
//! - `SanitizationPolicy`: Trait for the host's optional content policy
//! - `TrustedContentGate`: The single gate all live markup and script text
//!   passes through
//! - `revive_scripts`: Re-creation of inert script nodes as executable ones

mod gate;
mod reviver;

pub use gate::{SanitizationPolicy, TrustedContentGate};
pub use reviver::{PRESERVED_SCRIPT_ATTRIBUTES, revive_scripts};
