//! Screen context provider for Profile Desk.
//!
//! Provides the profile screen state and the device-lock verifier to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut screen = use_screen();
//! screen.write().start_edit();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use profiledesk_core::{DeviceLockVerifier, ProfileScreen, ProfileStore};

/// Get the store opened at startup
pub fn get_store() -> Option<Arc<dyn ProfileStore>> {
    crate::get_store()
}

/// Get the verifier selected on the command line
pub fn get_verifier() -> Arc<dyn DeviceLockVerifier> {
    crate::get_verifier()
}

/// Hook to access the profile screen state.
///
/// Reads subscribe the component; actions go through `write()`.
pub fn use_screen() -> Signal<ProfileScreen> {
    use_context::<Signal<ProfileScreen>>()
}

/// Hook to access the device-lock verifier.
pub fn use_verifier() -> Arc<dyn DeviceLockVerifier> {
    use_context::<Arc<dyn DeviceLockVerifier>>()
}
