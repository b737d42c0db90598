//! Profile Desk Core Library
//!
//! Framework-agnostic model behind the profile screen: the user record and
//! its saved addresses, input validation, the store that owns all state,
//! the device-lock gate and the transient notification queue.
//!
//! ## Overview
//!
//! The screen never persists anything itself. Every mutation goes through a
//! [`ProfileStore`], security changes are gated by a [`DeviceLockVerifier`],
//! and user feedback is collected in a [`ToastQueue`]. [`ProfileScreen`]
//! binds those collaborators to form state (edit mode, drafts, modals).
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use profiledesk_core::{FixedVerifier, LocalStore, ProfileScreen};
//!
//! let store = Arc::new(LocalStore::open("~/.profiledesk/profile.redb")?);
//! let mut screen = ProfileScreen::new(store);
//!
//! screen.start_edit();
//! screen.set_draft_phone("98765 43210");
//! screen.save_profile();
//!
//! screen.toggle_device_lock(&FixedVerifier::new(true)).await;
//! ```

pub mod device_lock;
pub mod error;
pub mod i18n;
pub mod notify;
pub mod screen;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

// Re-exports
pub use device_lock::{DeviceLockVerifier, FixedVerifier, LockChange};
pub use error::{ProfileError, ProfileResult};
pub use i18n::Strings;
pub use notify::{Toast, ToastKind, ToastQueue};
pub use screen::{AddressModal, LockRequest, ModalMode, ProfileScreen};
pub use storage::Storage;
pub use store::{LocalStore, ProfileStore, ProfileUpdate};
pub use types::*;
pub use validation::ValidationError;
