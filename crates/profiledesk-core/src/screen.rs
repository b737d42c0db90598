//! Profile screen state and actions.
//!
//! [`ProfileScreen`] is the whole behaviour of the profile page without any
//! rendering: edit mode and draft buffers, the address modal, the delete
//! confirmation, the pending device-lock check and the toast queue. Every
//! mutation is handed to the [`ProfileStore`]; nothing here persists.
//!
//! Actions never return errors. A rejected input or a failed store call is
//! logged, surfaced as an error toast, and leaves the screen where it was.
//!
//! # Example
//!
//! ```ignore
//! let mut screen = ProfileScreen::new(store);
//!
//! screen.open_add_address();
//! screen.set_address_field(AddressField::City, "Pune");
//! if !screen.submit_address() {
//!     // modal stays open, an error toast explains why
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::device_lock::{DeviceLockVerifier, LockChange};
use crate::error::ProfileError;
use crate::i18n::Strings;
use crate::notify::ToastQueue;
use crate::store::{ProfileStore, ProfileUpdate};
use crate::types::{
    Address, AddressDraft, AddressField, AddressId, AddressLabel, Language, User, UserId,
};
use crate::validation;

/// Whether the address modal creates or edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit(AddressId),
}

/// Open address form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressModal {
    pub mode: ModalMode,
    pub draft: AddressDraft,
}

impl AddressModal {
    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Add => "Add address",
            ModalMode::Edit(_) => "Edit address",
        }
    }
}

/// A device-lock check handed out by [`ProfileScreen::begin_lock_toggle`]
///
/// Only the most recent request can be finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRequest {
    pub change: LockChange,
    ticket: u64,
}

#[derive(Clone)]
pub struct ProfileScreen {
    store: Arc<dyn ProfileStore>,
    /// Last snapshot read from the store
    user: Option<User>,
    editing: bool,
    draft_name: String,
    draft_phone: String,
    pin_draft: String,
    address_modal: Option<AddressModal>,
    pending_delete: Option<AddressId>,
    /// Device-lock check in flight, tied to the user who started it
    lock_pending: Option<(UserId, LockRequest)>,
    next_lock_ticket: u64,
    toasts: ToastQueue,
}

impl ProfileScreen {
    /// Build the screen and read the current user from the store
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let mut screen = Self {
            store,
            user: None,
            editing: false,
            draft_name: String::new(),
            draft_phone: String::new(),
            pin_draft: String::new(),
            address_modal: None,
            pending_delete: None,
            lock_pending: None,
            next_lock_ticket: 0,
            toasts: ToastQueue::new(),
        };
        screen.refresh();
        screen
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True when no session is active
    pub fn is_signed_out(&self) -> bool {
        self.user.is_none()
    }

    /// Labels in the user's language
    pub fn strings(&self) -> &'static Strings {
        self.user
            .as_ref()
            .map(|u| u.language)
            .unwrap_or_default()
            .strings()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_phone(&self) -> &str {
        &self.draft_phone
    }

    pub fn pin_draft(&self) -> &str {
        &self.pin_draft
    }

    pub fn address_modal(&self) -> Option<&AddressModal> {
        self.address_modal.as_ref()
    }

    /// Address awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&Address> {
        let id = self.pending_delete.as_ref()?;
        self.user.as_ref()?.address(id)
    }

    pub fn is_lock_pending(&self) -> bool {
        self.lock_pending.is_some()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.dismiss(id);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════════

    /// Re-read the user from the store
    pub fn refresh(&mut self) {
        match self.store.current_user() {
            Ok(user) => self.user = user,
            Err(e) => {
                self.fail("load profile", e);
            }
        }
    }

    pub fn sign_in(&mut self, name: &str) -> bool {
        match self.store.sign_in(name) {
            Ok(user) => {
                self.toasts.success(format!("Welcome, {}", user.name));
                self.lock_pending = None;
                self.user = Some(user);
                true
            }
            Err(e) => self.fail("sign in", e),
        }
    }

    /// Log out immediately; no confirmation
    pub fn logout(&mut self) -> bool {
        match self.store.logout() {
            Ok(()) => {
                info!("User logged out from profile screen");
                self.user = None;
                self.editing = false;
                self.draft_name.clear();
                self.draft_phone.clear();
                self.pin_draft.clear();
                self.address_modal = None;
                self.pending_delete = None;
                self.lock_pending = None;
                self.toasts.info("Logged out");
                true
            }
            Err(e) => self.fail("log out", e),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Personal details
    // ═══════════════════════════════════════════════════════════════════════

    /// Enter edit mode with drafts copied from the current user
    pub fn start_edit(&mut self) {
        let Some(user) = &self.user else {
            return;
        };
        self.draft_name = user.name.clone();
        self.draft_phone = user.phone.clone();
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    pub fn set_draft_name(&mut self, value: &str) {
        self.draft_name = value.to_string();
    }

    /// Only digits are kept, at most 10
    pub fn set_draft_phone(&mut self, value: &str) {
        self.draft_phone = validation::sanitize_phone(value);
    }

    /// Validate drafts and send them to the store
    pub fn save_profile(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        if let Err(e) = validation::validate_profile(&self.draft_name, &self.draft_phone) {
            debug!("Profile save rejected: {}", e);
            self.toasts.error(e.to_string());
            return false;
        }

        let update = ProfileUpdate {
            name: self.draft_name.trim().to_string(),
            phone: self.draft_phone.clone(),
        };
        match self.store.update_profile(update) {
            Ok(()) => {
                self.editing = false;
                self.refresh();
                self.toasts.success("Profile updated");
                true
            }
            Err(e) => self.fail("update profile", e),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Language
    // ═══════════════════════════════════════════════════════════════════════

    pub fn select_language(&mut self, language: Language) -> bool {
        match self.store.set_language(language) {
            Ok(()) => {
                self.refresh();
                self.toasts
                    .success(format!("Language changed to {}", language.native_name()));
                true
            }
            Err(e) => self.fail("change language", e),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Security
    // ═══════════════════════════════════════════════════════════════════════

    /// Mark a device-lock check as in flight and return the request to verify.
    ///
    /// Returns `None` while another check is pending or when signed out.
    pub fn begin_lock_toggle(&mut self) -> Option<LockRequest> {
        if self.lock_pending.is_some() {
            debug!("Device-lock verification already pending");
            return None;
        }
        let user = self.user.as_ref()?;
        let request = LockRequest {
            change: LockChange::toggling(user.biometric_enabled),
            ticket: self.next_lock_ticket,
        };
        self.next_lock_ticket += 1;
        self.lock_pending = Some((user.id.clone(), request));
        Some(request)
    }

    /// Apply a change once the platform check has answered.
    ///
    /// The answer is dropped unless `request` is the pending one and its user
    /// is still signed in.
    pub fn finish_lock_toggle(&mut self, request: LockRequest, verified: bool) -> bool {
        let change = request.change;
        let Some((owner, pending)) = self.lock_pending.take() else {
            debug!(?change, "No device-lock check pending, answer dropped");
            return false;
        };
        if pending != request {
            debug!(?change, "Answer for an older device-lock check, ignoring");
            self.lock_pending = Some((owner, pending));
            return false;
        }
        if self.user.as_ref().map(|u| &u.id) != Some(&owner) {
            warn!(%owner, ?change, "Session changed during device-lock check, ignoring");
            return false;
        }
        if !verified {
            warn!(?change, "Device-lock verification failed");
            self.toasts.error("Device verification failed");
            return false;
        }

        match self.store.set_biometric(change.target()) {
            Ok(()) => {
                self.refresh();
                self.toasts.success(match change {
                    LockChange::Enable => "Device lock enabled",
                    LockChange::Disable => "Device lock disabled",
                });
                true
            }
            Err(e) => self.fail("change device lock", e),
        }
    }

    /// Verify with the platform, then flip the device-lock flag
    pub async fn toggle_device_lock(&mut self, verifier: &dyn DeviceLockVerifier) -> bool {
        let Some(request) = self.begin_lock_toggle() else {
            return false;
        };
        let verified = verifier.verify(request.change).await;
        self.finish_lock_toggle(request, verified)
    }

    /// Only digits are kept, at most 10
    pub fn set_pin_draft(&mut self, value: &str) {
        self.pin_draft = validation::sanitize_pin(value);
    }

    pub fn change_pin(&mut self) -> bool {
        if let Err(e) = validation::validate_pin(&self.pin_draft) {
            self.toasts.error(e.to_string());
            return false;
        }
        match self.store.set_pin(&self.pin_draft) {
            Ok(()) => {
                self.pin_draft.clear();
                self.refresh();
                self.toasts.success("PIN updated. Your data has been re-encrypted");
                true
            }
            Err(e) => self.fail("change PIN", e),
        }
    }

    /// Run the store's cleanup and show what it reported
    pub fn run_cleanup(&mut self) -> bool {
        match self.store.safe_cleanup() {
            Ok(message) => {
                self.toasts.info(message);
                true
            }
            Err(e) => self.fail("clean up storage", e),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Addresses
    // ═══════════════════════════════════════════════════════════════════════

    /// Open a blank address form
    pub fn open_add_address(&mut self) {
        self.address_modal = Some(AddressModal {
            mode: ModalMode::Add,
            draft: AddressDraft::default(),
        });
    }

    /// Open the form pre-filled from a saved address
    pub fn open_edit_address(&mut self, id: &AddressId) -> bool {
        let Some(address) = self.user.as_ref().and_then(|u| u.address(id)) else {
            warn!("Edit requested for unknown address {}", id);
            return false;
        };
        self.address_modal = Some(AddressModal {
            mode: ModalMode::Edit(id.clone()),
            draft: AddressDraft::from_address(address),
        });
        true
    }

    pub fn close_address_modal(&mut self) {
        self.address_modal = None;
    }

    pub fn set_address_label(&mut self, label: AddressLabel) {
        if let Some(modal) = &mut self.address_modal {
            modal.draft.label = label;
        }
    }

    pub fn set_address_field(&mut self, field: AddressField, value: &str) {
        if let Some(modal) = &mut self.address_modal {
            modal.draft.set(field, value);
        }
    }

    /// Validate the open form and create or update the address
    pub fn submit_address(&mut self) -> bool {
        let Some(modal) = self.address_modal.clone() else {
            return false;
        };
        if let Err(e) = modal.draft.validate() {
            self.toasts.error(e.to_string());
            return false;
        }

        let result = match &modal.mode {
            ModalMode::Add => self.store.add_address(modal.draft).map(|_| "Address added"),
            ModalMode::Edit(id) => self
                .store
                .update_address(id, modal.draft)
                .map(|_| "Address updated"),
        };
        match result {
            Ok(message) => {
                self.address_modal = None;
                self.refresh();
                self.toasts.success(message);
                true
            }
            Err(e) => self.fail("save address", e),
        }
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, id: &AddressId) {
        if self.user.as_ref().and_then(|u| u.address(id)).is_some() {
            self.pending_delete = Some(id.clone());
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the address awaiting confirmation
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        match self.store.delete_address(&id) {
            Ok(()) => {
                self.refresh();
                self.toasts.success("Address deleted");
                true
            }
            Err(e) => self.fail("delete address", e),
        }
    }

    /// Log a store failure and show it; always returns false
    fn fail(&mut self, action: &str, err: ProfileError) -> bool {
        error!("Failed to {}: {:?}", action, err);
        let message = match err {
            ProfileError::Invalid(e) => e.to_string(),
            ProfileError::NoSession => "Please sign in again".to_string(),
            _ => format!("Could not {}", action),
        };
        self.toasts.error(message);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use crate::store::LocalStore;
    use tempfile::tempdir;

    fn screen() -> (tempfile::TempDir, ProfileScreen) {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::open(temp_dir.path().join("profile.redb")).unwrap();
        store.sign_in("Asha").unwrap();
        (temp_dir, ProfileScreen::new(Arc::new(store)))
    }

    #[test]
    fn test_loads_current_user() {
        let (_dir, screen) = screen();
        assert_eq!(screen.user().map(|u| u.name.as_str()), Some("Asha"));
        assert!(screen.toasts().is_empty());
    }

    #[test]
    fn test_cancel_edit_discards_drafts() {
        let (_dir, mut screen) = screen();
        screen.start_edit();
        screen.set_draft_name("Someone else");
        screen.cancel_edit();
        assert!(!screen.is_editing());
        assert!(!screen.save_profile());
        assert_eq!(screen.user().unwrap().name, "Asha");
    }

    #[test]
    fn test_language_switch_changes_strings() {
        let (_dir, mut screen) = screen();
        assert!(screen.select_language(Language::Hindi));
        assert_eq!(screen.strings().security, "सुरक्षा");
        assert_eq!(
            screen.toasts().last().map(|t| t.message.as_str()),
            Some("Language changed to हिन्दी")
        );
    }

    #[test]
    fn test_edit_address_prefills_and_updates() {
        let (_dir, mut screen) = screen();
        screen.open_add_address();
        for (field, value) in [
            (AddressField::Details, "12 MG Road"),
            (AddressField::City, "Pune"),
            (AddressField::State, "Maharashtra"),
            (AddressField::Pincode, "411001"),
        ] {
            screen.set_address_field(field, value);
        }
        assert!(screen.submit_address());

        let id = screen.user().unwrap().addresses[0].id.clone();
        assert!(screen.open_edit_address(&id));
        let modal = screen.address_modal().unwrap();
        assert_eq!(modal.title(), "Edit address");
        assert_eq!(modal.draft.city, "Pune");

        screen.set_address_label(AddressLabel::Work);
        screen.set_address_field(AddressField::City, "Mumbai");
        assert!(screen.submit_address());

        let saved = &screen.user().unwrap().addresses[0];
        assert_eq!(saved.id, id);
        assert_eq!(saved.city, "Mumbai");
        assert_eq!(saved.label, AddressLabel::Work);
        assert!(screen.address_modal().is_none());
    }

    #[test]
    fn test_cleanup_shows_store_message() {
        let (_dir, mut screen) = screen();
        assert!(screen.run_cleanup());
        let toast = screen.toasts().last().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert!(toast.message.contains("Cleared 1 cached entries"));
    }

    #[test]
    fn test_logout_clears_screen_state() {
        let (_dir, mut screen) = screen();
        screen.start_edit();
        screen.open_add_address();
        assert!(screen.logout());
        assert!(screen.is_signed_out());
        assert!(!screen.is_editing());
        assert!(screen.address_modal().is_none());

        assert!(screen.sign_in("Asha"));
        assert!(!screen.is_signed_out());
    }

    #[test]
    fn test_actions_without_session_toast_errors() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::open(temp_dir.path().join("profile.redb")).unwrap();
        let mut screen = ProfileScreen::new(Arc::new(store));
        assert!(screen.is_signed_out());

        assert!(!screen.select_language(Language::Tamil));
        assert_eq!(
            screen.toasts().last().map(|t| t.message.as_str()),
            Some("Please sign in again")
        );
        assert_eq!(screen.begin_lock_toggle(), None);
    }
}
