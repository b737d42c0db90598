//! The store that owns all user and session state.
//!
//! The profile screen only talks to [`ProfileStore`]. [`LocalStore`] is the
//! redb-backed implementation used by the desktop shell; tests substitute
//! their own.

use std::path::Path;

use parking_lot::Mutex;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::{ProfileError, ProfileResult};
use crate::storage::Storage;
use crate::types::{Address, AddressDraft, AddressId, Language, User};
use crate::validation;

const PIN_SALT_LEN: usize = 16;

/// Personal details written by a profile save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
}

/// Operations the profile screen delegates to.
///
/// Implementations serialise their own updates.
pub trait ProfileStore: Send + Sync {
    /// The signed-in user, or `None` after logout
    fn current_user(&self) -> ProfileResult<Option<User>>;

    /// Start a session for `name`, creating the account on first use
    fn sign_in(&self, name: &str) -> ProfileResult<User>;

    fn update_profile(&self, update: ProfileUpdate) -> ProfileResult<()>;

    fn set_language(&self, language: Language) -> ProfileResult<()>;

    fn add_address(&self, draft: AddressDraft) -> ProfileResult<Address>;

    fn update_address(&self, id: &AddressId, draft: AddressDraft) -> ProfileResult<()>;

    fn delete_address(&self, id: &AddressId) -> ProfileResult<()>;

    fn set_biometric(&self, enabled: bool) -> ProfileResult<()>;

    /// Replace the app PIN
    fn set_pin(&self, pin: &str) -> ProfileResult<()>;

    /// Discard cached data without touching the profile; returns a status line
    fn safe_cleanup(&self) -> ProfileResult<String>;

    fn logout(&self) -> ProfileResult<()>;
}

/// redb-backed store for a single device
pub struct LocalStore {
    storage: Storage,
    /// Held across every read-modify-write of the current user
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Open or create the store at `path`
    pub fn open(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let storage = Storage::new(path)?;
        Ok(Self::with_storage(storage))
    }

    pub fn with_storage(storage: Storage) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Cached activity lines, oldest first
    pub fn recent_activity(&self) -> ProfileResult<Vec<String>> {
        self.storage.list_activity()
    }

    fn load_current(&self) -> ProfileResult<Option<User>> {
        match self.storage.session()? {
            Some(key) => {
                let user = self.storage.load_user(&key)?;
                if user.is_none() {
                    warn!("Session points at missing user {}", key);
                }
                Ok(user)
            }
            None => Ok(None),
        }
    }

    /// Load the current user, apply `f`, save, and log the action
    fn mutate<T>(
        &self,
        action: &str,
        f: impl FnOnce(&mut User) -> ProfileResult<T>,
    ) -> ProfileResult<T> {
        let _guard = self.write_lock.lock();
        let mut user = self.load_current()?.ok_or(ProfileError::NoSession)?;
        let out = f(&mut user)?;
        user.touch();
        self.storage.save_user_logged(&user, action)?;
        debug!(user = %user.id, "{}", action);
        Ok(out)
    }
}

fn hash_pin(salt: &[u8], pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(pin.as_bytes());
    hex::encode(hasher.finalize())
}

/// Encode as `salt$digest`, both hex
fn seal_pin(pin: &str) -> String {
    let mut salt = [0u8; PIN_SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    format!("{}${}", hex::encode(salt), hash_pin(&salt, pin))
}

impl ProfileStore for LocalStore {
    fn current_user(&self) -> ProfileResult<Option<User>> {
        self.load_current()
    }

    fn sign_in(&self, name: &str) -> ProfileResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(validation::ValidationError::EmptyName.into());
        }

        let _guard = self.write_lock.lock();
        let user = match self.storage.find_user_by_name(name)? {
            Some(existing) => existing,
            None => {
                let user = User::new(name);
                self.storage.save_user(&user)?;
                info!(user = %user.id, "Created account for {}", name);
                user
            }
        };
        self.storage.set_session(&user.id.0.to_string())?;
        // The session is live even if the cache write fails
        if let Err(e) = self.storage.record_activity("signed in") {
            warn!("Could not record sign-in activity: {}", e);
        }
        info!(user = %user.id, "Signed in");
        Ok(user)
    }

    fn update_profile(&self, update: ProfileUpdate) -> ProfileResult<()> {
        validation::validate_profile(&update.name, &update.phone)?;
        self.mutate("updated profile", |user| {
            user.name = update.name.trim().to_string();
            user.phone = update.phone;
            Ok(())
        })
    }

    fn set_language(&self, language: Language) -> ProfileResult<()> {
        self.mutate(&format!("language set to {}", language.english_name()), |user| {
            user.language = language;
            Ok(())
        })
    }

    fn add_address(&self, draft: AddressDraft) -> ProfileResult<Address> {
        draft.validate()?;
        self.mutate("added address", |user| {
            let address = draft.into_address(AddressId::new());
            user.addresses.push(address.clone());
            Ok(address)
        })
    }

    fn update_address(&self, id: &AddressId, draft: AddressDraft) -> ProfileResult<()> {
        draft.validate()?;
        self.mutate("updated address", |user| {
            let address = user
                .address_mut(id)
                .ok_or_else(|| ProfileError::AddressNotFound(id.to_string_repr()))?;
            draft.apply_to(address);
            Ok(())
        })
    }

    fn delete_address(&self, id: &AddressId) -> ProfileResult<()> {
        self.mutate("deleted address", |user| {
            let before = user.addresses.len();
            user.addresses.retain(|a| &a.id != id);
            if user.addresses.len() == before {
                return Err(ProfileError::AddressNotFound(id.to_string_repr()));
            }
            Ok(())
        })
    }

    fn set_biometric(&self, enabled: bool) -> ProfileResult<()> {
        let action = if enabled { "device lock enabled" } else { "device lock disabled" };
        self.mutate(action, |user| {
            user.biometric_enabled = enabled;
            Ok(())
        })
    }

    fn set_pin(&self, pin: &str) -> ProfileResult<()> {
        validation::validate_pin(pin)?;
        self.mutate("changed PIN", |user| {
            user.pin_hash = Some(seal_pin(pin));
            Ok(())
        })
    }

    fn safe_cleanup(&self) -> ProfileResult<String> {
        let _guard = self.write_lock.lock();
        let removed = self.storage.clear_activity()?;
        let compacted = self.storage.compact()?;
        info!(removed, compacted, "Safe cleanup finished");

        Ok(match (removed, compacted) {
            (0, false) => "Nothing to clean up".to_string(),
            (0, true) => "Storage compacted".to_string(),
            (n, false) => format!("Cleared {} cached entries", n),
            (n, true) => format!("Cleared {} cached entries and compacted storage", n),
        })
    }

    fn logout(&self) -> ProfileResult<()> {
        let _guard = self.write_lock.lock();
        self.storage.clear_session()?;
        info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pin_matches(sealed: &str, pin: &str) -> bool {
        let Some((salt_hex, digest)) = sealed.split_once('$') else {
            return false;
        };
        match hex::decode(salt_hex) {
            Ok(salt) => hash_pin(&salt, pin) == digest,
            Err(_) => false,
        }
    }

    fn signed_in() -> (tempfile::TempDir, LocalStore) {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::open(temp_dir.path().join("profile.redb")).unwrap();
        store.sign_in("Asha").unwrap();
        (temp_dir, store)
    }

    fn draft(city: &str) -> AddressDraft {
        AddressDraft {
            details: "12 MG Road".into(),
            city: city.into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_user_before_sign_in() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::open(temp_dir.path().join("profile.redb")).unwrap();
        assert!(store.current_user().unwrap().is_none());
        assert!(matches!(
            store.set_language(Language::Hindi),
            Err(ProfileError::NoSession)
        ));
    }

    #[test]
    fn test_sign_in_reuses_existing_account() {
        let (_dir, store) = signed_in();
        let first = store.current_user().unwrap().unwrap();
        store.logout().unwrap();
        let again = store.sign_in("Asha").unwrap();
        assert_eq!(first.id, again.id);
    }

    #[test]
    fn test_update_profile_persists() {
        let (_dir, store) = signed_in();
        store
            .update_profile(ProfileUpdate {
                name: " Asha Rao ".into(),
                phone: "9876543210".into(),
            })
            .unwrap();

        let user = store.current_user().unwrap().unwrap();
        assert_eq!(user.name, "Asha Rao");
        assert_eq!(user.phone, "9876543210");
    }

    #[test]
    fn test_update_profile_rejects_short_phone() {
        let (_dir, store) = signed_in();
        let result = store.update_profile(ProfileUpdate {
            name: "Asha".into(),
            phone: "12345".into(),
        });
        assert!(matches!(result, Err(ProfileError::Invalid(_))));
    }

    #[test]
    fn test_address_crud() {
        let (_dir, store) = signed_in();
        let pune = store.add_address(draft("Pune")).unwrap();
        let nashik = store.add_address(draft("Nashik")).unwrap();

        store.update_address(&pune.id, draft("Mumbai")).unwrap();
        store.delete_address(&nashik.id).unwrap();

        let user = store.current_user().unwrap().unwrap();
        assert_eq!(user.addresses.len(), 1);
        assert_eq!(user.addresses[0].id, pune.id);
        assert_eq!(user.addresses[0].city, "Mumbai");
    }

    #[test]
    fn test_delete_unknown_address() {
        let (_dir, store) = signed_in();
        let result = store.delete_address(&AddressId::new());
        assert!(matches!(result, Err(ProfileError::AddressNotFound(_))));
    }

    #[test]
    fn test_activity_lands_with_the_change_or_not_at_all() {
        let (_dir, store) = signed_in();
        let before = store.recent_activity().unwrap();

        store.set_language(Language::Hindi).unwrap();
        let after = store.recent_activity().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("language set to Hindi"));

        // A rejected mutation writes neither the user nor the log line
        assert!(store.delete_address(&AddressId::new()).is_err());
        assert_eq!(store.recent_activity().unwrap(), after);
    }

    #[test]
    fn test_pin_is_hashed_and_verifiable() {
        let (_dir, store) = signed_in();
        assert!(!store.current_user().unwrap().unwrap().has_pin());

        store.set_pin("482913").unwrap();
        let user = store.current_user().unwrap().unwrap();
        let sealed = user.pin_hash.unwrap();
        assert!(!sealed.contains("482913"));

        assert!(pin_matches(&sealed, "482913"));
        assert!(!pin_matches(&sealed, "482914"));
    }

    #[test]
    fn test_same_pin_gets_fresh_salt() {
        let a = seal_pin("1234");
        let b = seal_pin("1234");
        assert_ne!(a, b);
        assert!(pin_matches(&a, "1234"));
        assert!(pin_matches(&b, "1234"));
        assert!(!pin_matches("garbage", "1234"));
    }

    #[test]
    fn test_safe_cleanup_keeps_profile() {
        let (_dir, store) = signed_in();
        store.set_language(Language::Bengali).unwrap();
        store.set_biometric(true).unwrap();
        assert!(!store.recent_activity().unwrap().is_empty());

        let message = store.safe_cleanup().unwrap();
        assert!(message.starts_with("Cleared 3 cached entries"), "{message}");
        assert!(store.recent_activity().unwrap().is_empty());

        let user = store.current_user().unwrap().unwrap();
        assert_eq!(user.language, Language::Bengali);
        assert!(user.biometric_enabled);
    }

    #[test]
    fn test_logout_ends_session() {
        let (_dir, store) = signed_in();
        store.logout().unwrap();
        assert!(store.current_user().unwrap().is_none());
    }
}
