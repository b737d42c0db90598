//! User Storage - CRUD operations for user records
//!
//! Stores users in redb keyed by their ULID string, serialized with postcard.

use crate::error::ProfileError;
use crate::types::User;
use redb::{ReadableTable, TableDefinition};

use super::{append_activity, Storage};

/// Table for storing users (key: user id string, value: serialized User)
pub(crate) const USERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

impl Storage {
    /// Save a user, overwriting any record with the same id
    pub fn save_user(&self, user: &User) -> Result<(), ProfileError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(USERS_TABLE)?;
            let serialized = postcard::to_allocvec(user)
                .map_err(|e| ProfileError::Serialization(e.to_string()))?;
            let key = user.id.0.to_string();
            table.insert(key.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Save a user and append an activity line in one transaction.
    ///
    /// Either both land or neither does.
    pub fn save_user_logged(&self, user: &User, activity: &str) -> Result<(), ProfileError> {
        let serialized =
            postcard::to_allocvec(user).map_err(|e| ProfileError::Serialization(e.to_string()))?;
        let key = user.id.0.to_string();

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(USERS_TABLE)?;
            table.insert(key.as_str(), serialized.as_slice())?;
        }
        append_activity(&write_txn, activity)?;
        write_txn.commit()?;
        Ok(())
    }

    /// Load a user by id string
    ///
    /// Returns `None` if no user exists with that id.
    pub fn load_user(&self, key: &str) -> Result<Option<User>, ProfileError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;

        if let Some(data) = table.get(key)? {
            let user: User = postcard::from_bytes(data.value())
                .map_err(|e| ProfileError::Serialization(e.to_string()))?;
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Find a user by display name
    pub fn find_user_by_name(&self, name: &str) -> Result<Option<User>, ProfileError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;

        for entry in table.iter()? {
            let (_, value) = entry?;
            let user: User = postcard::from_bytes(value.value())
                .map_err(|e| ProfileError::Serialization(e.to_string()))?;
            if user.name == name {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }
}
