use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::config::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, SESSION_SLOT, USERS_SLOT};
use crate::models::{NewUser, Role, UserRecord};

/// Errors from the file-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed key-value store holding the user list and the single session
/// slot. Each slot is one JSON file under the data directory, named after
/// the original storage keys (`app_users.json`, `current_user.json`).
///
/// All operations are synchronous whole-file read-modify-write; there is no
/// locking against other writers on the same directory.
#[derive(Clone, Debug)]
pub struct UserStore {
    data_dir: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        UserStore { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{slot}.json"))
    }

    /// All user records. An empty or missing slot is seeded with exactly one
    /// default admin, persisted before returning, so repeated calls return
    /// the same seeded data.
    pub fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let path = self.slot_path(USERS_SLOT);
        if !path.exists() {
            let seeded = vec![default_admin()];
            self.save_users(&seeded)?;
            return Ok(seeded);
        }
        let text = fs::read_to_string(&path)?;
        let users: Vec<UserRecord> = serde_json::from_str(&text)?;
        if users.is_empty() {
            let seeded = vec![default_admin()];
            self.save_users(&seeded)?;
            return Ok(seeded);
        }
        Ok(users)
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let path = self.slot_path(USERS_SLOT);
        fs::write(&path, serde_json::to_string_pretty(users)?)?;
        Ok(())
    }

    /// Append a record with the next free id and a fresh timestamp. Ids are
    /// `max(existing) + 1`, so they stay unique and increasing even after
    /// deletions. Username uniqueness is the caller's job.
    pub fn add_user(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.list_users()?;
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let record = UserRecord {
            id: next_id,
            username: new_user.username,
            password: new_user.password,
            role: new_user.role,
            dept: new_user.dept,
            created_at: Utc::now().to_rfc3339(),
        };
        users.push(record.clone());
        self.save_users(&users)?;
        Ok(record)
    }

    /// Remove the record with the given id. A missing id is a no-op.
    pub fn delete_user(&self, id: u64) -> Result<(), StoreError> {
        let mut users = self.list_users()?;
        users.retain(|u| u.id != id);
        self.save_users(&users)?;
        Ok(())
    }

    /// The persisted session snapshot, if a user is logged in on this
    /// machine. The snapshot is a copy taken at login time; callers that
    /// care about staleness revalidate against `list_users`.
    pub fn get_session(&self) -> Result<Option<UserRecord>, StoreError> {
        let path = self.slot_path(SESSION_SLOT);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    pub fn set_session(&self, user: &UserRecord) -> Result<(), StoreError> {
        let path = self.slot_path(SESSION_SLOT);
        fs::write(&path, serde_json::to_string_pretty(user)?)?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<(), StoreError> {
        let path = self.slot_path(SESSION_SLOT);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

fn default_admin() -> UserRecord {
    UserRecord {
        id: 1,
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        password: DEFAULT_ADMIN_PASSWORD.to_string(),
        role: Role::Admin,
        dept: None,
        created_at: Utc::now().to_rfc3339(),
    }
}
