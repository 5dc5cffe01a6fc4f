use rand::RngCore;
use hex::encode as hex_encode;

use crate::models::UserRecord;
use crate::store::UserStore;

/// Credential check: a linear scan for an exact match on both fields.
/// Case-sensitive, no throttling, no lockout. Comparison is plaintext on
/// purpose; see the note on `UserRecord::password`.
pub fn authenticate(store: &UserStore, username: &str, password: &str) -> Option<UserRecord> {
    let users = store.list_users().ok()?;
    users
        .into_iter()
        .find(|u| u.username == username && u.password == password)
}

/// Existence check used before registration and employee creation.
pub fn username_exists(store: &UserStore, username: &str) -> bool {
    store
        .list_users()
        .map(|users| users.iter().any(|u| u.username == username))
        .unwrap_or(false)
}

/// The fixed department labels offered in forms. Static by design, not
/// derived from stored data.
pub fn departments() -> &'static [&'static str] {
    &[
        "Computer Science",
        "Information Technology",
        "Electronics",
        "Mechanical",
        "Civil",
        "Electrical",
        "Chemical",
        "Biotechnology",
        "Other",
    ]
}

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}
