use serde::{Deserialize, Serialize};

/// A user as rendered in the dashboard tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u64,
    pub username: String,
    pub role_label: String,
    pub is_student: bool,
    pub dept: String,
    pub created: String,
}
