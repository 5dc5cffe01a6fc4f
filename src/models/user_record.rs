use serde::{Deserialize, Serialize};

use super::role::Role;

/// A stored user. Field names mirror the original storage layout, so an
/// existing `app_users` data set deserializes unchanged (`createdAt` stays
/// camel-cased on disk).
///
/// Passwords are stored and compared in plaintext on purpose: parity with
/// the existing stored data trumps hygiene here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Input for creating a record. The store assigns `id` and `createdAt`.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub dept: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_at_serializes_camel_cased() {
        let rec = UserRecord {
            id: 1,
            username: "admin".into(),
            password: "admin123".into(),
            role: Role::Admin,
            dept: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("dept").is_none());
    }

    #[test]
    fn deserializes_record_without_dept() {
        let json = r#"{"id":1,"username":"admin","password":"admin123","role":"admin","createdAt":"2024-01-01T00:00:00Z"}"#;
        let rec: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.role, Role::Admin);
        assert!(rec.dept.is_none());
    }
}
