use serde::{Deserialize, Serialize};

/// Role a user holds across the whole portal. Governs which dashboard the
/// user lands on and which mutations are permitted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees everything; creates employee accounts.
    Admin,
    /// Sees everything; may delete student accounts.
    Employee,
    /// Read-only view of their own record.
    Student,
}

impl Role {
    /// Human-readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Student => "Student",
        }
    }

    /// Parse from the string value stored in JSON.
    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Serialise to the string value stored in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Student => "student",
        }
    }

    /// All valid roles, in display order.
    pub fn all() -> &'static [Role] {
        &[Role::Admin, Role::Employee, Role::Student]
    }

    /// The dashboard path a user with this role is sent to.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Employee => "/employee",
            Role::Student => "/student",
        }
    }
}
