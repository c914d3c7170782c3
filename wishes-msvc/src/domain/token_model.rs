use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_ACCESS_TOKEN_EXPIRES_IN_SECONDS: u64 = 3600;

// Pure types for domain use
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenPayload {
    pub username: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
}

impl AccessTokenPayload {
    pub fn for_account(username: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            role,
            permissions: role.permissions().to_vec(),
        }
    }

    /// True when at least one of `required` was granted to this token.
    pub fn has_any_permission(&self, required: &[Permission]) -> bool {
        required.iter().any(|perm| self.permissions.contains(perm))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
}

// Input types
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsInput {
    pub username: String,
    pub password: String,
}

// Output types
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// Roles enum
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Writer,
    Visitor,
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => &[Permission::Read, Permission::Write, Permission::Delete],
            Role::Writer => &[Permission::Read, Permission::Write],
            Role::Visitor => &[Permission::Read],
        }
    }
}

// Permissions enum
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Read,
    Write,
    Delete,
}
