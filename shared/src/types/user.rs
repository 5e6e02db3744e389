use serde::{Deserialize, Serialize};

use crate::types::claims::Role;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Account record from the admin user listing. The account key is the
/// email address or, for Telegram-born accounts, the numeric channel id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email_or_telegram_id: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partial update for `PUT /admin/users/{id}`; absent fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// User row plus the inline-editing state the admin table needs. Each row
/// starts out of edit mode with the draft role seeded from the record.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub email_or_telegram_id: String,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: Option<String>,
    pub is_editing: bool,
    pub draft_role: Role,
}

impl From<UserRecord> for UserRow {
    fn from(u: UserRecord) -> Self {
        UserRow {
            email_or_telegram_id: u.email_or_telegram_id,
            draft_role: u.role.clone(),
            role: u.role,
            is_verified: u.is_verified,
            created_at: u.created_at,
            is_editing: false,
        }
    }
}

impl UserRow {
    /// Merge the backend's response to an update into this row and reseed
    /// the draft role.
    pub fn apply_update(&mut self, updated: UserRecord) {
        self.role = updated.role.clone();
        self.is_verified = updated.is_verified;
        self.created_at = updated.created_at;
        self.draft_role = updated.role;
        self.is_editing = false;
    }
}

// ---------------------------------------------------------------------------
// Query specification
// ---------------------------------------------------------------------------

pub const USERS_PAGE_SIZE: u32 = 20;

/// Filter specification for the admin user listing. `role` accepts the
/// `"all"` sentinel (dropped at query-assembly time); `is_verified` is
/// tri-state: `None` means both.
#[derive(Debug, Clone)]
pub struct UserFilter {
    pub text: Option<String>,
    pub role: Option<String>,
    pub is_verified: Option<bool>,
    pub page: u32,
    pub size: u32,
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            text: None,
            role: None,
            is_verified: None,
            page: 0,
            size: USERS_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_seeds_draft_role_from_record() {
        let record: UserRecord = serde_json::from_str(
            r#"{"emailOrTelegramId":"alice@example.com","role":"ADMIN","isVerified":true}"#,
        )
        .unwrap();
        let row = UserRow::from(record);
        assert_eq!(row.role, Role::Admin);
        assert_eq!(row.draft_role, Role::Admin);
        assert!(!row.is_editing);
        assert!(row.is_verified);
    }

    #[test]
    fn apply_update_reseeds_draft_and_leaves_edit_mode() {
        let record: UserRecord = serde_json::from_str(
            r#"{"emailOrTelegramId":"7700123456","role":"USER"}"#,
        )
        .unwrap();
        let mut row = UserRow::from(record);
        row.is_editing = true;
        row.draft_role = Role::SuperAdmin;

        let updated: UserRecord = serde_json::from_str(
            r#"{"emailOrTelegramId":"7700123456","role":"ADMIN","isVerified":true}"#,
        )
        .unwrap();
        row.apply_update(updated);
        assert_eq!(row.role, Role::Admin);
        assert_eq!(row.draft_role, Role::Admin);
        assert!(!row.is_editing);
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let payload = UserUpdate {
            role: Some(Role::Admin),
            is_verified: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"role": "ADMIN"}));
    }
}
