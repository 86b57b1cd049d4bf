//! # User models
//!
//! The backend serialises users in two shapes:
//!
//! ## [`UserSummary`]
//!
//! Returned by `GET /users/me/`. Carries everything the identity/quota view needs:
//!
//! - `id`, `username`, `email`.
//! - `organization` / `organization_name`: the owning organization.
//! - `remaining_kudos`: how many kudos the user may still send this week. The
//!   backend computes it; the client never adjusts it locally.
//! - `created_at`: account creation time, informational only.
//!
//! ## [`UserRef`]
//!
//! Returned by the colleague list (`GET /users/`) and organization member list
//! (`GET /organizations/{id}/users/`): just enough to render a picker entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OrganizationId;

pub type UserId = i64;

/// Full view of the current user, replaced wholesale on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: Option<OrganizationId>,
    #[serde(default)]
    pub organization_name: String,
    pub remaining_kudos: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserSummary {
    /// Whether the weekly allowance still permits sending.
    pub fn can_send(&self) -> bool {
        self.remaining_kudos > 0
    }

    /// "kudo" or "kudos" to match `remaining_kudos`.
    pub fn allowance_noun(&self) -> &'static str {
        kudo_noun(self.remaining_kudos as usize)
    }
}

/// Picker entry for a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub organization_name: String,
}

impl From<&UserSummary> for UserRef {
    fn from(user: &UserSummary) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            organization_name: user.organization_name.clone(),
        }
    }
}

pub(crate) fn kudo_noun(count: usize) -> &'static str {
    if count == 1 {
        "kudo"
    } else {
        "kudos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_current_user() {
        let json = r#"{
            "id": 42,
            "username": "alice",
            "email": "alice@acme.test",
            "organization": 1,
            "organization_name": "Acme",
            "remaining_kudos": 2,
            "created_at": "2026-10-01T09:30:00.123456Z"
        }"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.organization, Some(1));
        assert_eq!(user.organization_name, "Acme");
        assert_eq!(user.remaining_kudos, 2);
        assert!(user.created_at.is_some());
        assert!(user.can_send());
        assert_eq!(user.allowance_noun(), "kudos");
    }

    #[test]
    fn test_deserialize_simple_user() {
        let json = r#"[{"id": 7, "username": "bob", "organization_name": "Acme"}]"#;
        let users: Vec<UserRef> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "bob");
    }

    #[test]
    fn test_negative_allowance_is_rejected() {
        let json = r#"{"id": 1, "username": "x", "remaining_kudos": -1}"#;
        assert!(serde_json::from_str::<UserSummary>(json).is_err());
    }

    #[test]
    fn test_singular_noun() {
        assert_eq!(kudo_noun(1), "kudo");
        assert_eq!(kudo_noun(0), "kudos");
        assert_eq!(kudo_noun(3), "kudos");
    }
}
