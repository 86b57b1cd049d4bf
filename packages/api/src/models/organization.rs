use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type OrganizationId = i64;

/// An organization as listed by `GET /organizations/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
