//! Kudo records and their display helpers.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::user::kudo_noun;
use super::UserId;

pub type KudoId = i64;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// A kudo as listed by `GET /kudos/received/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kudo {
    pub id: KudoId,
    #[serde(default)]
    pub sender: Option<UserId>,
    #[serde(default)]
    pub receiver: Option<UserId>,
    pub sender_username: String,
    #[serde(default)]
    pub receiver_username: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Kudo {
    /// Relative label in the viewer's local time zone.
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        time_ago(self.created_at, now, &Local)
    }

    /// Absolute timestamp in the viewer's local time zone.
    pub fn formatted_date(&self) -> String {
        format_timestamp(self.created_at, &Local)
    }
}

/// Body of `POST /kudos/`. The backend echoes it back on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KudoSubmission {
    pub receiver: UserId,
    pub message: String,
}

/// "You've received N kudo(s)!" header text.
pub fn received_count_label(count: usize) -> String {
    format!("You've received {count} {}!", kudo_noun(count))
}

/// `just now`, `N minutes ago`, `N hours ago`, `N days ago`, or the absolute
/// date once the kudo is a week old. Timestamps in the future count as "just now".
pub fn time_ago<Tz>(created_at: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs = (now - created_at).num_seconds();
    if secs < MINUTE {
        "just now".to_string()
    } else if secs < HOUR {
        format!("{} minutes ago", secs / MINUTE)
    } else if secs < DAY {
        format!("{} hours ago", secs / HOUR)
    } else if secs < WEEK {
        format!("{} days ago", secs / DAY)
    } else {
        format_timestamp(created_at, tz)
    }
}

/// e.g. `Oct 8, 2026, 02:05 PM`.
pub fn format_timestamp<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%b %-d, %Y, %I:%M %p").to_string()
}
