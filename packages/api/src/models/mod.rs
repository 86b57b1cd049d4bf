//! Wire models for the kudos backend.

mod kudo;
mod organization;
mod user;

pub use kudo::{format_timestamp, received_count_label, time_ago, Kudo, KudoId, KudoSubmission};
pub use organization::{Organization, OrganizationId};
pub use user::{UserId, UserRef, UserSummary};
