//! In-memory backend used by the unit tests.
//!
//! Mirrors the kudos backend's rules closely enough for the client flows:
//! identities resolve by numeric id, colleagues are the same-organization users
//! minus the caller, sending decrements the sender's weekly allowance.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::Utc;
use store::{Identity, IdentityStore, MemoryIdentityStore};

use crate::client::KudosBackend;
use crate::error::ApiError;
use crate::models::{Kudo, KudoSubmission, Organization, OrganizationId, UserId, UserRef, UserSummary};

pub(crate) fn user(id: UserId, username: &str, org: OrganizationId, remaining: u32) -> UserSummary {
    UserSummary {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        organization: Some(org),
        organization_name: format!("Org {org}"),
        remaining_kudos: remaining,
        created_at: None,
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    identity: MemoryIdentityStore,
    users: RefCell<Vec<UserSummary>>,
    kudos: RefCell<Vec<Kudo>>,
    org_users: RefCell<HashMap<OrganizationId, Result<Vec<UserRef>, ApiError>>>,
    current_user_error: RefCell<Option<ApiError>>,
    colleagues_error: RefCell<Option<ApiError>>,
    send_error: RefCell<Option<ApiError>>,
    received_error: RefCell<Option<ApiError>>,
    calls: Cell<usize>,
    sent: Cell<usize>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_user(self, user: UserSummary) -> Self {
        self.users.borrow_mut().push(user);
        self
    }

    pub(crate) fn with_org_users(self, org: OrganizationId, result: Result<Vec<UserRef>, ApiError>) -> Self {
        self.org_users.borrow_mut().insert(org, result);
        self
    }

    pub(crate) fn fail_current_user(&self, err: ApiError) {
        *self.current_user_error.borrow_mut() = Some(err);
    }

    pub(crate) fn fail_colleagues(&self, err: ApiError) {
        *self.colleagues_error.borrow_mut() = Some(err);
    }

    pub(crate) fn fail_send(&self, err: ApiError) {
        *self.send_error.borrow_mut() = Some(err);
    }

    pub(crate) fn fail_received(&self, err: ApiError) {
        *self.received_error.borrow_mut() = Some(err);
    }

    pub(crate) fn clear_failures(&self) {
        *self.current_user_error.borrow_mut() = None;
        *self.colleagues_error.borrow_mut() = None;
        *self.send_error.borrow_mut() = None;
        *self.received_error.borrow_mut() = None;
    }

    /// Total number of backend operations issued.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Number of successful `send_kudo` calls.
    pub(crate) fn sent(&self) -> usize {
        self.sent.get()
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn caller(&self) -> Result<UserSummary, ApiError> {
        let id: UserId = self
            .identity
            .load()
            .and_then(|identity| identity.as_str().parse().ok())
            .ok_or(ApiError::InvalidIdentity)?;
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::InvalidIdentity)
    }
}

impl KudosBackend for FakeBackend {
    fn identity(&self) -> Option<Identity> {
        self.identity.load()
    }

    fn set_identity(&self, identity: Option<&Identity>) {
        self.identity.save(identity);
    }

    async fn current_user(&self) -> Result<UserSummary, ApiError> {
        self.record_call();
        if let Some(err) = self.current_user_error.borrow().clone() {
            return Err(err);
        }
        self.caller()
    }

    async fn colleagues(&self) -> Result<Vec<UserRef>, ApiError> {
        self.record_call();
        if let Some(err) = self.colleagues_error.borrow().clone() {
            return Err(err);
        }
        let me = self.caller()?;
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.organization == me.organization && u.id != me.id)
            .map(UserRef::from)
            .collect())
    }

    async fn organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.record_call();
        let mut ids: Vec<OrganizationId> = self
            .users
            .borrow()
            .iter()
            .filter_map(|u| u.organization)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids
            .into_iter()
            .map(|id| Organization {
                id,
                name: format!("Org {id}"),
                created_at: None,
            })
            .collect())
    }

    async fn organization_users(&self, org: OrganizationId) -> Result<Vec<UserRef>, ApiError> {
        self.record_call();
        match self.org_users.borrow().get(&org) {
            Some(result) => result.clone(),
            None => Err(ApiError::Backend {
                status: 404,
                message: "Organization not found".to_string(),
            }),
        }
    }

    async fn send_kudo(&self, submission: &KudoSubmission) -> Result<KudoSubmission, ApiError> {
        self.record_call();
        if let Some(err) = self.send_error.borrow().clone() {
            return Err(err);
        }
        let me = self.caller()?;
        if me.remaining_kudos == 0 {
            return Err(ApiError::Backend {
                status: 400,
                message: "You have no remaining kudos for this week.".to_string(),
            });
        }

        let mut users = self.users.borrow_mut();
        if let Some(sender) = users.iter_mut().find(|u| u.id == me.id) {
            sender.remaining_kudos -= 1;
        }
        let mut kudos = self.kudos.borrow_mut();
        let id = kudos.len() as i64 + 1;
        kudos.push(Kudo {
            id,
            sender: Some(me.id),
            receiver: Some(submission.receiver),
            sender_username: me.username.clone(),
            receiver_username: None,
            message: submission.message.clone(),
            created_at: Utc::now(),
        });
        self.sent.set(self.sent.get() + 1);
        Ok(submission.clone())
    }

    async fn received_kudos(&self) -> Result<Vec<Kudo>, ApiError> {
        self.record_call();
        if let Some(err) = self.received_error.borrow().clone() {
            return Err(err);
        }
        let me = self.caller()?;
        Ok(self
            .kudos
            .borrow()
            .iter()
            .filter(|k| k.receiver == Some(me.id))
            .cloned()
            .collect())
    }
}
