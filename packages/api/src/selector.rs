//! Organization → user picker state.
//!
//! Choosing an organization replaces the user list (never appends), clears any
//! previous error and issues a new fetch ticket. A response only lands if its
//! ticket is still current, so rapid reselection cannot show the wrong
//! organization's users.

use tracing::debug;

use crate::error::ApiError;
use crate::models::{OrganizationId, UserRef};
use crate::sequence::{Sequencer, Ticket};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorState {
    pub organization: Option<OrganizationId>,
    pub users: Vec<UserRef>,
    pub loading: bool,
    pub error: Option<String>,
    sequencer: Sequencer,
}

impl SelectorState {
    /// Change the selected organization. Returns the ticket for the fetch the
    /// caller must issue, or `None` when the selection was cleared.
    pub fn select_organization(&mut self, organization: Option<OrganizationId>) -> Option<Ticket> {
        self.organization = organization;
        self.users.clear();
        self.error = None;

        let ticket = self.sequencer.issue();
        self.loading = organization.is_some();
        organization.map(|_| ticket)
    }

    /// Parse a `<select>` value ("" means no selection).
    pub fn select_raw(&mut self, raw: &str) -> Option<(OrganizationId, Ticket)> {
        let organization = raw.trim().parse::<OrganizationId>().ok();
        let ticket = self.select_organization(organization)?;
        organization.map(|org| (org, ticket))
    }

    /// Apply a fetch result. Returns `false` if the response was stale and dropped.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<UserRef>, ApiError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!("Dropping stale organization users response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(users) => self.users = users,
            Err(e) => {
                self.users.clear();
                self.error = Some(format!("Failed to load users: {e}"));
            }
        }
        true
    }

    /// An organization is selected, its fetch succeeded, and it has no users.
    pub fn is_empty(&self) -> bool {
        self.organization.is_some() && !self.loading && self.error.is_none() && self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::KudosBackend;
    use crate::testing::FakeBackend;

    async fn load(backend: &FakeBackend, state: &mut SelectorState, organization: OrganizationId) {
        if let Some(ticket) = state.select_organization(Some(organization)) {
            let result = backend.organization_users(organization).await;
            state.apply(ticket, result);
        }
    }

    fn user_ref(id: i64, name: &str) -> UserRef {
        UserRef {
            id,
            username: name.to_string(),
            organization_name: "Acme".to_string(),
        }
    }

    #[tokio::test]
    async fn test_switching_organization_replaces_list() {
        let backend = FakeBackend::new()
            .with_org_users(1, Ok(vec![user_ref(1, "alice"), user_ref(2, "bob")]))
            .with_org_users(2, Ok(vec![user_ref(3, "carol")]));
        let mut state = SelectorState::default();

        load(&backend, &mut state, 1).await;
        assert_eq!(state.users.len(), 2);

        load(&backend, &mut state, 2).await;
        assert_eq!(state.users, vec![user_ref(3, "carol")]);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_switching_clears_previous_error() {
        let backend = FakeBackend::new().with_org_users(2, Ok(vec![user_ref(3, "carol")]));
        let mut state = SelectorState::default();

        // Organization 9 is unknown to the backend
        load(&backend, &mut state, 9).await;
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load users: Organization not found")
        );
        assert!(state.users.is_empty());
        assert!(!state.loading);

        let ticket = state.select_organization(Some(2));
        assert!(state.error.is_none());
        assert!(state.loading);
        assert!(ticket.is_some());
    }

    #[test]
    fn test_clearing_selection_issues_no_fetch() {
        let mut state = SelectorState::default();
        state.select_organization(Some(1));
        assert!(state.select_organization(None).is_none());
        assert!(!state.loading);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = SelectorState::default();
        let first = state.select_organization(Some(1)).unwrap();
        let second = state.select_organization(Some(2)).unwrap();

        // Second response arrives first
        assert!(state.apply(second, Ok(vec![user_ref(3, "carol")])));
        // First response arrives late and must not overwrite
        assert!(!state.apply(first, Ok(vec![user_ref(1, "alice")])));
        assert_eq!(state.users, vec![user_ref(3, "carol")]);
        assert_eq!(state.organization, Some(2));
    }

    #[test]
    fn test_stale_error_is_dropped() {
        let mut state = SelectorState::default();
        let first = state.select_organization(Some(1)).unwrap();
        let _second = state.select_organization(Some(2)).unwrap();

        assert!(!state.apply(first, Err(ApiError::Transport("boom".to_string()))));
        assert!(state.error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_select_raw() {
        let mut state = SelectorState::default();
        assert!(state.select_raw("").is_none());
        let (org, _) = state.select_raw("4").unwrap();
        assert_eq!(org, 4);
        assert_eq!(state.organization, Some(4));
    }

    #[test]
    fn test_empty_result() {
        let mut state = SelectorState::default();
        let ticket = state.select_organization(Some(1)).unwrap();
        assert!(!state.is_empty());
        state.apply(ticket, Ok(vec![]));
        assert!(state.is_empty());
    }
}
