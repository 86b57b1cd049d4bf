//! # Identity bootstrap & recovery
//!
//! On startup the client may remember an identity from a previous visit. The backend
//! is the source of truth, so that identity is resolved before anything is shown:
//!
//! ```text
//!                  identity remembered
//! Unauthenticated ─────────────────────▶ Loading
//!        ▲                                 │
//!        │  InvalidIdentity (silent)       │ current user + colleagues OK
//!        │  other failure (error shown)    ▼
//!        └──────────────────────────── Authenticated
//!                  switch user
//! ```
//!
//! Every failure path clears the stored identity. An identity the backend no longer
//! recognises (e.g. the user was deleted) heals silently; anything else leaves an
//! error message for the view to show. [`SessionFlow`] applies a run's outcome,
//! identity clearing included, only while that run is still the latest one.
//!
//! [`RefreshTrigger`] re-runs the same fetches after a kudo is sent so the displayed
//! allowance comes from the server, never from a local decrement.

use store::Identity;
use tracing::{debug, info, warn};

use crate::client::KudosBackend;
use crate::error::ApiError;
use crate::models::{UserId, UserRef, UserSummary};
use crate::sequence::{Sequencer, Ticket};

/// The signed-in user and the colleagues they can send kudos to.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user: UserSummary,
    pub colleagues: Vec<UserRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Loading,
    Authenticated(AuthenticatedUser),
}

impl SessionState {
    /// Starting state for a page load.
    pub fn initial(identity: Option<&Identity>) -> Self {
        match identity {
            Some(_) => SessionState::Loading,
            None => SessionState::Unauthenticated,
        }
    }

    pub fn user(&self) -> Option<&UserSummary> {
        match self {
            SessionState::Authenticated(auth) => Some(&auth.user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Result of one bootstrap run: the next state, an error to surface, and whether
/// the remembered identity must be forgotten.
///
/// Running a bootstrap never writes the identity store itself. Only
/// [`SessionFlow::apply`] does, and only for the latest run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub state: SessionState,
    pub error: Option<String>,
    pub clear_identity: bool,
}

impl Bootstrap {
    fn unauthenticated(error: Option<String>, clear_identity: bool) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            error,
            clear_identity,
        }
    }
}

/// Resolve the remembered identity into a session.
///
/// Without a remembered identity this returns `Unauthenticated` without touching
/// the network.
pub async fn bootstrap<B: KudosBackend>(backend: &B) -> Bootstrap {
    let Some(identity) = backend.identity() else {
        return Bootstrap::unauthenticated(None, false);
    };

    match load_authenticated(backend).await {
        Ok(auth) => {
            info!(user = %auth.user.username, remaining = auth.user.remaining_kudos, "Session loaded");
            Bootstrap {
                state: SessionState::Authenticated(auth),
                error: None,
                clear_identity: false,
            }
        }
        Err(ApiError::InvalidIdentity) => {
            info!(%identity, "Stored identity is no longer valid");
            Bootstrap::unauthenticated(None, true)
        }
        Err(e) => {
            warn!(%identity, error = %e, "Failed to load user data");
            Bootstrap::unauthenticated(Some(format!("Failed to load user data: {e}")), true)
        }
    }
}

async fn load_authenticated<B: KudosBackend>(backend: &B) -> Result<AuthenticatedUser, ApiError> {
    let user = backend.current_user().await?;
    let colleagues = backend.colleagues().await?;
    Ok(AuthenticatedUser { user, colleagues })
}

/// Session state plus the ticket bookkeeping that keeps it consistent with the
/// identity store.
///
/// Every bootstrap run is started through this type and gets a [`Ticket`]. A run's
/// result, including clearing the stored identity, only lands if no newer run or
/// user switch happened in the meantime.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFlow {
    pub state: SessionState,
    pub error: Option<String>,
    sequencer: Sequencer,
}

impl SessionFlow {
    pub fn new(identity: Option<&Identity>) -> Self {
        Self {
            state: SessionState::initial(identity),
            error: None,
            sequencer: Sequencer::new(),
        }
    }

    /// Start a bootstrap for whatever identity is remembered. The visible state is
    /// kept, so a refresh does not blank an authenticated view.
    pub fn begin_bootstrap(&mut self) -> Ticket {
        self.sequencer.issue()
    }

    /// Remember `user_id` and start loading its session.
    pub fn select_user<B: KudosBackend>(&mut self, backend: &B, user_id: UserId) -> Ticket {
        info!(user_id, "User selected");
        backend.set_identity(Some(&Identity::from(user_id)));
        self.error = None;
        self.state = SessionState::Loading;
        self.sequencer.issue()
    }

    /// Forget the identity and drop every run still in flight. No network call.
    pub fn switch_user<B: KudosBackend>(&mut self, backend: &B) {
        info!("Switching user");
        self.sequencer.invalidate();
        backend.set_identity(None);
        self.error = None;
        self.state = SessionState::Unauthenticated;
    }

    /// Apply the result of the run holding `ticket`. Returns `false` if the run was
    /// superseded, in which case neither the state nor the identity store changes.
    pub fn apply<B: KudosBackend>(&mut self, backend: &B, ticket: Ticket, result: Bootstrap) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!("Dropping stale session bootstrap");
            return false;
        }
        if result.clear_identity {
            backend.set_identity(None);
        }
        self.state = result.state;
        self.error = result.error;
        true
    }
}

/// Monotonically increasing counter; each bump asks the session to refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTrigger(u64);

impl RefreshTrigger {
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
