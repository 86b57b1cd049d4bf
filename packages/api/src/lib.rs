//! # API crate: the kudos backend as seen from the browser
//!
//! This crate is everything the views need that is not markup: the HTTP transport
//! to the kudos backend, the wire models, and the small state machines the views
//! drive. None of it depends on Dioxus, so every flow is unit-tested against an
//! in-memory backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`KudosClient`]: base address, identity header, error normalisation. [`KudosBackend`] is the seam the flows are generic over. |
//! | [`error`] | [`ApiError`] taxonomy (invalid identity, connection failed, backend failure, bad body). |
//! | [`models`] | Users, organizations and kudos as the backend serialises them, plus `time_ago` labels. |
//! | [`session`] | Identity bootstrap & recovery: [`SessionFlow`] state machine with stale-run discard, and the refresh trigger. |
//! | [`selector`] | Organization → user picker state with stale-response discard. |
//! | [`kudos`] | Send-kudo draft validation, form state and the received-kudos feed state. |
//! | [`sequence`] | Monotonic request tickets; only the latest issued request may land. |
//!
//! ## Endpoints
//!
//! | Operation | Method & path | Identity header |
//! |-----------|---------------|-----------------|
//! | Current user | `GET /users/me/` | required |
//! | Colleagues | `GET /users/` | required |
//! | Organizations | `GET /organizations/` | no |
//! | Organization users | `GET /organizations/{id}/users/` | no |
//! | Send kudo | `POST /kudos/` | required |
//! | Received kudos | `GET /kudos/received/` | required |

pub mod client;
pub mod error;
pub mod kudos;
pub mod models;
pub mod selector;
pub mod sequence;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::{KudosBackend, KudosClient};
pub use error::ApiError;
pub use kudos::{KudoDraft, KudoFormState, ReceivedFeed, ValidationError, MAX_MESSAGE_LEN};
pub use models::{Kudo, KudoSubmission, Organization, OrganizationId, UserId, UserRef, UserSummary};
pub use selector::SelectorState;
pub use sequence::{Sequencer, Ticket};
pub use session::{AuthenticatedUser, Bootstrap, RefreshTrigger, SessionFlow, SessionState};

pub use store::{Identity, IdentityStore, KudosConfig};
