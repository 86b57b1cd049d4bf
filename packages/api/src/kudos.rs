//! # Sending and receiving kudos
//!
//! ## Send form
//!
//! [`KudoDraft`] holds what the user has typed. It validates client-side before
//! anything touches the network: a receiver must be chosen and the trimmed message
//! must be non-empty. Messages are capped at [`MAX_MESSAGE_LEN`] characters at input
//! time.
//!
//! [`KudoFormState`] wraps the draft with the in-flight flag and the error/success
//! banners. A submission is split in two halves so views can release their state
//! borrow across the `await`:
//!
//! 1. [`begin`](KudoFormState::begin) validates and marks the form as sending;
//! 2. [`finish`](KudoFormState::finish) applies the backend result. On success the
//!    draft is cleared and the caller is expected to bump the
//!    [`RefreshTrigger`](crate::RefreshTrigger) so the allowance is refetched.
//!
//! The success banner is transient. `finish` hands out a [`Ticket`] for it and
//! [`dismiss_success`](KudoFormState::dismiss_success) only clears the banner that
//! ticket belongs to, so an old timer cannot hide a newer banner.
//!
//! ## Received feed
//!
//! [`ReceivedFeed`] is what the received-kudos view renders; it is always
//! replaced wholesale.

use tracing::info;

use crate::client::KudosBackend;
use crate::error::ApiError;
use crate::models::{Kudo, KudoSubmission, UserId};
use crate::sequence::{Sequencer, Ticket};

pub const MAX_MESSAGE_LEN: usize = 500;

pub const SENT_MESSAGE: &str = "Kudo sent successfully!";

/// Client-side validation failure. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a user and enter a message.")]
    MissingReceiver,

    #[error("Please select a user and enter a message.")]
    EmptyMessage,
}

/// Send-form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KudoDraft {
    receiver: Option<UserId>,
    message: String,
}

impl KudoDraft {
    pub fn new(receiver: Option<UserId>, message: &str) -> Self {
        let mut draft = Self {
            receiver,
            message: String::new(),
        };
        draft.set_message(message);
        draft
    }

    pub fn receiver(&self) -> Option<UserId> {
        self.receiver
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_receiver(&mut self, receiver: Option<UserId>) {
        self.receiver = receiver;
    }

    /// Parse a `<select>` value ("" means no receiver).
    pub fn set_receiver_raw(&mut self, raw: &str) {
        self.receiver = raw.trim().parse().ok();
    }

    /// Replace the message, truncating to [`MAX_MESSAGE_LEN`] characters.
    pub fn set_message(&mut self, text: &str) {
        self.message = match text.char_indices().nth(MAX_MESSAGE_LEN) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text.to_string(),
        };
    }

    pub fn char_count(&self) -> usize {
        self.message.chars().count()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the submission with the trimmed message.
    pub fn validate(&self) -> Result<KudoSubmission, ValidationError> {
        let receiver = self.receiver.ok_or(ValidationError::MissingReceiver)?;
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(KudoSubmission {
            receiver,
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Send-form state including banners and the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KudoFormState {
    pub draft: KudoDraft,
    pub sending: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    banner: Sequencer,
}

impl KudoFormState {
    /// The submit control is enabled only when idle and valid.
    pub fn can_submit(&self) -> bool {
        !self.sending && self.draft.is_valid()
    }

    /// Validate and mark the form as sending. On validation failure the error
    /// banner is set and `None` is returned.
    pub fn begin(&mut self) -> Option<KudoSubmission> {
        if self.sending {
            return None;
        }
        match self.draft.validate() {
            Ok(submission) => {
                self.sending = true;
                self.error = None;
                self.hide_success();
                Some(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the backend result. On success returns the ticket of the success
    /// banner, for a later [`dismiss_success`](Self::dismiss_success).
    pub fn finish(&mut self, result: Result<KudoSubmission, ApiError>) -> Option<Ticket> {
        self.sending = false;
        match result {
            Ok(sent) => {
                info!(receiver = sent.receiver, "Kudo sent");
                self.draft.clear();
                self.success = Some(SENT_MESSAGE.to_string());
                Some(self.banner.issue())
            }
            Err(e) => {
                self.error = Some(format!("Failed to send kudo: {e}"));
                None
            }
        }
    }

    /// Hide the success banner shown for `ticket`. Returns `false` if a newer
    /// banner replaced it.
    pub fn dismiss_success(&mut self, ticket: Ticket) -> bool {
        if !self.banner.is_current(ticket) {
            return false;
        }
        self.hide_success();
        true
    }

    fn hide_success(&mut self) {
        self.success = None;
        self.banner.invalidate();
    }
}

/// What the received-kudos view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ReceivedFeed {
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<Kudo>),
}

impl From<Result<Vec<Kudo>, ApiError>> for ReceivedFeed {
    fn from(result: Result<Vec<Kudo>, ApiError>) -> Self {
        match result {
            Ok(kudos) if kudos.is_empty() => ReceivedFeed::Empty,
            Ok(kudos) => ReceivedFeed::Loaded(kudos),
            Err(e) => ReceivedFeed::Failed(format!("Failed to load kudos: {e}")),
        }
    }
}

/// Fetch the full received list for the remembered identity.
pub async fn load_received<B: KudosBackend>(backend: &B) -> ReceivedFeed {
    backend.received_kudos().await.into()
}
