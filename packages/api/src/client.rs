//! # Transport/session client
//!
//! [`KudosClient`] is the single chokepoint for backend calls. It owns:
//!
//! - the configured base address (e.g. `http://localhost:8000/api`),
//! - the name of the identity header (`X-User-ID`),
//! - an [`IdentityStore`] holding the remembered identity.
//!
//! Every request goes through [`KudosClient::request`], which attaches the identity
//! header when one is remembered, sends and parses JSON, and maps every failure into
//! an [`ApiError`]. The client is a plain value handed to the views through context,
//! never a process-wide singleton, so tests construct as many as they like.
//!
//! [`KudosBackend`] abstracts the typed operations so the session, selector and form
//! flows can run against an in-memory backend in tests.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use store::config::ApiConfig;
use store::{Identity, IdentityStore};
use tracing::{debug, warn};

use crate::error::{ApiError, CURRENT_USER_PATH};
use crate::models::{Kudo, KudoSubmission, Organization, OrganizationId, UserRef, UserSummary};

const COLLEAGUES_PATH: &str = "/users/";
const ORGANIZATIONS_PATH: &str = "/organizations/";
const KUDOS_PATH: &str = "/kudos/";
const RECEIVED_KUDOS_PATH: &str = "/kudos/received/";

fn organization_users_path(org: OrganizationId) -> String {
    format!("/organizations/{org}/users/")
}

/// Typed operations against the kudos backend plus the remembered identity.
pub trait KudosBackend {
    /// The currently remembered identity, if any.
    fn identity(&self) -> Option<Identity>;

    /// Remember `identity`, or forget it with `None`.
    fn set_identity(&self, identity: Option<&Identity>);

    fn current_user(&self) -> impl Future<Output = Result<UserSummary, ApiError>>;

    /// Everyone else in the current user's organization.
    fn colleagues(&self) -> impl Future<Output = Result<Vec<UserRef>, ApiError>>;

    fn organizations(&self) -> impl Future<Output = Result<Vec<Organization>, ApiError>>;

    fn organization_users(
        &self,
        org: OrganizationId,
    ) -> impl Future<Output = Result<Vec<UserRef>, ApiError>>;

    fn send_kudo(
        &self,
        submission: &KudoSubmission,
    ) -> impl Future<Output = Result<KudoSubmission, ApiError>>;

    fn received_kudos(&self) -> impl Future<Output = Result<Vec<Kudo>, ApiError>>;
}

/// HTTP client for the kudos backend.
#[derive(Clone, Debug)]
pub struct KudosClient<S> {
    http: reqwest::Client,
    base_url: String,
    identity_header: String,
    identity: S,
}

impl<S: IdentityStore> KudosClient<S> {
    pub fn new(config: &ApiConfig, identity: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            identity_header: config.identity_header.clone(),
            identity,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against `path` (relative to the base address) and decode
    /// the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(identity) = self.identity.load() {
            request = request.header(self.identity_header.as_str(), identity.as_str());
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!(%method, path, "Sending request");
        let response = request.send().await.map_err(|e| {
            let err = self.transport_error(&e);
            warn!(%method, path, error = %e, "Request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_response(path, status.as_u16(), &body);
            if err.is_invalid_identity() {
                debug!(path, status = status.as_u16(), "Identity not recognised");
            } else {
                warn!(%method, path, status = status.as_u16(), error = %err, "Backend error");
            }
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn transport_error(&self, e: &reqwest::Error) -> ApiError {
        if e.is_decode() || e.is_body() {
            ApiError::Decode(e.to_string())
        } else if is_unreachable(e) {
            ApiError::ConnectionFailed {
                base_url: self.base_url.clone(),
            }
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_unreachable(e: &reqwest::Error) -> bool {
    e.is_connect()
}

// A rejected `fetch()` surfaces as a request error in the browser.
#[cfg(target_arch = "wasm32")]
fn is_unreachable(e: &reqwest::Error) -> bool {
    e.is_request()
}

impl<S: IdentityStore> KudosBackend for KudosClient<S> {
    fn identity(&self) -> Option<Identity> {
        self.identity.load()
    }

    fn set_identity(&self, identity: Option<&Identity>) {
        self.identity.save(identity);
    }

    async fn current_user(&self) -> Result<UserSummary, ApiError> {
        self.request(Method::GET, CURRENT_USER_PATH, None).await
    }

    async fn colleagues(&self) -> Result<Vec<UserRef>, ApiError> {
        self.request(Method::GET, COLLEAGUES_PATH, None).await
    }

    async fn organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.request(Method::GET, ORGANIZATIONS_PATH, None).await
    }

    async fn organization_users(&self, org: OrganizationId) -> Result<Vec<UserRef>, ApiError> {
        self.request(Method::GET, &organization_users_path(org), None)
            .await
    }

    async fn send_kudo(&self, submission: &KudoSubmission) -> Result<KudoSubmission, ApiError> {
        let body = serde_json::to_value(submission).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::POST, KUDOS_PATH, Some(body)).await
    }

    async fn received_kudos(&self) -> Result<Vec<Kudo>, ApiError> {
        self.request(Method::GET, RECEIVED_KUDOS_PATH, None).await
    }
}
