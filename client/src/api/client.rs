use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shared::types::ErrorBody;
use shared::types::app_config::ApiConfig;

use crate::router::Navigator;
use crate::session::SessionStore;

use super::error::ApiError;
use super::params::QueryParams;
use super::policy::{AuthAction, auth_policy};

/// The one HTTP boundary to the backend.
///
/// Owns the transport, the API root, and clones of the session store and
/// navigator. Two cross-cutting behaviors live here and nowhere else:
///
///   - every outgoing request carries `Authorization: Bearer <token>`
///     while a credential is active;
///   - every incoming response is run through [`auth_policy`]; a
///     `ClearSession` verdict drops the credential and lands the user at
///     login (idempotent when already there), regardless of which store
///     issued the request.
///
/// Cheaply cloneable; every store holds its own clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: SessionStore,
    navigator: Navigator,
}

impl ApiClient {
    pub fn new(
        cfg: &ApiConfig,
        session: SessionStore,
        navigator: Navigator,
    ) -> Result<Self, ApiError> {
        let base = cfg.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&cfg.accept)
                .unwrap_or_else(|_| HeaderValue::from_static("application/json")),
        );

        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            http,
            base,
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Paths are concatenated, not RFC-joined: the API root may carry a
    /// path prefix (`…/api`) that `Url::join` would otherwise discard for
    /// absolute paths.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // ── Verbs ─────────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ApiError> {
        self.execute(self.http.get(self.url(path)).query(query.as_pairs()))
            .await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST with no body (e.g. scan endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(path))).await
    }

    /// POST carrying parameters in the query string instead of a body.
    pub async fn post_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(path)).query(query.as_pairs()))
            .await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<serde_json::Value>(self.http.delete(self.url(path)))
            .await
            .map(|_| ())
    }

    // ── Response pipeline ─────────────────────────────────────────────────────

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        debug!("Backend answered {}", status);

        if auth_policy(status) == AuthAction::ClearSession {
            warn!("Backend rejected the session ({}); clearing credential", status);
            self.session.clear();
            self.navigator.force_login();
        }

        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.ok().and_then(|b| b.message);
            return Err(ApiError::Status { status, message });
        }

        let text = response.text().await?;
        let trimmed = text.trim();
        // Some mutation endpoints answer 200 with an empty body; decode
        // that as JSON null so `Value` and `Option<T>` targets accept it.
        let effective = if trimmed.is_empty() { "null" } else { trimmed };
        serde_json::from_str(effective).map_err(ApiError::Decode)
    }
}
