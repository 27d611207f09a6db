//! API Client
//!
//! Shared HTTP plumbing plus the `/auth/*` endpoints.

use reqwest::{RequestBuilder, Response};
use tracing::{debug, warn};

use super::resource::ResourceClient;
use super::wire::{ErrorBody, SignUpResponse};
use crate::config::AppConfig;
use crate::domain::{Credentials, Entity, Session, SignUpRequest};
use crate::error::ApiError;

/// Todo backend client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.as_str())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resource client for entity `E`, authorized with `token`
    pub fn resource<E: Entity>(&self, token: Option<String>) -> ResourceClient<E> {
        ResourceClient::new(self.clone(), token)
    }

    // ========================
    // Auth Endpoints
    // ========================

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        debug!(email = %credentials.email, "POST /auth/login");
        let request = self.http.post(self.url("/auth/login")).json(credentials);
        let response = self.send(request).await?;
        let body: serde_json::Value = response.json().await?;
        let session =
            Session::from_login_body(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        if !session.has_token() {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        }
        Ok(session)
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        debug!(email = %request.email, "POST /auth/signup");
        let builder = self.http.post(self.url("/auth/signup")).json(request);
        let response = self.send(builder).await?;
        let status = response.status().as_u16();
        let body: SignUpResponse = response.json().await?;
        if body.success {
            Ok(())
        } else {
            warn!(status, "signup was not acknowledged");
            Err(ApiError::Server {
                status,
                message: body.message,
            })
        }
    }

    /// `POST /auth/signout`
    pub async fn signout(&self, token: &str) -> Result<(), ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::Auth);
        }
        debug!("POST /auth/signout");
        let request = self.http.post(self.url("/auth/signout")).bearer_auth(token);
        self.send(request).await.map(drop)
    }

    // ========================
    // Transport
    // ========================

    /// Send a request, turning non-2xx responses into `ApiError::Server`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|err| {
            warn!(%err, "request failed");
            ApiError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&raw);
        debug!(status = status.as_u16(), ?message, "server rejected request");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
