//! Remote List Resources
//!
//! CRUD contract against a server-owned collection, generic over entity kind,
//! and its HTTP implementation (`/{kind}/list`, `/{kind}/create`, ...).

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

use super::api::ApiClient;
use super::wire::ListEnvelope;
use crate::domain::Entity;
use crate::error::ApiError;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Remote collection of `E`.
///
/// Futures are `?Send`: in the browser every request runs on the single
/// UI thread.
#[async_trait(?Send)]
pub trait RemoteResource<E: Entity> {
    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<E>, ApiError>;

    async fn create(&self, input: &E::Input) -> Result<(), ApiError>;

    async fn update(&self, id: &str, input: &E::Input) -> Result<(), ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of [`RemoteResource`] carrying the session token
pub struct ResourceClient<E> {
    api: ApiClient,
    token: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ResourceClient<E> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            token: self.token.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for ResourceClient<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.api.base_url())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl<E: Entity> ResourceClient<E> {
    pub fn new(api: ApiClient, token: Option<String>) -> Self {
        Self {
            api,
            token,
            _entity: PhantomData,
        }
    }

    /// Precondition for every call; checked before any I/O.
    fn token(&self) -> Result<&str, ApiError> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ApiError::Auth)
    }

    fn collection_url(&self, action: &str) -> String {
        self.api.url(&format!("/{}/{}", E::KIND, action))
    }

    fn item_url(&self, action: &str, id: &str) -> String {
        self.api.url(&format!(
            "/{}/{}/{}",
            E::KIND,
            action,
            utf8_percent_encode(id, PATH_SEGMENT)
        ))
    }
}

#[async_trait(?Send)]
impl<E: Entity> RemoteResource<E> for ResourceClient<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        let token = self.token()?;
        debug!(kind = E::KIND, "POST /{}/list", E::KIND);
        let request = self.api.http().post(self.collection_url("list")).bearer_auth(token);
        let response = self.api.send(request).await?;
        let envelope: ListEnvelope<E> = response.json().await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn create(&self, input: &E::Input) -> Result<(), ApiError> {
        let token = self.token()?;
        debug!(kind = E::KIND, "POST /{}/create", E::KIND);
        let request = self
            .api
            .http()
            .post(self.collection_url("create"))
            .bearer_auth(token)
            .json(input);
        self.api.send(request).await.map(drop)
    }

    async fn update(&self, id: &str, input: &E::Input) -> Result<(), ApiError> {
        let token = self.token()?;
        debug!(kind = E::KIND, id, "PUT /{}/update", E::KIND);
        let request = self
            .api
            .http()
            .put(self.item_url("update", id))
            .bearer_auth(token)
            .json(input);
        self.api.send(request).await.map(drop)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.token()?;
        debug!(kind = E::KIND, id, "DELETE /{}/delete", E::KIND);
        let request = self
            .api
            .http()
            .delete(self.item_url("delete", id))
            .bearer_auth(token);
        self.api.send(request).await.map(drop)
    }
}
