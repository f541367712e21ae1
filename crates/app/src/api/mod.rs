//! Thin typed client over the Staffdeck backend.
//!
//! Endpoint wrappers live in [`owner`], [`public`], and [`tenant`], grouped
//! by the credential slot they send.

pub mod owner;
pub mod public;
pub mod tenant;

use crate::config;
use crate::session::{self, ActorClass};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::ApiError;

/// JSON/multipart HTTP client bound to at most one credential slot.
/// The token is read from the session store at send time, so a login that
/// happens after construction is still picked up.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    actor: Option<ActorClass>,
}

impl ApiClient {
    pub fn for_actor(actor: ActorClass) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            actor: Some(actor),
        }
    }

    pub fn public() -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            actor: None,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.actor.and_then(session::token) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(config::api_url(path)));
        Self::run(path, request).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(config::api_url(path)).json(body));
        Self::run(path, request).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.patch(config::api_url(path)).json(body));
        Self::run(path, request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.delete(config::api_url(path)));
        Self::run(path, request).await
    }

    /// DELETE carrying a JSON body; some bulk endpoints identify their
    /// target in the body rather than the path.
    pub async fn delete_with_body<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.delete(config::api_url(path)).json(body));
        Self::run(path, request).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(config::api_url(path)).multipart(form));
        Self::run(path, request).await
    }

    async fn run<T: DeserializeOwned>(
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(path, status, "request rejected");
            return Err(ApiError::from_response_body(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(path, %e, "unexpected response shape");
            ApiError::Decode(e.to_string())
        })
    }
}

/// An uploaded file flattened into the bytes a multipart part needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub field: &'static str,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn attach(self, form: reqwest::multipart::Form) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.bytes).file_name(self.file_name);
        form.part(self.field, part)
    }
}
