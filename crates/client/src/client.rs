use std::collections::BTreeMap;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use virasat_core::resource::Resource;
use virasat_core::response::WriteAck;
use virasat_core::types::DbId;

use crate::error::ClientError;

/// HTTP client for one deployment of the content API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Body of a successful `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`, e.g.
    /// `https://virasat.example`. A trailing `/` is dropped; an empty base
    /// yields root-relative URLs.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `Authorization: Bearer <token>` on every later request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Issue one request and return the body as JSON.
    ///
    /// A non-2xx status is an error. A 2xx body that is not JSON comes back
    /// as `{"message": <body text>}`.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.inspect_err(|e| {
            tracing::error!(%method, %url, error = %e, "API request failed");
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            tracing::error!(%method, %url, status = status.as_u16(), %status_text, "API error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => {
                tracing::warn!(%url, body = %text, "Non-JSON response");
                Ok(json!({ "message": text }))
            }
        }
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        let value = self.request(method, endpoint, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Every row of a CRUD resource, newest first.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        self.request_as(Method::GET, &resource.path(), None).await
    }

    pub async fn create<B: Serialize>(
        &self,
        resource: Resource,
        body: &B,
    ) -> Result<WriteAck, ClientError> {
        let body = serde_json::to_value(body)?;
        self.request_as(Method::POST, &resource.path(), Some(&body))
            .await
    }

    /// Full overwrite of the row whose `id` is in `body`.
    pub async fn update<B: Serialize>(
        &self,
        resource: Resource,
        body: &B,
    ) -> Result<WriteAck, ClientError> {
        let body = serde_json::to_value(body)?;
        self.request_as(Method::PUT, &resource.path(), Some(&body))
            .await
    }

    pub async fn delete(&self, resource: Resource, id: DbId) -> Result<WriteAck, ClientError> {
        let endpoint = format!("{}?id={id}", resource.path());
        self.request_as(Method::DELETE, &endpoint, None).await
    }

    /// The site settings as a flat key/value map.
    pub async fn settings(&self) -> Result<BTreeMap<String, String>, ClientError> {
        self.request_as(Method::GET, &Resource::Settings.path(), None)
            .await
    }

    pub async fn update_settings(
        &self,
        settings: &BTreeMap<String, Value>,
    ) -> Result<WriteAck, ClientError> {
        let body = serde_json::to_value(settings)?;
        self.request_as(Method::PUT, &Resource::Settings.path(), Some(&body))
            .await
    }

    /// Post the public contact form.
    pub async fn submit_contact<B: Serialize>(&self, form: &B) -> Result<WriteAck, ClientError> {
        self.create(Resource::Contact, form).await
    }

    /// Log in as the admin and keep the token for later requests.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let body = json!({ "username": username, "password": password });
        let login: LoginResponse = self
            .request_as(Method::POST, "/api/auth/login", Some(&body))
            .await?;
        self.set_token(login.access_token.clone());
        Ok(login)
    }
}
