//! HTTP client for the catalog service and the text views built on top of it.

pub mod i18n;
pub mod views;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CreateProductRequest, ProductPatch, ProductResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5171";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status. `message` is the response body, or `HTTP <status>` when it was empty.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("empty response body")]
    EmptyBody,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        CatalogClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one JSON request. An empty success body yields `Ok(None)`.
    pub async fn http<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Option<T>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                text
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn expect_body<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        self.http(path, method, body)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, ClientError> {
        self.expect_body("/products", Method::GET, None).await
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductResponse, ClientError> {
        self.expect_body(&format!("/products/{id}"), Method::GET, None)
            .await
    }

    pub async fn create_product(
        &self,
        payload: &CreateProductRequest,
    ) -> Result<ProductResponse, ClientError> {
        let body = serde_json::to_value(payload)?;
        self.expect_body("/products", Method::POST, Some(body)).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<ProductResponse, ClientError> {
        let body = serde_json::to_value(patch)?;
        self.expect_body(&format!("/products/{id}"), Method::PUT, Some(body))
            .await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), ClientError> {
        self.http::<Value>(&format!("/products/{id}"), Method::DELETE, None)
            .await?;
        Ok(())
    }
}
