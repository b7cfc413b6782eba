//! HTTP access to the conversion backend.
//!
//! Flows describe what they want as an [`ApiRequest`] and hand it to a
//! [`BackendClient`]. The production client talks to the backend over
//! reqwest; tests swap in [`super::mock::MockBackend`].

use super::ApiError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// A request the app knows how to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Get {
        path: String,
    },
    /// POST with a multipart body holding a single file part
    Multipart {
        path: String,
        field: String,
        file_name: String,
        mime: Option<&'static str>,
        bytes: Vec<u8>,
    },
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        ApiRequest::Get {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ApiRequest::Get { path } | ApiRequest::Multipart { path, .. } => path,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            ApiRequest::Get { .. } => "GET",
            ApiRequest::Multipart { .. } => "POST",
        }
    }

    /// `"METHOD /path"`, used for logging and for matching mock responses.
    pub fn key(&self) -> String {
        format!("{} {}", self.method(), self.path())
    }
}

/// Buffered response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Send one request and buffer the whole response.
    ///
    /// Any status code is returned as `Ok`; only transport failures are errors.
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError>;

    /// Base URL the client points at, for display.
    fn base_url(&self) -> &str;
}

#[derive(Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl BackendClient for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url(request.path());
        log::debug!("{} ({})", request.key(), url);

        let builder = match request {
            ApiRequest::Get { .. } => self.client.get(&url),
            ApiRequest::Multipart {
                field,
                file_name,
                mime,
                bytes,
                ..
            } => {
                let mut part = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime {
                    part = part.mime_str(mime)?;
                }
                self.client.post(&url).multipart(Form::new().part(field, part))
            }
        };

        let response = builder.send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} answered {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
