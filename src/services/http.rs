//! REST backend client
//!
//! A thin JSON wrapper over `reqwest`. Every request switches the loading
//! indicator on for its duration. A non-success status is turned into
//! `CourseDeskError::Http`. Any failure raises an error alert before being
//! returned to the caller unchanged.

use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::services::notification::Notifier;
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::logging::{log_api_error, log_request};

/// JSON client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    notifier: Notifier,
}

impl HttpClient {
    /// Create a new HttpClient instance
    pub fn new(config: &ApiConfig, notifier: Notifier) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::GET, endpoint, None).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// Delete a resource; whatever the backend answers with is discarded
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        let _: IgnoredAny = self.request(Method::DELETE, endpoint, None).await?;
        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let _loading = self.notifier.begin_loading();
        let started = Instant::now();

        debug!(method = %method, endpoint = endpoint, "Sending backend request");

        let outcome = match self.send(&method, endpoint, body.as_ref()).await {
            Ok((status, bytes)) => decode::<T>(&bytes).map(|value| (status, value)),
            Err(e) => Err(e),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok((status, value)) => {
                log_request(method.as_str(), endpoint, Some(status), duration_ms, true);
                Ok(value)
            }
            Err(e) => {
                let status = match &e {
                    CourseDeskError::Http { status } => Some(*status),
                    _ => None,
                };
                log_request(method.as_str(), endpoint, status, duration_ms, false);
                log_api_error("backend", &e.to_string(), Some(endpoint));
                self.notifier.error(failure_message(&method));
                Err(e)
            }
        }
    }

    async fn send(
        &self,
        method: &Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(u16, Vec<u8>)> {
        let mut builder = self.client.request(method.clone(), self.url(endpoint));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CourseDeskError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok((status.as_u16(), bytes.to_vec()))
    }
}

/// An empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        Ok(serde_json::from_slice(b"null")?)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Alert text shown when a request with this method fails
pub fn failure_message(method: &Method) -> &'static str {
    match *method {
        Method::GET => "Failed to load data",
        Method::POST => "Failed to save data",
        Method::PUT => "Failed to update data",
        Method::DELETE => "Failed to delete data",
        _ => "Request failed",
    }
}
