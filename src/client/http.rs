// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP client adapter for the upstream event-management API.
//!
//! Every request is a GET with two fixed headers: `Content-Type:
//! application/json` and `Origin: {origin}` from the connector configuration.
//! The adapter is the pure I/O boundary; URI composition happens upstream in
//! [`crate::uri`] and response interpretation downstream in [`crate::fetch`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN};
use serde_json::Value;

use crate::config::ConnectorConfig;
use crate::errors::SourceError;

/// Transport abstraction for JSON GET requests.
///
/// The fetch layer depends on this trait rather than a concrete client so
/// tests can substitute canned responses.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue a GET against `uri` and decode the response body as JSON.
    ///
    /// A non-success HTTP status is an error; the adapter never returns a
    /// body for 4xx/5xx responses.
    async fn get_json(&self, uri: &str) -> Result<Value, SourceError>;
}

/// Production [`ApiClient`] backed by `reqwest` with the fixed header set.
pub struct HttpApiClient {
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Build a client carrying the connector's fixed headers.
    pub fn new(config: &ConnectorConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(&config.origin).map_err(|e| {
                SourceError::ClientConstruction(format!(
                    "origin '{}' is not a valid header value: {}",
                    config.origin, e
                ))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_json(&self, uri: &str) -> Result<Value, SourceError> {
        let response = self.client.get(uri).send().await?;
        let response = response.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
