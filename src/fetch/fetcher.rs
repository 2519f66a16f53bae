// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Upstream resource retrieval: the sequential published-events fetch and the
//! concurrent per-event fan-outs.
//!
//! ## Fan-out semantics
//!
//! `fetch_per_event` dispatches one GET per event id without throttling and
//! waits for every request to settle before returning (join barrier). Failure
//! is all-or-nothing per resource kind: if any single request fails, every
//! failure is logged with its offending id, and the whole kind yields an
//! error instead of a partial map. Callers must treat that as "resource kind
//! unavailable for this run", because a partial map with silently missing keys would
//! mask fetch problems during hydration.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::ConnectorConfig;
use crate::errors::SourceError;
use crate::fetch::ResourceMap;
use crate::model::Event;
use crate::observability::messages::fetch::{
    EventsFetched, FanOutRequestFailed, FanOutStarted, ResourceKindUnavailable,
};
use crate::observability::messages::StructuredLog;
use crate::uri::{self, UriTemplate};

/// The two per-event child-resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Speakers,
    Sponsorships,
}

impl ResourceKind {
    pub fn template(&self) -> UriTemplate {
        match self {
            ResourceKind::Speakers => uri::SPEAKERS,
            ResourceKind::Sponsorships => uri::SPONSORSHIPS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Speakers => write!(f, "speakers"),
            ResourceKind::Sponsorships => write!(f, "sponsorships"),
        }
    }
}

/// Retrieves upstream resources through an [`ApiClient`].
pub struct ResourceFetcher {
    client: Arc<dyn ApiClient>,
    endpoint: String,
    token: String,
}

impl ResourceFetcher {
    pub fn new(client: Arc<dyn ApiClient>, config: &ConnectorConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        }
    }

    /// Fetch the published-events list.
    ///
    /// Fatal on any transport or status failure: downstream hydration indexes
    /// by event id universally, so no partial event set is acceptable.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, SourceError> {
        let request_uri = uri::EVENTS.resolve(&self.endpoint, &self.token, None);

        let body = self
            .client
            .get_json(&request_uri)
            .await
            .map_err(|e| SourceError::Upstream {
                uri: request_uri.clone(),
                reason: e.to_string(),
            })?;

        let records = expect_array(body).map_err(|reason| SourceError::Upstream {
            uri: request_uri,
            reason,
        })?;

        let events = records
            .into_iter()
            .map(Event::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        EventsFetched {
            event_count: events.len(),
        }
        .log();

        Ok(events)
    }

    /// Fan-out fetch of one child-resource kind for every event id.
    ///
    /// Dispatches every request concurrently (unbounded), joins all of them,
    /// and assembles the association map in `event_ids` order. Any single
    /// failure makes the whole kind unavailable; the returned error carries
    /// the first offending id.
    pub async fn fetch_per_event(
        &self,
        event_ids: &[String],
        kind: ResourceKind,
    ) -> Result<ResourceMap, SourceError> {
        tracing::debug!(
            "{}",
            FanOutStarted {
                kind,
                event_count: event_ids.len(),
            }
        );

        let mut tasks = Vec::with_capacity(event_ids.len());
        for event_id in event_ids {
            let client = self.client.clone();
            let request_uri =
                kind.template()
                    .resolve(&self.endpoint, &self.token, Some(event_id));
            let event_id = event_id.clone();

            tasks.push(tokio::spawn(async move {
                let result = fetch_group(client, &request_uri, kind, &event_id).await;
                (event_id, result)
            }));
        }

        // Join barrier: every request settles before any failure is acted on.
        let mut map = ResourceMap::new();
        let mut first_failure: Option<SourceError> = None;
        for task in tasks {
            let (event_id, result) = task.await.map_err(|e| SourceError::ResourceFetch {
                kind,
                event_id: "<join>".to_string(),
                reason: format!("fan-out task panicked: {e}"),
            })?;

            match result {
                Ok(records) => map.insert(event_id, records),
                Err(error) => {
                    FanOutRequestFailed {
                        kind,
                        event_id: &event_id,
                        error: &error,
                    }
                    .log();
                    first_failure.get_or_insert(error);
                }
            }
        }

        match first_failure {
            None => Ok(map),
            Some(error) => {
                ResourceKindUnavailable { kind }.log();
                Err(error)
            }
        }
    }
}

async fn fetch_group(
    client: Arc<dyn ApiClient>,
    request_uri: &str,
    kind: ResourceKind,
    event_id: &str,
) -> Result<Vec<Value>, SourceError> {
    let body = client
        .get_json(request_uri)
        .await
        .map_err(|e| SourceError::ResourceFetch {
            kind,
            event_id: event_id.to_string(),
            reason: e.to_string(),
        })?;

    expect_array(body).map_err(|reason| SourceError::ResourceFetch {
        kind,
        event_id: event_id.to_string(),
        reason,
    })
}

fn expect_array(body: Value) -> Result<Vec<Value>, String> {
    match body {
        Value::Array(records) => Ok(records),
        other => Err(format!("expected a JSON array, got: {other}")),
    }
}
