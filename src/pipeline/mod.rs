// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One pipeline invocation: validate → fetch → hydrate → publish.
//!
//! Control flow mirrors the connector contract: the configuration validator
//! gates entry; the published-events fetch is strictly sequential and must
//! complete before any fan-out begins; the two per-event fan-outs run
//! concurrently with each other; hydration and publication follow; the run
//! context is marked initialized only after every node has been published.
//! Asset materialization is decoupled: the returned [`PipelineRun`] hands
//! the host the receiving end of the publisher's asset-request channel.


use anyhow::Context;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::config::{validate_connector_config, ConnectorConfig};
use crate::fetch::{ResourceFetcher, ResourceKind, ResourceMap};
use crate::hydrate::{derive_sponsor_logo, flatten, hydrate};
use crate::model::{Speaker, Sponsorship};
use crate::publish::{AssetRequest, ContentNode, NodePublisher, NodeSink};

/// Per-run state shared with the schema augmenter.
///
/// The `initialized` flag is a write-once/read-many gate: set at the end of a
/// successful run, read at schema-declaration time. It is an explicit field
/// here rather than module-level state so nothing leaks across invocations.
#[derive(Debug, Default)]
pub struct RunContext {
    initialized: bool,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run's node set as fully initialized. Called once, after the
    /// last node of a successful run is published.
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// The outcome of a successful pipeline invocation.
#[derive(Debug)]
pub struct PipelineRun {
    /// Every node published this run, in publication order.
    pub nodes: Vec<ContentNode>,
    /// Receiving end of the asset-request channel, for the host to drain
    /// asynchronously (see [`crate::assets::drain_asset_requests`]).
    pub asset_requests: mpsc::UnboundedReceiver<AssetRequest>,
    /// Run state for the schema augmenter.
    pub context: RunContext,
}

/// Run the connector pipeline once against the configured upstream.
///
/// Fatal failures (invalid configuration, events fetch, hydration lookup)
/// abort the run with an error. A failed per-event fan-out degrades its
/// resource kind to unavailable, which surfaces as a hydration lookup error
/// for the first affected event rather than a silently thinner node set.
pub async fn run_pipeline(
    config: ConnectorConfig,
    client: Arc<dyn ApiClient>,
    sink: Arc<dyn NodeSink>,
) -> anyhow::Result<PipelineRun> {
    let config = validate_connector_config(config).context("connector configuration rejected")?;

    let fetcher = ResourceFetcher::new(client, &config);
    let events = fetcher.fetch_events().await?;

    let event_ids: Vec<String> = events
        .iter()
        .map(|event| event.readable_event_id.clone())
        .collect();

    // The two fan-outs are independent of each other; each one internally
    // joins all of its own per-event requests.
    let (speakers_result, sponsorships_result) = tokio::join!(
        fetcher.fetch_per_event(&event_ids, ResourceKind::Speakers),
        fetcher.fetch_per_event(&event_ids, ResourceKind::Sponsorships),
    );

    // All-or-nothing per kind: a failed fan-out was already logged by the
    // fetcher and yields an empty map, which hydration reports as a lookup
    // failure for the first event instead of a partial result.
    let speakers_by_event = speakers_result.unwrap_or_else(|_| ResourceMap::new());
    let sponsorships_by_event = sponsorships_result.unwrap_or_else(|_| ResourceMap::new());

    let events = hydrate(events, &speakers_by_event, &sponsorships_by_event)?;

    let speakers = flatten(&speakers_by_event)
        .into_iter()
        .map(Speaker::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let sponsorships = flatten(&sponsorships_by_event)
        .into_iter()
        .map(Sponsorship::from_record)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|sponsorship| derive_sponsor_logo(sponsorship, &config.endpoint))
        .collect::<Vec<_>>();

    let (publisher, asset_requests) = NodePublisher::new(sink, &config.endpoint);

    let mut nodes = publisher.publish(&events).await?;
    nodes.extend(publisher.publish(&speakers).await?);
    nodes.extend(publisher.publish(&sponsorships).await?);

    let mut context = RunContext::new();
    context.mark_initialized();

    Ok(PipelineRun {
        nodes,
        asset_requests,
        context,
    })
}
