// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Node publication and post-publish asset notifications.
//!
//! The publisher converts hydrated entities into [`ContentNode`]s in input
//! order and hands each one to the host through the [`NodeSink`] boundary.
//! For entities carrying an image reference it emits an [`AssetRequest`] on
//! an unbounded channel; nothing about that request is awaited here; the
//! host drains the channel asynchronously (see [`crate::assets`]) and a
//! failed or missing image never fails publication.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::SourceError;
use crate::model::{Event, Speaker, Sponsorship};
use crate::observability::messages::publish::{AssetRequestQueued, NodesPublished};
use crate::observability::messages::StructuredLog;
use crate::publish::{ContentNode, NodeKind};
use crate::uri;

/// Host boundary: the content graph's node store.
#[async_trait]
pub trait NodeSink: Send + Sync {
    async fn create_node(&self, node: ContentNode) -> Result<(), SourceError>;
}

/// A post-publish notification asking the host to materialize a remote image
/// and tag the resulting asset reference back onto the node.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub node_id: String,
    pub url: String,
}

/// Entities the publisher knows how to turn into nodes.
pub trait Publishable: Serialize + Send + Sync {
    const KIND: NodeKind;

    fn source_id(&self) -> &str;

    /// Relative image path in the upstream asset namespace, if this entity
    /// references one.
    fn image_path(&self) -> Option<&str> {
        None
    }
}

impl Publishable for Event {
    const KIND: NodeKind = NodeKind::Event;

    fn source_id(&self) -> &str {
        &self.id
    }

    fn image_path(&self) -> Option<&str> {
        Event::image_path(self)
    }
}

impl Publishable for Speaker {
    const KIND: NodeKind = NodeKind::Speaker;

    fn source_id(&self) -> &str {
        &self.id
    }

    fn image_path(&self) -> Option<&str> {
        Speaker::image_path(self)
    }
}

impl Publishable for Sponsorship {
    const KIND: NodeKind = NodeKind::Sponsorship;

    fn source_id(&self) -> &str {
        &self.id
    }
}

/// Publishes hydrated entities to the host's node store.
pub struct NodePublisher {
    sink: Arc<dyn NodeSink>,
    asset_tx: mpsc::UnboundedSender<AssetRequest>,
    endpoint: String,
}

impl NodePublisher {
    /// Create a publisher and the receiving end of its asset-request channel.
    pub fn new(
        sink: Arc<dyn NodeSink>,
        endpoint: &str,
    ) -> (Self, mpsc::UnboundedReceiver<AssetRequest>) {
        let (asset_tx, asset_rx) = mpsc::unbounded_channel();
        (
            Self {
                sink,
                asset_tx,
                endpoint: endpoint.to_string(),
            },
            asset_rx,
        )
    }

    /// Publish one node per entity, preserving input order.
    ///
    /// Output node count always equals input entity count; an image-bearing
    /// entity additionally queues an asset request after its node is created.
    pub async fn publish<T: Publishable>(
        &self,
        entities: &[T],
    ) -> Result<Vec<ContentNode>, SourceError> {
        let mut nodes = Vec::with_capacity(entities.len());

        for entity in entities {
            let node = ContentNode::new(T::KIND, entity.source_id(), entity)?;
            self.sink.create_node(node.clone()).await?;

            if let Some(path) = entity.image_path() {
                self.request_asset(&node.id, path);
            }

            nodes.push(node);
        }

        NodesPublished {
            node_type: T::KIND.as_str(),
            node_count: nodes.len(),
        }
        .log();

        Ok(nodes)
    }

    fn request_asset(&self, node_id: &str, relative_path: &str) {
        let url = uri::asset_url(&self.endpoint, relative_path);
        tracing::debug!("{}", AssetRequestQueued { node_id, url: &url });

        // Fire-and-forget: a dropped receiver means the host opted out of
        // asset materialization for this run.
        let _ = self.asset_tx.send(AssetRequest {
            node_id: node_id.to_string(),
            url,
        });
    }
}
