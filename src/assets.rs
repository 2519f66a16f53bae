// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Asset materialization: the boundary to the host's file-node subsystem.
//!
//! The publisher emits [`AssetRequest`]s on a channel; this module drains
//! that channel, asking the host to materialize each remote image and tag the
//! resulting reference back onto the node. Each request is handled
//! independently with no ordering guarantee. Materialization failure is
//! logged and swallowed: a missing or broken image never fails the run and
//! never removes a node.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::SourceError;
use crate::observability::messages::assets::{AssetFetchFailed, AssetMaterialized};
use crate::observability::messages::StructuredLog;
use crate::publish::AssetRequest;

/// Host boundary: materializes a remote file identified by a fully-qualified
/// URL into a locally stored file node.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn materialize(&self, node_id: &str, url: &str) -> Result<AssetRef, SourceError>;
}

/// A one-way link from a published node to a materialized local file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRef {
    pub node_id: String,
    pub file_node_id: String,
}

/// Drain the publisher's asset-request channel until the sending side closes.
///
/// Every request is dispatched as its own task; successes are collected,
/// failures are logged and dropped. Returns the asset references that were
/// actually materialized, in no guaranteed order.
pub async fn drain_asset_requests(
    store: Arc<dyn AssetStore>,
    mut requests: mpsc::UnboundedReceiver<AssetRequest>,
) -> Vec<AssetRef> {
    let mut tasks = Vec::new();

    while let Some(request) = requests.recv().await {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            match store.materialize(&request.node_id, &request.url).await {
                Ok(asset_ref) => {
                    tracing::debug!(
                        "{}",
                        AssetMaterialized {
                            node_id: &request.node_id,
                            url: &request.url,
                        }
                    );
                    Some(asset_ref)
                }
                Err(error) => {
                    AssetFetchFailed {
                        node_id: &request.node_id,
                        url: &request.url,
                        error: &error,
                    }
                    .log();
                    None
                }
            }
        }));
    }

    let mut materialized = Vec::new();
    for task in tasks {
        if let Ok(Some(asset_ref)) = task.await {
            materialized.push(asset_ref);
        }
    }
    materialized
}
