// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for node publication events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A batch of entities was published as content nodes.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NodesPublished {
    pub node_type: &'static str,
    pub node_count: usize,
}

impl Display for NodesPublished {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Published {} {} nodes", self.node_count, self.node_type)
    }
}

impl StructuredLog for NodesPublished {
    fn log(&self) {
        tracing::info!(
            node_type = self.node_type,
            node_count = self.node_count,
            "{}", self
        );
    }
}

/// An asset materialization request was queued for a node.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct AssetRequestQueued<'a> {
    pub node_id: &'a str,
    pub url: &'a str,
}

impl Display for AssetRequestQueued<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Queued asset materialization for node '{}': {}",
            self.node_id, self.url
        )
    }
}
