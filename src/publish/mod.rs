// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod node;
mod publisher;

pub use node::{content_digest, node_id, ContentNode, NodeKind};
pub use publisher::{AssetRequest, NodePublisher, NodeSink, Publishable};
