// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Type tag carried by every published node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Event,
    Speaker,
    Sponsorship,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Event => "Event",
            NodeKind::Speaker => "Speaker",
            NodeKind::Sponsorship => "Sponsorship",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit of publication to the host's content graph.
///
/// Identity is stable across runs: the same source record id always yields
/// the same node id, so downstream consumers can diff node sets between runs.
/// The digest is a pure function of the serialized content bytes; identical
/// content always produces an identical digest, which is the
/// content-addressing contract change detection relies on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentNode {
    pub id: String,
    pub kind: NodeKind,
    /// Node ids of children. Always empty at publication; the host may attach
    /// children (for example materialized file nodes) afterwards.
    pub children: Vec<String>,
    /// Parent node id. Source nodes have no parent.
    pub parent: Option<String>,
    /// Serialized JSON of the source entity.
    pub content: String,
    /// Lowercase hex SHA-256 of `content`.
    pub digest: String,
}

impl ContentNode {
    /// Build a node for `entity`, serializing it and digesting the result.
    pub fn new<T: Serialize>(
        kind: NodeKind,
        source_id: &str,
        entity: &T,
    ) -> Result<Self, serde_json::Error> {
        let content = serde_json::to_string(entity)?;
        let digest = content_digest(content.as_bytes());

        Ok(Self {
            id: node_id(kind, source_id),
            kind,
            children: Vec::new(),
            parent: None,
            content,
            digest,
        })
    }
}

/// Stable node identity for a source record: `{Kind}-{source id}`.
pub fn node_id(kind: NodeKind, source_id: &str) -> String {
    format!("{}-{}", kind.as_str(), source_id)
}

/// Lowercase hex SHA-256 over content bytes.
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digest_is_deterministic() {
        let content = br#"{"id":"E1","title":"First"}"#;
        assert_eq!(content_digest(content), content_digest(content));
    }

    #[test]
    fn test_digest_differs_for_different_content() {
        assert_ne!(content_digest(b"{\"a\":1}"), content_digest(b"{\"a\":2}"));
    }

    #[test]
    fn test_node_identity_is_stable_per_source_id() {
        assert_eq!(node_id(NodeKind::Event, "7"), "Event-7");
        assert_eq!(node_id(NodeKind::Event, "7"), node_id(NodeKind::Event, "7"));
        assert_ne!(
            node_id(NodeKind::Speaker, "7"),
            node_id(NodeKind::Sponsorship, "7")
        );
    }

    #[test]
    fn test_new_node_has_no_structure() {
        let node = ContentNode::new(NodeKind::Speaker, "S1", &json!({ "id": "S1" })).unwrap();
        assert!(node.children.is_empty());
        assert!(node.parent.is_none());
        assert_eq!(node.id, "Speaker-S1");
        assert_eq!(node.digest, content_digest(node.content.as_bytes()));
    }
}
