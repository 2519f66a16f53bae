// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Schema augmentation: relationship fields declared to the host.
//!
//! The Event node type exposes `speakers` and `sponsorships` as
//! resolver-backed relationship fields. A source node stores only an ordered
//! id sequence; resolution to full nodes of the target type happens at query
//! time by id lookup. Declarations are only handed out once the run's node
//! set has been fully initialized, so the host never receives a schema for a
//! type that had no successful run.

use crate::pipeline::RunContext;
use crate::publish::{node_id, ContentNode, NodeKind};

/// A relationship field on a node type, resolved by id lookup at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipField {
    pub node_type: NodeKind,
    pub field: &'static str,
    pub target_type: NodeKind,
}

impl RelationshipField {
    /// Resolve a stored id sequence against a set of candidate nodes,
    /// preserving the stored order. Ids without a matching node are skipped;
    /// resolution is lazy and tolerant by design.
    pub fn resolve<'a>(
        &self,
        source_ids: &[String],
        nodes: &'a [ContentNode],
    ) -> Vec<&'a ContentNode> {
        source_ids
            .iter()
            .filter_map(|source_id| {
                let wanted = node_id(self.target_type, source_id);
                nodes.iter().find(|node| node.id == wanted)
            })
            .collect()
    }
}

/// Declare the Event type's relationship fields.
///
/// Returns `None` until the run context has been marked initialized (set once
/// at successful run completion).
pub fn declare_event_relationships(run: &RunContext) -> Option<[RelationshipField; 2]> {
    if !run.is_initialized() {
        return None;
    }

    Some([
        RelationshipField {
            node_type: NodeKind::Event,
            field: "speakers",
            target_type: NodeKind::Speaker,
        },
        RelationshipField {
            node_type: NodeKind::Event,
            field: "sponsorships",
            target_type: NodeKind::Sponsorship,
        },
    ])
}
