// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for upstream fetching, hydration, and publication.
//!
//! This module defines the runtime error taxonomy for a pipeline run. The
//! variants map directly onto the propagation policy: `Upstream` is fatal,
//! `ResourceFetch` degrades one resource kind to unavailable, `Lookup` aborts
//! hydration, and `AssetMaterialization` is logged and swallowed by the asset
//! drain task. All errors implement `std::error::Error` via the `thiserror`
//! crate for consistent error handling.

use crate::fetch::ResourceKind;
use thiserror::Error;

/// Runtime error type for all source-connector operations.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The top-level published-events fetch failed. Fatal: no partial event
    /// set is acceptable because hydration indexes by event id universally.
    #[error("Upstream events fetch failed ({uri}): {reason}")]
    Upstream { uri: String, reason: String },

    /// A single request within a per-event fan-out failed, which makes the
    /// whole resource kind unavailable for this run.
    #[error("Fan-out request for {kind} of event '{event_id}' failed: {reason}")]
    ResourceFetch {
        kind: ResourceKind,
        event_id: String,
        reason: String,
    },

    /// Hydration found no child-record group for an event id. Raised instead
    /// of silently substituting an empty list, which would mask fetch
    /// problems.
    #[error("No {kind} group found for event '{event_id}' during hydration")]
    Lookup {
        kind: ResourceKind,
        event_id: String,
    },

    /// A remote image could not be materialized. Non-fatal: the node persists
    /// without its asset reference.
    #[error("Asset materialization failed for '{url}': {reason}")]
    AssetMaterialization { url: String, reason: String },

    /// An upstream record was missing a field the pipeline requires (for
    /// example an event without `eventId` or `readableEventId`).
    #[error("Upstream record is malformed: {0}")]
    MalformedRecord(String),

    /// The HTTP client could not be constructed from the connector
    /// configuration.
    #[error("HTTP client construction failed: {0}")]
    ClientConstruction(String),

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
