// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for upstream fetch and fan-out events.

use crate::fetch::ResourceKind;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Published-events fetch completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EventsFetched {
    pub event_count: usize,
}

impl Display for EventsFetched {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fetched {} published events", self.event_count)
    }
}

impl StructuredLog for EventsFetched {
    fn log(&self) {
        tracing::info!(event_count = self.event_count, "{}", self);
    }
}

/// Per-event fan-out started for one resource kind.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct FanOutStarted {
    pub kind: ResourceKind,
    pub event_count: usize,
}

impl Display for FanOutStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching {} fan-out: {} concurrent requests",
            self.kind, self.event_count
        )
    }
}

/// A single request within a fan-out failed.
///
/// # Log Level
/// `error!` - The whole resource kind becomes unavailable for this run
pub struct FanOutRequestFailed<'a> {
    pub kind: ResourceKind,
    pub event_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FanOutRequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fan-out request for {} of event '{}' failed: {}",
            self.kind, self.event_id, self.error
        )
    }
}

impl StructuredLog for FanOutRequestFailed<'_> {
    fn log(&self) {
        tracing::error!(
            kind = %self.kind,
            event_id = self.event_id,
            "{}", self
        );
    }
}

/// A resource kind was degraded to unavailable after a fan-out failure.
///
/// # Log Level
/// `warn!` - Hydration will raise lookup errors for this kind
pub struct ResourceKindUnavailable {
    pub kind: ResourceKind,
}

impl Display for ResourceKindUnavailable {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resource kind {} is unavailable for this run; no partial results are kept",
            self.kind
        )
    }
}

impl StructuredLog for ResourceKindUnavailable {
    fn log(&self) {
        tracing::warn!(kind = %self.kind, "{}", self);
    }
}
