// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for asset materialization events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A remote asset was materialized and tagged onto its node.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct AssetMaterialized<'a> {
    pub node_id: &'a str,
    pub url: &'a str,
}

impl Display for AssetMaterialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Materialized asset for node '{}' from {}",
            self.node_id, self.url
        )
    }
}

/// A remote asset could not be materialized. The node persists without its
/// asset reference.
///
/// # Log Level
/// `warn!` - Non-fatal by contract
pub struct AssetFetchFailed<'a> {
    pub node_id: &'a str,
    pub url: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for AssetFetchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset fetch for node '{}' failed ({}): {}",
            self.node_id, self.url, self.error
        )
    }
}

impl StructuredLog for AssetFetchFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            node_id = self.node_id,
            url = self.url,
            "{}", self
        );
    }
}
