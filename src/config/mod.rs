// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub use loader::{load_and_validate_config, load_config, ConnectorConfig};
pub use validation::validate_connector_config;
