// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod assets;        // asset materialization boundary
pub mod client;        // HTTP client adapter
pub mod config;        // config loading + validation
pub mod errors;        // error handling
pub mod fetch;         // events fetch + per-event fan-out
pub mod hydrate;       // hydration, flattening, derived fields
pub mod model;         // entity types
pub mod observability;
pub mod pipeline;      // run orchestration
pub mod publish;       // content nodes + publisher
pub mod schema;        // relationship field declarations
pub mod uri;           // URI templates
