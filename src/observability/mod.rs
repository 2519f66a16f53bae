// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the connector. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//! * `messages::fetch` - upstream fetch and fan-out events
//! * `messages::publish` - node publication events
//! * `messages::assets` - asset materialization events

pub mod messages;
