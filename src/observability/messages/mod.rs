// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output. Types
//! whose events carry fields worth querying also implement [`StructuredLog`],
//! which attaches those fields to the `tracing` event.

use std::fmt::Display;

pub mod assets;
pub mod fetch;
pub mod publish;

/// Messages that log themselves with structured fields attached.
pub trait StructuredLog: Display {
    /// Emit this message through `tracing` at its documented level.
    fn log(&self);
}
