// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod source;

pub use config::ConfigurationError;
pub use source::SourceError;
