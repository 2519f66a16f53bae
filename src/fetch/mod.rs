// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod fetcher;
mod resource_map;

pub use fetcher::{ResourceFetcher, ResourceKind};
pub use resource_map::ResourceMap;
