// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use evtmgmt_source::client::HttpApiClient;
use evtmgmt_source::config::load_and_validate_config;
use evtmgmt_source::errors::SourceError;
use evtmgmt_source::pipeline::run_pipeline;
use evtmgmt_source::publish::{ContentNode, NodeSink};
use evtmgmt_source::schema::declare_event_relationships;

/// Sink for standalone runs: logs each created node instead of handing it to
/// a host content graph.
struct LoggingSink;

#[async_trait]
impl NodeSink for LoggingSink {
    async fn create_node(&self, node: ContentNode) -> Result<(), SourceError> {
        tracing::debug!(node_id = %node.id, kind = %node.kind, digest = %node.digest, "node created");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <connector-config.yaml>", args[0]);
        eprintln!("Example: {} demos/config.sample.yaml", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1]).await {
        eprintln!("Run failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config_file: &str) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = load_and_validate_config(config_file)?;
    let client = Arc::new(HttpApiClient::new(&config)?);

    let mut run = run_pipeline(config, client, Arc::new(LoggingSink)).await?;

    // Standalone runs have no file-node subsystem; drain and discard any
    // queued asset requests so the summary can report them.
    let mut asset_request_count = 0usize;
    while run.asset_requests.try_recv().is_ok() {
        asset_request_count += 1;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in &run.nodes {
        *counts.entry(node.kind.as_str()).or_insert(0) += 1;
    }

    println!("Published {} nodes in {:?}", run.nodes.len(), start_time.elapsed());
    for kind in ["Event", "Speaker", "Sponsorship"] {
        println!("  {}: {}", kind, counts.get(kind).copied().unwrap_or(0));
    }
    println!("  asset requests queued: {asset_request_count}");

    if let Some(fields) = declare_event_relationships(&run.context) {
        for field in fields {
            println!(
                "  schema: {}.{} -> [{}]",
                field.node_type, field.field, field.target_type
            );
        }
    }

    Ok(())
}
