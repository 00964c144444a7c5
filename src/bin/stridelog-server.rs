// ABOUTME: Server binary for the Stridelog fitness-tracking backend
// ABOUTME: Loads environment configuration, initializes logging and storage, serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # Stridelog Server Binary
//!
//! Starts the REST API over the configured storage backend.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use stridelog::{
    config::environment::ServerConfig,
    logging,
    server::{HttpServer, ServerResources},
    storage::Storage,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "stridelog-server")]
#[command(about = "Stridelog - REST backend for a two-person workout log")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the data directory for JSON-file storage
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.url = data_dir;
    }

    info!("{}", config.summary());

    let storage = Storage::new(&config.storage.url).await?;
    info!("Storage initialized: {}", storage.backend_info());

    let resources = Arc::new(ServerResources::new(storage, Arc::new(config.clone())));
    let server = HttpServer::new(resources);

    info!("Ready to serve the workout log on port {}", config.http_port);
    server.run(config.http_port).await
}
