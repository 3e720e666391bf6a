//! catiq-server: HTTP backend for the CatastropheIQ dashboard.

use anyhow::Result;
use catiq_core::engine::PipelineEngine;
use catiq_server::{routes, settings::ServerSettings};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let settings = ServerSettings::from_args_and_env(&args, |key| env::var(key).ok())?;
    let config = settings.pipeline_config()?;

    let engine = Arc::new(PipelineEngine::build(config, rand::random()));

    println!("CatastropheIQ catiq-server");
    println!("  bind:  {}", settings.bind);
    println!("  seed:  {}", engine.seed());
    if let Some(path) = &settings.config_path {
        println!("  config: {}", path.display());
    }
    println!();

    let listener = tokio::net::TcpListener::bind(&settings.bind).await?;
    log::info!("Listening on {}", settings.bind);
    axum::serve(listener, routes::router(engine)).await?;

    Ok(())
}
