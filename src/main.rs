// src/main.rs

use anyhow::Context;
use clap::Parser;
use confluence2bookmarks::{serve, AppState, CommandLineInput, ConfluenceHttpClient, ServerConfig};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build();

    // hyper and rustls are chatty at debug level
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .logger(Logger::builder().build("hyper", LevelFilter::Warn))
        .logger(Logger::builder().build("rustls", LevelFilter::Warn))
        .build(Root::builder().appender("stdout").build(log_level))?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized at {}", log_level);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ServerConfig::resolve(cli)?;
    log::info!(
        "Fetching {} levels per tree, remote timeout {}s",
        config.depth,
        config.request_timeout.as_secs()
    );

    let mut client = ConfluenceHttpClient::new(config.request_timeout, config.depth)
        .context("Failed to build the Confluence HTTP client")?;
    if let Some(endpoint) = &config.graphql_endpoint {
        log::info!("Sending GraphQL queries to {}", endpoint);
        client = client.with_graphql_endpoint(endpoint.clone());
    }
    let state = AppState::new(Arc::new(client));

    serve(&config, state)
        .await
        .with_context(|| format!("Server on {} failed", config.listen_addr))?;

    Ok(())
}
