//! Waypoint CLI Application
//!
//! Interactive chat front end for the waypoint planning assistant, plus a
//! few one-shot commands for extracting plans and managing the API key.

mod args;
mod cli;
mod renderer;
mod repl;

use std::{path::PathBuf, time::Duration};

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use repl::Repl;
use waypoint_core::{KeyStore, SessionBuilder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        key_file,
        model,
        base_url,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Extract(args)) => Cli::new(renderer).handle_extract(args),
        Some(Key { command }) => {
            Cli::new(renderer).handle_key_command(&key_store(key_file)?, command)
        }
        Some(Questions) => Cli::new(renderer).list_questions(),
        Some(Chat) | None => {
            let mut builder = SessionBuilder::new()
                .with_key_store(key_store(key_file)?)
                .with_model(model)
                .with_timeout(Duration::from_secs(timeout));
            if let Some(url) = base_url {
                builder = builder.with_base_url(url);
            }
            let session = builder.build().context("Failed to initialize session")?;
            Repl::new(session, renderer).run().await
        }
    }
}

fn key_store(key_file: Option<PathBuf>) -> Result<KeyStore> {
    match key_file {
        Some(path) => Ok(KeyStore::new(path)),
        None => KeyStore::at_default_path().context("Failed to locate the API key file"),
    }
}
