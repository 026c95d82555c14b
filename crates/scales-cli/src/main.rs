//! Scales CLI Application
//!
//! Runs the Telegram webhook server or the local plan/log/status commands
//! against the same tracker database.

mod args;
mod cli;
mod renderer;
mod server;
mod telegram;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use scales_core::{FixedClock, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user_id,
        today,
        profile,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_profile(profile.into());
    if let Some(today) = today {
        builder = builder.with_clock(FixedClock(today));
    }
    let tracker = builder
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Scales started");

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Serve(args) => {
            info!("Starting webhook server");
            server::serve(tracker, args)
                .await
                .context("Webhook server failed")
        }
        Plan(args) => Cli::new(tracker, renderer, user_id).create_plan(args).await,
        Log(args) => Cli::new(tracker, renderer, user_id).log_weight(args).await,
        Status(args) => Cli::new(tracker, renderer, user_id).show_status(args).await,
        Chat => Cli::new(tracker, renderer, user_id).chat().await,
    }
}
