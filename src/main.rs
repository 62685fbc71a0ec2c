//! CLI entry point for the line2signal tool.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use line2signal::{Downloader, ShopClient, build_http_client, resolve_sticker_set_id};
use tracing::{debug, info};

mod cli;
mod config;

use cli::Args;
use config::SignalConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Log level priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let mut config = SignalConfig::from_env();
    if let Some(username) = args.username.clone() {
        config.username = username;
    }
    if args.password {
        config.password = prompt_line("Signal Password: ")?;
    }
    if !config.is_complete() {
        bail!(
            "no Signal credentials configured; set {}/{} or pass -u/-p",
            config::USERNAME_ENV,
            config::PASSWORD_ENV,
        );
    }
    info!(username = %config.username, "using Signal credentials");

    let sticker_id = resolve_sticker_set_id(&args.url)?;

    let sticker_dir = args.output.join(sticker_id.to_string());
    if sticker_dir.is_dir() && clear_existing_dir(&args, sticker_id)? {
        std::fs::remove_dir_all(&sticker_dir)
            .with_context(|| format!("failed to remove {}", sticker_dir.display()))?;
    }

    info!(sticker_id, "processing sticker set");

    let client = build_http_client().context("failed to build HTTP client")?;
    let shop = ShopClient::new(client.clone());
    let sticker_set = shop.fetch_sticker_set(sticker_id).await?;

    let downloader = Downloader::new(client);
    let base_dir = downloader.download(&sticker_set, &args.output).await?;

    println!("Stickers downloaded to '{}'", base_dir.display());
    Ok(())
}

/// Decides whether an existing pack directory should be cleared first.
///
/// Declining keeps the directory; the download then overwrites its files in
/// place one by one.
fn clear_existing_dir(args: &Args, sticker_id: u64) -> Result<bool> {
    if args.overwrite {
        return Ok(true);
    }
    let answer = prompt_line(&format!(
        "Sticker {sticker_id} is already downloaded, overwrite? [y/N]: "
    ))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
