// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagnostic command line for the ring cache.
//!
//! Builds the cache once, then prints either its statistics or one packed
//! snapshot as JSON on stdout. Logging goes to stderr (`RUST_LOG` overrides
//! the default `info` filter).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use prime_rings::api;
use prime_rings::geometry::constants::DEFAULT_MAX_TIER;
use prime_rings::geometry::Pointer;

#[derive(Parser)]
#[command(name = "rings")]
#[command(about = "Precompute prime ring data and dump shader buffers as JSON")]
#[command(version)]
struct Cli {
    /// Highest tier to precompute (inclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_TIER as i64, allow_hyphen_values = true)]
    max_tier: i64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cache statistics
    Stats,

    /// Full packer output
    Full,

    /// Simple packer output
    Simple,

    /// One frame of the interactive packer
    Interactive {
        /// Animation time
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        time: f64,

        /// Pointer x position
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pointer_x: f64,

        /// Pointer y position
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pointer_y: f64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();

    let cache = api::build_cache(cli.max_tier).context("Failed to build tier cache")?;
    info!("Prime computation system initialized: {:?}", api::stats(&cache));

    let value = match cli.command {
        Command::Stats => serde_json::to_value(api::stats(&cache)),
        Command::Full => serde_json::to_value(api::pack_full(&cache)),
        Command::Simple => serde_json::to_value(api::pack_simple(&cache)),
        Command::Interactive {
            time,
            pointer_x,
            pointer_y,
        } => serde_json::to_value(api::pack_interactive(
            &cache,
            time,
            Pointer::new(pointer_x, pointer_y),
        )),
    }
    .context("Failed to serialize output")?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .context("Failed to format output")?;

    println!("{}", output);
    Ok(())
}
