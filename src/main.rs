// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use quarto::{Corpus, Searcher};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

const DEFAULT_LOG_FILTER: &str = "quarto=info,tower_http=info";

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `search --json` output stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            corpus,
            static_dir,
            port,
        } => serve(&corpus, &static_dir, port),
        Commands::Search {
            query,
            corpus,
            json,
        } => {
            let searcher = Searcher::new(load_corpus(&corpus)?);
            let results = searcher.search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&query, &results);
            }
            Ok(())
        }
        Commands::Inspect { corpus } => {
            display::print_works(&load_corpus(&corpus)?);
            Ok(())
        }
    }
}

#[cfg(feature = "server")]
fn serve(corpus: &Path, static_dir: &Path, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    // Index before binding so the first request never waits on it
    let searcher = Arc::new(Searcher::new(load_corpus(corpus)?));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(quarto::server::serve(searcher, static_dir, addr))
        .with_context(|| format!("server on {} failed", addr))
}

#[cfg(not(feature = "server"))]
fn serve(_corpus: &Path, _static_dir: &Path, _port: u16) -> anyhow::Result<()> {
    anyhow::bail!("quarto was built without the `server` feature")
}

fn load_corpus(path: &Path) -> anyhow::Result<Corpus> {
    #[cfg(feature = "parallel")]
    let spinner = loading_spinner(path)?;

    let corpus = Corpus::load(path).context("could not load corpus")?;

    #[cfg(feature = "parallel")]
    spinner.finish_and_clear();

    Ok(corpus)
}

#[cfg(feature = "parallel")]
fn loading_spinner(path: &Path) -> anyhow::Result<indicatif::ProgressBar> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .context("invalid progress template")?,
    );
    spinner.set_message(format!("Indexing {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}
